//! Library side of the `pdbhead` command-line tool.

pub mod convert;
pub mod logging;
