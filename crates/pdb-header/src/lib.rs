//! PDB file header reader and writer.
//!
//! This crate models the metadata block at the top of a PDB file
//! (classification, date, id, title, experimental methods, authors,
//! resolution and remarks) and moves it between two forms:
//!
//! - the legacy fixed-column text records (`HEADER`, `TITLE`, `EXPDTA`,
//!   `AUTHOR`, `REMARK`, ...)
//! - a compact binary encoding that carries every field except remarks
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use pdb_header::{PdbHeader, PdbLineReader};
//!
//! let text = "HEADER    PROTEIN                                 01-JAN-1999 1ABC\n\
//!             EXPDTA    X-RAY DIFFRACTION\n\
//!             ATOM      1  N   MET A   1      11.104  13.207   2.100\n";
//!
//! let mut source = PdbLineReader::new(Cursor::new(text));
//! let mut header = PdbHeader::blank();
//! header.read_text(&mut source).unwrap();
//!
//! assert_eq!(header.pdb_id(), "1ABC");
//! assert!(header.methods().contains_key("X-RAY DIFFRACTION"));
//!
//! // The ATOM line was left for the caller.
//! assert_eq!(source.into_remaining_lines().unwrap().len(), 1);
//! ```
//!
//! # Fresh headers
//!
//! ```
//! use pdb_header::{HeaderOptions, PdbHeader, StaticIdentity};
//!
//! let options = HeaderOptions::new().with_identity(&StaticIdentity::new("pat", "lbit"));
//! let header = PdbHeader::reset_with(&options);
//! assert!(header.unclassified()[0].ends_with("by pat@lbit"));
//! ```

pub mod binary;
mod error;
pub mod header;
mod options;
pub mod record;
pub mod text;

pub use error::{HeaderError, Result};

pub use header::{
    AnonymousIdentity, ClearMode, EnvIdentity, Identity, MONTHS, NO_RESOLUTION, PdbHeader,
    StaticIdentity, format_pdb_date, parse_pdb_date,
};
pub use options::HeaderOptions;
pub use record::{LINE_WIDTH, MAX_REMARK_ID, RecordType};

pub use text::{
    LineSource, PdbFile, PdbLineReader, RecordEmitter, read_pdb_file, read_pdb_header,
    write_pdb_header,
};

pub use binary::{BinReader, BinWriter, read_binary_header_file, write_binary_header_file};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
