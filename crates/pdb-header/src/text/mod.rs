//! Fixed-column text form of the header.

pub mod emitter;
pub mod reader;
pub mod source;
pub mod writer;

use std::io::Write;

use crate::error::Result;
use crate::header::PdbHeader;

pub use emitter::RecordEmitter;
pub use reader::{PdbFile, read_pdb_file, read_pdb_header, read_text_header};
pub use source::{LineSource, PdbLineReader};
pub use writer::{write_pdb_header, write_text_header};

impl PdbHeader {
    /// Replace this header with the header block read from `source`.
    ///
    /// See [`read_text_header`].
    pub fn read_text<S: LineSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        read_text_header(source, self)
    }

    /// Write this header as fixed-column records.
    pub fn write_text<W: Write>(&self, writer: W) -> Result<()> {
        let mut emitter = RecordEmitter::new(writer);
        write_text_header(self, &mut emitter)?;
        emitter.flush()
    }
}
