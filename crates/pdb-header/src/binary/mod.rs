//! Compact binary form of the header.
//!
//! The binary form carries every field except remarks; see
//! [`write_binary_header`].

pub mod codec;
pub mod reader;
pub mod writer;

use std::io::{Read, Write};

use crate::error::Result;
use crate::header::PdbHeader;

pub use codec::{BinReader, BinWriter};
pub use reader::{read_binary_header, read_binary_header_file};
pub use writer::{write_binary_header, write_binary_header_file};

impl PdbHeader {
    /// Replace this header with one decoded from `reader`.
    ///
    /// See [`read_binary_header`].
    pub fn read_binary<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut reader = BinReader::new(reader);
        read_binary_header(&mut reader, self)
    }

    /// Encode this header in binary form, remarks excluded.
    pub fn write_binary<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BinWriter::new(writer);
        write_binary_header(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
