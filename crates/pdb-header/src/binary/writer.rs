//! Binary header writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::header::PdbHeader;

use super::codec::BinWriter;

/// Serialize `header` in binary form.
///
/// Field order: classification, date, id, title, resolution, then methods
/// (count, then name/comment pairs), authors (count, then names) and
/// unclassified notes (count, then notes).
///
/// Remarks are not part of the binary form and are silently left out; a
/// header read back with [`read_binary_header`](super::read_binary_header)
/// has no remarks. There is no version tag.
pub fn write_binary_header<W: Write>(
    header: &PdbHeader,
    writer: &mut BinWriter<W>,
) -> Result<()> {
    writer.write_str(header.classification())?;
    writer.write_str(header.date())?;
    writer.write_str(header.pdb_id())?;
    writer.write_str(header.title())?;
    writer.write_f32(header.resolution())?;

    writer.write_len(header.methods().len())?;
    for (name, comment) in header.methods() {
        writer.write_str(name)?;
        writer.write_str(comment)?;
    }

    writer.write_len(header.authors().len())?;
    for author in header.authors() {
        writer.write_str(author)?;
    }

    writer.write_len(header.unclassified().len())?;
    for note in header.unclassified() {
        writer.write_str(note)?;
    }

    if !header.remarks().is_empty() {
        debug!(
            remarks = header.remarks().len(),
            "remarks are not stored in binary headers"
        );
    }
    Ok(())
}

/// Write a header to a file in binary form.
pub fn write_binary_header_file(path: &Path, header: &PdbHeader) -> Result<()> {
    let file = File::create(path)?;
    header.write_binary(BufWriter::new(file))
}
