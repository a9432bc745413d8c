//! Binary header reader.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::trace;

use crate::error::{HeaderError, Result};
use crate::header::{ClearMode, PdbHeader};

use super::codec::BinReader;

/// Replace `header` with one decoded from `reader`.
///
/// The header is cleared (blank mode) first. Remarks are never present in
/// the binary form, so the result has none.
///
/// # Errors
///
/// - [`HeaderError::BinaryField`] / [`HeaderError::InvalidUtf8`] when a
///   fixed field or a collection count cannot be decoded.
/// - [`HeaderError::Truncated`] when the stream fails before a declared
///   number of collection elements has been read.
pub fn read_binary_header<R: Read>(
    reader: &mut BinReader<R>,
    header: &mut PdbHeader,
) -> Result<()> {
    header.clear(ClearMode::Blank);

    let classification = field(reader.read_str(), "classification")?;
    let date = field(reader.read_str(), "date")?;
    let pdb_id = field(reader.read_str(), "pdb id")?;
    header.set_raw_fixed_fields(classification, date, pdb_id);
    header.set_title(field(reader.read_str(), "title")?);
    header.set_raw_resolution(field(reader.read_f32(), "resolution")?);

    let count = field(reader.read_u64(), "method count")?;
    let pairs = read_elements(reader, "methods", count, |r| {
        Ok((r.read_str()?, r.read_str()?))
    })?;
    let mut methods = BTreeMap::new();
    for (name, comment) in pairs {
        methods.entry(name).or_insert(comment);
    }
    header.set_methods(methods);

    let count = field(reader.read_u64(), "author count")?;
    header.set_authors(read_elements(reader, "authors", count, BinReader::read_str)?);

    let count = field(reader.read_u64(), "unclassified count")?;
    header.set_unclassified(read_elements(
        reader,
        "unclassified",
        count,
        BinReader::read_str,
    )?);

    Ok(())
}

fn field<T>(result: io::Result<T>, name: &'static str) -> Result<T> {
    result.map_err(|e| HeaderError::binary_field(name, e))
}

/// Read `count` elements, failing with the number still expected as soon
/// as the stream goes bad.
fn read_elements<R, T, F>(
    reader: &mut BinReader<R>,
    section: &'static str,
    count: u64,
    mut read_one: F,
) -> Result<Vec<T>>
where
    R: Read,
    F: FnMut(&mut BinReader<R>) -> io::Result<T>,
{
    trace!(section, count, "reading binary collection");
    let mut items = Vec::new();
    let mut remaining = count;
    while remaining > 0 {
        if !reader.is_good() {
            return Err(HeaderError::truncated(section, remaining));
        }
        let item = read_one(reader).map_err(|_| HeaderError::truncated(section, remaining))?;
        items.push(item);
        remaining -= 1;
    }
    Ok(items)
}

/// Read a header from a binary file.
pub fn read_binary_header_file(path: &Path) -> Result<PdbHeader> {
    let file = File::open(path).map_err(|e| HeaderError::from_open(e, path))?;
    let mut header = PdbHeader::blank();
    header.read_binary(BufReader::new(file))?;
    Ok(header)
}
