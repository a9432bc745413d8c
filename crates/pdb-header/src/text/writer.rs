//! Header block writer for the fixed-column text format.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::header::{PdbHeader, RESOLUTION_REMARK, UNCLASSIFIED_REMARK, comment_separator};

use super::emitter::RecordEmitter;

/// Write `header` as fixed-column records.
///
/// Record order: `HEADER` (when a classification is set), `TITLE`,
/// `EXPDTA`, `AUTHOR` (each only when non-empty), `REMARK 2` with the
/// resolution, one `REMARK 99` per unclassified note, then every other
/// remark under its own id.
pub fn write_text_header<W: Write>(
    header: &PdbHeader,
    emitter: &mut RecordEmitter<W>,
) -> Result<()> {
    if !header.classification().trim().is_empty() {
        emitter.write_line(&header_line(header))?;
    }

    if !header.title().is_empty() {
        emitter.write_record("TITLE", header.title())?;
    }

    if !header.methods().is_empty() {
        emitter.write_record("EXPDTA", &methods_text(header.methods()))?;
    }

    if !header.authors().is_empty() {
        emitter.write_record("AUTHOR", &authors_text(header.authors()))?;
    }

    emitter.write_remark(RESOLUTION_REMARK, &resolution_text(header.resolution()))?;

    for note in header.unclassified() {
        emitter.write_remark(UNCLASSIFIED_REMARK, note)?;
    }

    for (id, text) in header.remarks() {
        emitter.write_remark(*id, text)?;
    }

    Ok(())
}

/// `HEADER` line: tag in 10 columns, classification (40), date (11), a
/// space, then the id (4).
fn header_line(header: &PdbHeader) -> String {
    format!(
        "{:<10}{:<40.40}{:<11.11} {:<4.4}",
        "HEADER",
        header.classification(),
        header.date(),
        header.pdb_id()
    )
}

/// `EXPDTA` text: `name, comment` entries joined by `"; "`.
#[must_use]
pub fn methods_text(methods: &BTreeMap<String, String>) -> String {
    methods
        .iter()
        .map(|(name, comment)| {
            if comment.is_empty() {
                name.clone()
            } else {
                format!("{name}{}{comment}", comment_separator(comment))
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `AUTHOR` text: names joined by `", "`, or by `","` when the next name
/// is empty or starts with a space.
#[must_use]
pub fn authors_text(authors: &[String]) -> String {
    let mut text = String::new();
    for (idx, author) in authors.iter().enumerate() {
        if idx > 0 {
            text.push_str(if author.is_empty() || author.starts_with(' ') {
                ","
            } else {
                ", "
            });
        }
        text.push_str(author);
    }
    text
}

/// `REMARK 2` body for a resolution.
#[must_use]
pub fn resolution_text(resolution: f32) -> String {
    if resolution > 0.0 {
        format!("RESOLUTION.{resolution:5.2} Angstroms.")
    } else {
        "RESOLUTION. NOT APPLICABLE.".to_string()
    }
}

/// Write a header to a file in text form.
pub fn write_pdb_header(path: &Path, header: &PdbHeader) -> Result<()> {
    let file = File::create(path)?;
    header.write_text(BufWriter::new(file))
}
