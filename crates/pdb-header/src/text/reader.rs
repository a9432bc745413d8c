//! Header block reader for the fixed-column text format.
//!
//! Lines are consumed until the first record type that does not belong to
//! the header block; that line is pushed back for the caller.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{HeaderError, Result};
use crate::header::{ClearMode, NO_RESOLUTION, PdbHeader, RESOLUTION_REMARK};
use crate::record::{
    REMARK_BODY_OFFSET, REMARK_ID_OFFSET, REMARK_ID_WIDTH, RecordType, TEXT_OFFSET, columns,
    columns_from, normalize_line, record_tag,
};

use super::source::{LineSource, PdbLineReader};

/// Offset of the resolution value in the assembled `REMARK 2` text.
///
/// ```text
/// REMARK   2 RESOLUTION. 2.50 Angstroms.
///            ^          ^
///            0          11
/// ```
pub const RESOLUTION_OFFSET: usize = 11;

/// Width of the resolution value in the assembled `REMARK 2` text.
pub const RESOLUTION_WIDTH: usize = 5;

/// What the scanner wants after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Stop,
}

/// Accumulators carried from line to line while scanning the block.
#[derive(Debug, Default)]
struct ScanState {
    method_text: Option<String>,
    author_text: Option<String>,
    remark_id: u32,
    remark_text: String,
    held_remarks: Vec<(String, u32)>,
}

impl ScanState {
    /// Dispatch one physical line.
    fn consume(&mut self, raw: &str, header: &mut PdbHeader) -> Step {
        let line = normalize_line(raw);
        let tag = record_tag(&line);
        if tag.is_empty() {
            return Step::Continue;
        }

        match RecordType::from_tag(tag) {
            RecordType::Header => {
                header.set_classification(columns(&line, 10, 40));
                header.set_date(columns(&line, 50, 11));
                header.set_pdb_id(columns(&line, 62, 4));
            }
            RecordType::Title => {
                let text = columns_from(&line, TEXT_OFFSET).trim();
                let title = header.title_mut();
                if !title.is_empty() {
                    title.push('\n');
                }
                title.push_str(text);
            }
            RecordType::ExpData => {
                append_record_text(&mut self.method_text, columns_from(&line, TEXT_OFFSET));
            }
            RecordType::Author => {
                append_record_text(&mut self.author_text, columns_from(&line, TEXT_OFFSET));
            }
            RecordType::Remark => self.consume_remark(&line),
            RecordType::Skipped(kind) => {
                debug!("skipped {} record in PDB header", kind.tag());
            }
            RecordType::Other => {
                trace!(tag, "end of PDB header block");
                return Step::Stop;
            }
        }
        Step::Continue
    }

    /// A blank body opens a new remark group; anything else continues the
    /// current one.
    fn consume_remark(&mut self, line: &str) {
        let body = columns_from(line, REMARK_BODY_OFFSET).trim();
        if body.is_empty() {
            self.flush_remark();
            self.remark_id = columns(line, REMARK_ID_OFFSET, REMARK_ID_WIDTH)
                .trim()
                .parse()
                .unwrap_or(0);
        } else {
            if !self.remark_text.is_empty() {
                self.remark_text.push('\n');
            }
            self.remark_text.push_str(body);
        }
    }

    fn flush_remark(&mut self) {
        if !self.remark_text.is_empty() {
            let text = std::mem::take(&mut self.remark_text);
            self.held_remarks.push((text, self.remark_id));
        }
    }

    /// Parse the accumulated text into the header.
    fn finish(mut self, header: &mut PdbHeader) {
        self.flush_remark();

        if let Some(text) = &self.method_text {
            let text = join_continuations(text);
            for (name, comment) in parse_methods(&text) {
                header.add_method(name, &comment);
            }
        }

        if let Some(text) = &self.author_text {
            let text = join_continuations(text);
            for author in parse_authors(&text) {
                header.add_author(author);
            }
        }

        for (text, id) in self.held_remarks {
            if id == RESOLUTION_REMARK {
                match resolution_from_remark(&text) {
                    Some(value) => header.set_resolution(value),
                    None => header.set_resolution(NO_RESOLUTION),
                }
            } else {
                header.add_remark(id, text);
            }
        }

        debug!(
            methods = header.methods().len(),
            authors = header.authors().len(),
            remarks = header.remarks().len(),
            "parsed PDB header"
        );
    }
}

/// Append a record's text to a multi-line buffer, newline separated, with
/// the column padding replaced by a single trailing space.
fn append_record_text(buffer: &mut Option<String>, text: &str) {
    let buffer = buffer.get_or_insert_with(String::new);
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(text.trim_end());
    buffer.push(' ');
}

/// Rejoin the lines of a wrapped `EXPDTA` or `AUTHOR` record.
///
/// The writer breaks these records at a single space, so each line break
/// stands for one space in the logical text.
fn join_continuations(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `EXPDTA` text into `(name, comment)` pairs.
///
/// Entries are separated by `;`. Within an entry the first `,` separates
/// the method name from its comment. Names are left untrimmed; comments
/// are trimmed.
#[must_use]
pub fn parse_methods(text: &str) -> Vec<(&str, String)> {
    text.split(';')
        .map(|entry| match entry.split_once(',') {
            Some((name, comment)) => (name, comment.trim().to_string()),
            None => (entry, String::new()),
        })
        .collect()
}

/// Split `AUTHOR` text on `,` and trim each name. Empty names are kept.
#[must_use]
pub fn parse_authors(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).collect()
}

/// Pull the resolution out of assembled `REMARK 2` text.
///
/// Blanks at [`RESOLUTION_OFFSET`] are skipped, then only the next
/// [`RESOLUTION_WIDTH`] characters are examined and their longest numeric
/// prefix is parsed.
#[must_use]
pub fn resolution_from_remark(text: &str) -> Option<f32> {
    if text.chars().count() <= RESOLUTION_OFFSET {
        return None;
    }
    let field: String = text
        .chars()
        .skip(RESOLUTION_OFFSET)
        .skip_while(|c| c.is_whitespace())
        .take(RESOLUTION_WIDTH)
        .collect();
    leading_float(&field)
}

/// Parse the longest prefix of `text` that forms a decimal number.
fn leading_float(text: &str) -> Option<f32> {
    let bytes = text.as_bytes();
    let mut end = 0usize;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// Read a header block from `source` into `header`.
///
/// The header is cleared (blank mode) first. Reading stops at end of input
/// or at the first line whose record type is not part of a header block;
/// that line is pushed back onto `source`.
///
/// # Errors
///
/// Returns [`HeaderError::ReadFailed`] if the source fails mid-read. Fields
/// applied before the failing line are kept.
pub fn read_text_header<S>(source: &mut S, header: &mut PdbHeader) -> Result<()>
where
    S: LineSource + ?Sized,
{
    header.clear(ClearMode::Blank);
    let mut state = ScanState::default();

    loop {
        let line = match source.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(HeaderError::read_failed(source.line_number() + 1, e)),
        };
        if state.consume(&line, header) == Step::Stop {
            source.unread_line();
            break;
        }
    }

    state.finish(header);
    Ok(())
}

/// A PDB file split into its header block and the remaining lines.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbFile {
    pub header: PdbHeader,
    /// Lines after the header block, starting with the one that ended it.
    pub body: Vec<String>,
}

/// Read the header block of a PDB file.
pub fn read_pdb_header(path: &Path) -> Result<PdbHeader> {
    let mut source = open_lines(path)?;
    let mut header = PdbHeader::blank();
    read_text_header(&mut source, &mut header)?;
    Ok(header)
}

/// Read a PDB file, keeping the lines after the header block.
pub fn read_pdb_file(path: &Path) -> Result<PdbFile> {
    let mut source = open_lines(path)?;
    let mut header = PdbHeader::blank();
    read_text_header(&mut source, &mut header)?;
    let body = source.into_remaining_lines()?;
    Ok(PdbFile { header, body })
}

fn open_lines(path: &Path) -> Result<PdbLineReader<BufReader<File>>> {
    let file = File::open(path).map_err(|e| HeaderError::from_open(e, path))?;
    Ok(PdbLineReader::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_methods() {
        let methods = parse_methods("X-RAY DIFFRACTION; NMR, SOLUTION ");
        assert_eq!(
            methods,
            vec![
                ("X-RAY DIFFRACTION", String::new()),
                (" NMR", "SOLUTION".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_methods_comma_scoped_to_entry() {
        let methods = parse_methods("A; B, C, D");
        assert_eq!(methods[0], ("A", String::new()));
        assert_eq!(methods[1], (" B", "C, D".to_string()));
    }

    #[test]
    fn test_parse_authors() {
        assert_eq!(
            parse_authors("J.SMITH, A.DOE,B.ROE "),
            ["J.SMITH", "A.DOE", "B.ROE"]
        );
        assert_eq!(parse_authors("J.SMITH, "), ["J.SMITH", ""]);
    }

    #[test]
    fn test_resolution_from_remark() {
        assert_eq!(resolution_from_remark("RESOLUTION. 2.50 Angstroms."), Some(2.5));
        assert_eq!(resolution_from_remark("RESOLUTION.   2.50 ANGSTROMS."), Some(2.5));
        assert_eq!(resolution_from_remark("RESOLUTION.10.25 Angstroms."), Some(10.25));
        assert_eq!(resolution_from_remark("RESOLUTION.    1.74 ANGSTROMS."), Some(1.74));
        assert_eq!(resolution_from_remark("RESOLUTION. NOT APPLICABLE."), None);
        assert_eq!(resolution_from_remark("RESOLUTION. X.XX"), None);
        assert_eq!(resolution_from_remark("RESOLUTION."), None);
        assert_eq!(resolution_from_remark(""), None);
    }

    #[test]
    fn test_resolution_uses_assembled_text() {
        // The offset counts from the start of the joined body, newlines included.
        assert_eq!(resolution_from_remark("RESOLUTION\n 1.90"), Some(1.9));
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("2.5A"), Some(2.5));
        assert_eq!(leading_float("-1."), Some(-1.0));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float("ABC"), None);
    }

    #[test]
    fn test_scan_state_remark_groups() {
        let mut header = PdbHeader::blank();
        let mut state = ScanState::default();
        for line in [
            "REMARK   3",
            "REMARK   3 REFINEMENT.",
            "REMARK   3  PROGRAM : X-PLOR",
            "REMARK   4",
            "REMARK 200",
            "REMARK 200 EXPERIMENTAL DETAILS",
        ] {
            assert_eq!(state.consume(line, &mut header), Step::Continue);
        }
        state.finish(&mut header);

        assert_eq!(
            header.remarks(),
            [
                (3, "REFINEMENT.\nPROGRAM : X-PLOR".to_string()),
                (200, "EXPERIMENTAL DETAILS".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_state_stops_on_unknown() {
        let mut header = PdbHeader::blank();
        let mut state = ScanState::default();
        assert_eq!(state.consume("", &mut header), Step::Continue);
        assert_eq!(state.consume("KEYWDS    RNA", &mut header), Step::Continue);
        assert_eq!(
            state.consume("ATOM      1  P     G A   1", &mut header),
            Step::Stop
        );
    }

    #[test]
    fn test_wrapped_expdta_rejoins_comment() {
        let mut header = PdbHeader::blank();
        let mut state = ScanState::default();
        for line in [
            "EXPDTA    X-RAY DIFFRACTION, SINGLE CRYSTAL, MOLECULAR REPLACEMENT",
            "EXPDTA   2 FROM A PRIOR MODEL; NMR",
        ] {
            state.consume(line, &mut header);
        }
        state.finish(&mut header);

        assert_eq!(
            header.methods()["X-RAY DIFFRACTION"],
            "SINGLE CRYSTAL, MOLECULAR REPLACEMENT FROM A PRIOR MODEL"
        );
        assert_eq!(header.methods()["NMR"], "");
    }

    #[test]
    fn test_join_continuations() {
        assert_eq!(join_continuations("J. \n SMITH, A.DOE "), "J. SMITH, A.DOE");
        assert_eq!(join_continuations("NMR "), "NMR");
        assert_eq!(join_continuations("J.SMITH, "), "J.SMITH,");
    }

    #[test]
    fn test_no_expdta_means_no_methods() {
        let mut header = PdbHeader::blank();
        let state = ScanState::default();
        state.finish(&mut header);
        assert!(header.methods().is_empty());
        assert!(header.authors().is_empty());
    }
}
