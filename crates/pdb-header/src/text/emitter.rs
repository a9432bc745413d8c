//! Fixed-width record emission.
//!
//! Every emitted line is exactly [`LINE_WIDTH`] characters followed by `\n`.
//!
//! # Continued records
//!
//! ```text
//! TITLE     FIRST LINE OF TEXT STARTS IN COLUMN 11
//! TITLE    2 CONTINUATIONS CARRY A NUMBER IN COLUMNS 9-10
//! ```
//!
//! # Remarks
//!
//! ```text
//! REMARK  99
//! REMARK  99 BODY TEXT STARTS IN COLUMN 12
//! ```
//!
//! The blank-body line opens a remark group; the reader relies on it to
//! tell groups apart.

use std::io::Write;

use crate::error::{HeaderError, Result};
use crate::record::{
    LINE_WIDTH, MAX_REMARK_ID, REMARK_BODY_OFFSET, TAG_WIDTH, TEXT_OFFSET, normalize_line,
};

/// Text width of the first line of a record.
pub const FIRST_LINE_TEXT: usize = LINE_WIDTH - TEXT_OFFSET;

/// Text width of continuation and remark lines.
pub const CONTINUATION_TEXT: usize = LINE_WIDTH - REMARK_BODY_OFFSET;

/// Writes tagged text as one or more fixed-width lines.
pub struct RecordEmitter<W: Write> {
    writer: W,
    lines: usize,
}

impl<W: Write> RecordEmitter<W> {
    /// Create a new emitter.
    pub fn new(writer: W) -> Self {
        Self { writer, lines: 0 }
    }

    /// Number of lines written so far.
    #[must_use]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Write one line, padded or truncated to the line width.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let line = normalize_line(line);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    /// Write `text` under `tag`, wrapping it over continuation lines.
    ///
    /// Embedded newlines always start a new physical line. A line longer
    /// than the record width is broken at a space, and a reader sees that
    /// break as a newline too unless it rejoins continuations itself.
    pub fn write_record(&mut self, tag: &str, text: &str) -> Result<()> {
        let mut continuation = 1usize;
        for segment in text.split('\n') {
            let width = if continuation == 1 {
                FIRST_LINE_TEXT
            } else {
                CONTINUATION_TEXT
            };
            for chunk in wrap_first(segment, width, CONTINUATION_TEXT) {
                let line = if continuation == 1 {
                    format!("{tag:<TAG_WIDTH$}    {chunk}")
                } else {
                    format!("{tag:<TAG_WIDTH$}  {continuation:>2} {chunk}")
                };
                self.write_line(&line)?;
                continuation += 1;
            }
        }
        Ok(())
    }

    /// Write a remark group: the blank opener line, then the body.
    ///
    /// Empty body lines are dropped since they would read back as openers.
    /// Body lines longer than [`CONTINUATION_TEXT`] are wrapped and read
    /// back as separate lines.
    ///
    /// # Errors
    ///
    /// [`HeaderError::RemarkIdOutOfRange`] when `id` is above
    /// [`MAX_REMARK_ID`]; nothing is written in that case.
    pub fn write_remark(&mut self, id: u32, text: &str) -> Result<()> {
        if id > MAX_REMARK_ID {
            return Err(HeaderError::RemarkIdOutOfRange { id });
        }
        self.write_line(&format!("REMARK {id:>3}"))?;
        for segment in text.split('\n').filter(|s| !s.trim().is_empty()) {
            for chunk in wrap(segment, CONTINUATION_TEXT) {
                self.write_line(&format!("REMARK {id:>3} {chunk}"))?;
            }
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Greedy word wrap; words longer than `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_first(text, width, width)
}

/// Word wrap with a different width for the first line.
fn wrap_first(text: &str, first: usize, rest: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0usize;
    let mut width = first;

    while chars.len() - start > width {
        let window = &chars[start..=start + width];
        match window.iter().rposition(|c| *c == ' ') {
            Some(pos) if pos > 0 => {
                lines.push(chars[start..start + pos].iter().collect());
                start += pos + 1;
            }
            _ => {
                lines.push(chars[start..start + width].iter().collect());
                start += width;
            }
        }
        width = rest;
    }

    if start < chars.len() || lines.is_empty() {
        lines.push(chars[start..].iter().collect());
    }
    lines
}
