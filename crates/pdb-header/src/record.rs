//! Record types and column layout of header lines.
//!
//! # Layout
//!
//! | Columns | Field                                   |
//! |---------|-----------------------------------------|
//! | 1-6     | Record type                             |
//! | 8-10    | Remark id (`REMARK` only)               |
//! | 11-     | Free text (`TITLE`, `EXPDTA`, `AUTHOR`) |
//! | 12-70   | Remark body                             |
//!
//! Columns are 1-indexed here; helpers below take 0-indexed offsets.

/// Fixed line width; shorter lines are treated as space-padded.
pub const LINE_WIDTH: usize = 70;

/// Width of the record type tag.
pub const TAG_WIDTH: usize = 6;

/// Offset of free text in `TITLE`, `EXPDTA` and `AUTHOR` records.
pub const TEXT_OFFSET: usize = 10;

/// Offset and width of the remark id.
pub const REMARK_ID_OFFSET: usize = 7;
pub const REMARK_ID_WIDTH: usize = 3;

/// Largest remark id that fits in its columns.
pub const MAX_REMARK_ID: u32 = 999;

/// Offset of the remark body.
pub const REMARK_BODY_OFFSET: usize = 11;

/// Header record types that are recognised but carry nothing we keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedRecord {
    Obslte,
    Caveat,
    Compnd,
    Source,
    Keywds,
    Revdat,
    Sprsde,
    Jrnl,
}

impl SkippedRecord {
    /// Record tag as it appears in the file.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Obslte => "OBSLTE",
            Self::Caveat => "CAVEAT",
            Self::Compnd => "COMPND",
            Self::Source => "SOURCE",
            Self::Keywds => "KEYWDS",
            Self::Revdat => "REVDAT",
            Self::Sprsde => "SPRSDE",
            Self::Jrnl => "JRNL",
        }
    }
}

/// Record type of one header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Header,
    Title,
    ExpData,
    Author,
    Remark,
    Skipped(SkippedRecord),
    /// Anything else ends the header block.
    Other,
}

const RECORD_TABLE: [(&str, RecordType); 13] = [
    ("HEADER", RecordType::Header),
    ("TITLE", RecordType::Title),
    ("EXPDTA", RecordType::ExpData),
    ("AUTHOR", RecordType::Author),
    ("REMARK", RecordType::Remark),
    ("OBSLTE", RecordType::Skipped(SkippedRecord::Obslte)),
    ("CAVEAT", RecordType::Skipped(SkippedRecord::Caveat)),
    ("COMPND", RecordType::Skipped(SkippedRecord::Compnd)),
    ("SOURCE", RecordType::Skipped(SkippedRecord::Source)),
    ("KEYWDS", RecordType::Skipped(SkippedRecord::Keywds)),
    ("REVDAT", RecordType::Skipped(SkippedRecord::Revdat)),
    ("SPRSDE", RecordType::Skipped(SkippedRecord::Sprsde)),
    ("JRNL", RecordType::Skipped(SkippedRecord::Jrnl)),
];

impl RecordType {
    /// Resolve a trimmed record tag. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        RECORD_TABLE
            .iter()
            .find(|(name, _)| *name == tag)
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Tag written for this record type, if it has one.
    #[must_use]
    pub fn tag(self) -> Option<&'static str> {
        RECORD_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
    }
}

/// Pad with spaces or truncate to exactly [`LINE_WIDTH`] characters.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let mut out: String = line.chars().take(LINE_WIDTH).collect();
    let count = out.chars().count();
    out.extend(std::iter::repeat_n(' ', LINE_WIDTH - count));
    out
}

/// Characters `offset..offset + len` of a line, clipped to its end.
#[must_use]
pub fn columns(line: &str, offset: usize, len: usize) -> &str {
    let start = byte_index(line, offset);
    let end = byte_index(&line[start..], len) + start;
    &line[start..end]
}

/// Characters from `offset` to the end of a line.
#[must_use]
pub fn columns_from(line: &str, offset: usize) -> &str {
    &line[byte_index(line, offset)..]
}

/// Trimmed record tag of a line.
#[must_use]
pub fn record_tag(line: &str) -> &str {
    columns(line, 0, TAG_WIDTH).trim()
}

fn byte_index(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(idx, _)| idx)
}
