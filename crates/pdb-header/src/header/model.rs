//! In-memory header model.

use std::collections::BTreeMap;
use std::fmt;

use crate::options::HeaderOptions;

use super::date::{DATE_LEN, format_naive_date, format_pdb_date, today};

/// Width of the classification field.
pub const CLASSIFICATION_LEN: usize = 40;

/// Width of the PDB id field.
pub const PDB_ID_LEN: usize = 4;

/// Resolution sentinel meaning "unknown or not applicable".
pub const NO_RESOLUTION: f32 = -1.0;

/// Largest resolution the `REMARK 2` layout can carry.
pub const MAX_RESOLUTION: f32 = 99.94;

/// Remark id carrying the resolution.
pub const RESOLUTION_REMARK: u32 = 2;

/// Remark id used for unclassified notes.
pub const UNCLASSIFIED_REMARK: u32 = 99;

pub const ELECTRON_DIFFRACTION: &str = "ELECTRON DIFFRACTION";
pub const FIBER_DIFFRACTION: &str = "FIBER DIFFRACTION";
pub const FLUORESCENCE_TRANSFER: &str = "FLUORESCENCE TRANSFER";
pub const NEUTRON_DIFFRACTION: &str = "NEUTRON DIFFRACTION";
pub const NMR: &str = "NMR";
pub const THEORETICAL_MODEL: &str = "THEORETICAL MODEL";
pub const X_RAY_DIFFRACTION: &str = "X-RAY DIFFRACTION";

/// How [`PdbHeader::clear`] reseeds the fixed fields.
#[derive(Debug, Clone, Copy)]
pub enum ClearMode<'a> {
    /// Placeholder classification and id, a date, and a provenance note.
    Reset(&'a HeaderOptions),
    /// Space-filled classification, date and id; no provenance note.
    Blank,
}

/// Metadata block of a PDB file.
///
/// Classification, date and id are always stored at their fixed widths.
/// Methods are keyed by trimmed name and kept in name order.
#[derive(Debug, Clone, PartialEq)]
pub struct PdbHeader {
    classification: String,
    date: String,
    pdb_id: String,
    title: String,
    methods: BTreeMap<String, String>,
    authors: Vec<String>,
    resolution: f32,
    remarks: Vec<(u32, String)>,
    unclassified: Vec<String>,
}

impl Default for PdbHeader {
    fn default() -> Self {
        Self::blank()
    }
}

impl PdbHeader {
    /// Create a header seeded with placeholders and a provenance note.
    #[must_use]
    pub fn reset() -> Self {
        Self::reset_with(&HeaderOptions::default())
    }

    /// Create a seeded header using explicit options.
    #[must_use]
    pub fn reset_with(options: &HeaderOptions) -> Self {
        let mut header = Self::empty();
        header.clear(ClearMode::Reset(options));
        header
    }

    /// Create a header with space-filled fixed fields and nothing else.
    #[must_use]
    pub fn blank() -> Self {
        let mut header = Self::empty();
        header.clear(ClearMode::Blank);
        header
    }

    fn empty() -> Self {
        Self {
            classification: String::new(),
            date: String::new(),
            pdb_id: String::new(),
            title: String::new(),
            methods: BTreeMap::new(),
            authors: Vec::new(),
            resolution: NO_RESOLUTION,
            remarks: Vec::new(),
            unclassified: Vec::new(),
        }
    }

    /// Empty every collection and reset the resolution, then reseed the
    /// fixed fields according to `mode`.
    pub fn clear(&mut self, mode: ClearMode<'_>) {
        self.title.clear();
        self.methods.clear();
        self.authors.clear();
        self.remarks.clear();
        self.unclassified.clear();
        self.resolution = NO_RESOLUTION;

        match mode {
            ClearMode::Reset(options) => {
                self.set_classification("Unclassified");
                match options.date {
                    Some(date) => self.date = format_naive_date(date),
                    None => self.set_date_today(),
                }
                self.set_pdb_id("Void");
                self.add_unclassified(options.provenance());
            }
            ClearMode::Blank => {
                self.set_classification("");
                self.set_date("");
                self.set_pdb_id("");
            }
        }
    }

    // Fixed-width fields

    pub fn classification(&self) -> &str {
        &self.classification
    }

    pub fn set_classification(&mut self, value: &str) {
        self.classification = fixed_width(value, CLASSIFICATION_LEN);
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Set the date from text, trimmed then fitted to 11 columns.
    pub fn set_date(&mut self, value: &str) {
        self.date = fixed_width(value, DATE_LEN);
    }

    /// Set the date from components; see [`format_pdb_date`].
    pub fn set_date_parts(&mut self, day: u32, month: u32, year: u32) {
        self.date = format_pdb_date(day, month, year);
    }

    /// Stamp today's local date.
    pub fn set_date_today(&mut self) {
        self.date = today();
    }

    pub fn pdb_id(&self) -> &str {
        &self.pdb_id
    }

    pub fn set_pdb_id(&mut self, value: &str) {
        self.pdb_id = fixed_width(value, PDB_ID_LEN);
    }

    // Free text

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub(crate) fn title_mut(&mut self) -> &mut String {
        &mut self.title
    }

    // Methods

    pub fn methods(&self) -> &BTreeMap<String, String> {
        &self.methods
    }

    /// Replace all methods as-is.
    pub fn set_methods(&mut self, methods: BTreeMap<String, String>) {
        self.methods = methods;
    }

    /// Add an experimental method.
    ///
    /// The name is trimmed. When the name is already present a non-empty
    /// comment is appended to the existing one: after `","` if it starts
    /// with a space, after `", "` otherwise.
    pub fn add_method(&mut self, name: &str, comment: &str) {
        let name = name.trim();
        match self.methods.get_mut(name) {
            None => {
                self.methods.insert(name.to_string(), comment.to_string());
            }
            Some(existing) if !comment.is_empty() => {
                existing.push_str(comment_separator(comment));
                existing.push_str(comment);
            }
            Some(_) => {}
        }
    }

    // Authors

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn set_authors(&mut self, authors: Vec<String>) {
        self.authors = authors;
    }

    pub fn add_author(&mut self, author: impl Into<String>) {
        self.authors.push(author.into());
    }

    // Resolution

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Set the resolution in Angstroms, clamped to [`MAX_RESOLUTION`].
    pub fn set_resolution(&mut self, resolution: f32) {
        self.resolution = resolution.min(MAX_RESOLUTION);
    }

    /// Whether a resolution is known.
    #[must_use]
    pub fn has_resolution(&self) -> bool {
        self.resolution > 0.0
    }

    pub(crate) fn set_raw_resolution(&mut self, resolution: f32) {
        self.resolution = resolution;
    }

    // Remarks

    pub fn remarks(&self) -> &[(u32, String)] {
        &self.remarks
    }

    pub fn set_remarks(&mut self, remarks: Vec<(u32, String)>) {
        self.remarks = remarks;
    }

    pub fn add_remark(&mut self, id: u32, text: impl Into<String>) {
        self.remarks.push((id, text.into()));
    }

    // Unclassified notes

    pub fn unclassified(&self) -> &[String] {
        &self.unclassified
    }

    pub fn set_unclassified(&mut self, notes: Vec<String>) {
        self.unclassified = notes;
    }

    pub fn add_unclassified(&mut self, note: impl Into<String>) {
        self.unclassified.push(note.into());
    }

    /// Store decoded fixed fields without refitting them.
    pub(crate) fn set_raw_fixed_fields(
        &mut self,
        classification: String,
        date: String,
        pdb_id: String,
    ) {
        self.classification = classification;
        self.date = date;
        self.pdb_id = pdb_id;
    }
}

/// Separator placed before `comment` when joining it to a previous value.
pub(crate) fn comment_separator(comment: &str) -> &'static str {
    if comment.starts_with(' ') { "," } else { ", " }
}

/// Trim, then pad with spaces or truncate to exactly `len` characters.
pub(crate) fn fixed_width(value: &str, len: usize) -> String {
    let mut out: String = value.trim().chars().take(len).collect();
    let count = out.chars().count();
    out.extend(std::iter::repeat_n(' ', len - count));
    out
}

impl fmt::Display for PdbHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification: {}", self.classification)?;
        writeln!(f, "PDB ID: {}", self.pdb_id)?;
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Methods:")?;
        for (name, comment) in &self.methods {
            writeln!(f, "\t- {name}, {comment}")?;
        }
        write!(f, "Authors: ")?;
        for author in &self.authors {
            write!(f, "{author}, ")?;
        }
        writeln!(f)?;
        writeln!(f, "Resolution: {}", self.resolution)?;
        writeln!(f, "Unclassified remarks:")?;
        for note in &self.unclassified {
            writeln!(f, "\t- {note}")?;
        }
        for (id, text) in &self.remarks {
            writeln!(f, "{id}\t{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_blank_header() {
        let header = PdbHeader::blank();
        assert_eq!(header.classification(), " ".repeat(40));
        assert_eq!(header.date(), " ".repeat(11));
        assert_eq!(header.pdb_id(), "    ");
        assert!(header.unclassified().is_empty());
        assert_eq!(header.resolution(), NO_RESOLUTION);
    }

    #[test]
    fn test_reset_header() {
        let options = HeaderOptions::new()
            .with_program("pdbhead")
            .with_version("1.0")
            .with_date(NaiveDate::from_ymd_opt(2003, 3, 11).unwrap());
        let header = PdbHeader::reset_with(&options);

        assert_eq!(header.classification().trim_end(), "Unclassified");
        assert_eq!(header.classification().len(), CLASSIFICATION_LEN);
        assert_eq!(header.date(), "11-MAR-2003");
        assert_eq!(header.pdb_id(), "Void");
        assert_eq!(
            header.unclassified(),
            ["File generated using pdbhead 1.0 by anonymous@nohost"]
        );
    }

    #[test]
    fn test_clear_modes() {
        let mut header = PdbHeader::reset();
        header.set_title("A TITLE");
        header.add_author("SMITH");
        header.add_remark(3, "refinement");
        header.set_resolution(1.8);

        header.clear(ClearMode::Blank);
        assert!(header.title().is_empty());
        assert!(header.authors().is_empty());
        assert!(header.remarks().is_empty());
        assert!(header.unclassified().is_empty());
        assert_eq!(header.resolution(), NO_RESOLUTION);
        assert!(header.classification().trim().is_empty());

        let options = HeaderOptions::default();
        header.clear(ClearMode::Reset(&options));
        assert_eq!(header.unclassified().len(), 1);
        assert_eq!(header.pdb_id(), "Void");
    }

    #[test]
    fn test_fixed_width_setters() {
        let mut header = PdbHeader::blank();
        header.set_classification("  PROTEIN  ");
        assert_eq!(header.classification(), format!("{:<40}", "PROTEIN"));

        header.set_pdb_id("1abcdef");
        assert_eq!(header.pdb_id(), "1abc");

        header.set_date(" 01-JAN-1999 ");
        assert_eq!(header.date(), "01-JAN-1999");
    }

    #[test]
    fn test_set_date_parts() {
        let mut header = PdbHeader::blank();
        header.set_date_parts(7, 4, 2001);
        assert_eq!(header.date(), "07-APR-2001");
        header.set_date_parts(40, 20, 12000);
        assert_eq!(header.date(), "00-???-0000");
    }

    #[test]
    fn test_resolution_clamp() {
        let mut header = PdbHeader::blank();
        header.set_resolution(120.0);
        assert_eq!(header.resolution(), MAX_RESOLUTION);
        header.set_resolution(2.5);
        assert_eq!(header.resolution(), 2.5);
        assert!(header.has_resolution());
    }

    #[test]
    fn test_add_method_merging() {
        let mut header = PdbHeader::blank();
        header.add_method("A", "");
        header.add_method("A", "x");
        assert_eq!(header.methods().get("A").map(String::as_str), Some("x"));

        let mut header = PdbHeader::blank();
        header.add_method("A", "x");
        header.add_method(" A ", "y");
        header.add_method("A", "");
        header.add_method("A", " z");
        assert_eq!(header.methods().len(), 1);
        assert_eq!(header.methods()["A"], "x, y, z");
    }

    #[test]
    fn test_authors_keep_duplicates() {
        let mut header = PdbHeader::blank();
        header.add_author("DOE, J.");
        header.add_author("DOE, J.");
        assert_eq!(header.authors().len(), 2);
    }

    #[test]
    fn test_display_dump() {
        let mut header = PdbHeader::blank();
        header.set_pdb_id("1ABC");
        header.add_method(X_RAY_DIFFRACTION, "");
        header.add_author("SMITH");
        header.add_unclassified("note");
        header.add_remark(3, "refined");

        let dump = header.to_string();
        assert!(dump.contains("PDB ID: 1ABC\n"));
        assert!(dump.contains("\t- X-RAY DIFFRACTION, \n"));
        assert!(dump.contains("Authors: SMITH, \n"));
        assert!(dump.contains("Resolution: -1\n"));
        assert!(dump.contains("\t- note\n"));
        assert!(dump.ends_with("3\trefined\n"));
    }

    #[test]
    fn test_fixed_width_multibyte() {
        assert_eq!(fixed_width("Éé", 4), "Éé  ");
        assert_eq!(fixed_width("ÉéÉéÉ", 4), "ÉéÉé");
    }
}
