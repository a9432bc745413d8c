//! Property-based tests using proptest.

use std::io::Cursor;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use pdb_header::{PdbHeader, PdbLineReader, format_pdb_date, parse_pdb_date};

/// Strategy for calendar dates PDB files can carry.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Strategy for author names, some with inner blanks.
fn author_strategy() -> impl Strategy<Value = String> {
    "[A-Z]\\.[A-Z]{1,10}( [A-Z]{1,10}){0,2}"
}

/// Strategy for `EXPDTA` entries whose comments may force a wrap.
fn methods_strategy() -> impl Strategy<Value = std::collections::BTreeMap<String, String>> {
    prop::collection::btree_map(
        "[A-Z]{1,8}( [A-Z]{1,8})?",
        "([A-Z]{1,8}( [A-Z]{1,8}){0,6})?",
        1..5,
    )
}

fn text_roundtrip(header: &PdbHeader) -> PdbHeader {
    let mut buffer = Vec::new();
    header.write_text(&mut buffer).unwrap();
    let mut source = PdbLineReader::new(Cursor::new(buffer));
    let mut read_back = PdbHeader::blank();
    read_back.read_text(&mut source).unwrap();
    read_back
}

proptest! {
    /// Formatted dates always fill the date field exactly.
    #[test]
    fn date_is_always_eleven_chars(day in any::<u32>(), month in any::<u32>(), year in any::<u32>()) {
        prop_assert_eq!(format_pdb_date(day, month, year).len(), 11);
    }

    #[test]
    fn date_parses_back(date in date_strategy()) {
        let text = format_pdb_date(date.day(), date.month(), u32::try_from(date.year()).unwrap());
        prop_assert_eq!(parse_pdb_date(&text), Some(date));
    }

    /// Setting a fixed field twice gives the same value as setting it once.
    #[test]
    fn fixed_fields_are_idempotent(value in "[ A-Za-z0-9-]{0,60}") {
        let mut header = PdbHeader::blank();
        header.set_classification(&value);
        header.set_pdb_id(&value);
        let classification = header.classification().to_string();
        let pdb_id = header.pdb_id().to_string();

        prop_assert_eq!(classification.chars().count(), 40);
        prop_assert_eq!(pdb_id.chars().count(), 4);

        header.set_classification(&classification);
        header.set_pdb_id(&pdb_id);
        prop_assert_eq!(header.classification(), classification.as_str());
        prop_assert_eq!(header.pdb_id(), pdb_id.as_str());
    }

    #[test]
    fn resolution_never_exceeds_cap(value in -10.0f32..1000.0) {
        let mut header = PdbHeader::blank();
        header.set_resolution(value);
        prop_assert!(header.resolution() <= 99.94);
        prop_assert!(header.resolution() <= value);
    }

    /// Resolution survives the text form to two decimals.
    #[test]
    fn resolution_text_roundtrip(value in 0.01f32..99.94) {
        let mut header = PdbHeader::blank();
        header.set_resolution(value);
        let read_back = text_roundtrip(&header);
        prop_assert!((read_back.resolution() - value).abs() <= 0.0051);
    }

    /// Author lists survive the text form, wrapped or not.
    #[test]
    fn authors_text_roundtrip(authors in prop::collection::vec(author_strategy(), 1..12)) {
        let mut header = PdbHeader::blank();
        for author in &authors {
            header.add_author(author.as_str());
        }
        let read_back = text_roundtrip(&header);
        prop_assert_eq!(read_back.authors(), authors.as_slice());
    }

    /// Method comments survive the text form, wrapped or not.
    #[test]
    fn methods_text_roundtrip(methods in methods_strategy()) {
        let mut header = PdbHeader::blank();
        header.set_methods(methods);
        let read_back = text_roundtrip(&header);
        prop_assert_eq!(read_back.methods(), header.methods());
    }

    /// Binary form is lossless apart from remarks.
    #[test]
    fn binary_roundtrip(
        title in "[ -~]{0,80}",
        methods in prop::collection::btree_map("[A-Z -]{1,20}", "[ -~]{0,20}", 0..4),
        resolution in -1.0f32..99.94,
    ) {
        let mut header = PdbHeader::blank();
        header.set_title(title);
        header.set_methods(methods);
        header.set_resolution(resolution);
        header.add_remark(3, "DROPPED");

        let mut buffer = Vec::new();
        header.write_binary(&mut buffer).unwrap();
        let mut read_back = PdbHeader::blank();
        read_back.read_binary(Cursor::new(buffer)).unwrap();

        header.set_remarks(Vec::new());
        prop_assert_eq!(read_back, header);
    }
}
