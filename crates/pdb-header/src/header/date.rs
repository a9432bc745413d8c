//! PDB date handling.
//!
//! Dates in the `HEADER` record use the `DD-MON-YYYY` layout with an
//! uppercase three-letter month, e.g. `01-JAN-1999`.

use chrono::{Datelike, Local, NaiveDate};

/// Month abbreviations, index 0 standing for an unknown month.
pub const MONTHS: [&str; 13] = [
    "???", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Width of the date field.
pub const DATE_LEN: usize = 11;

/// Render a date as `DD-MON-YYYY`.
///
/// Out-of-range components are zeroed: a day above 31, a month above 12
/// or a year above 9999 render as `00`, `???` and `0000` respectively.
#[must_use]
pub fn format_pdb_date(day: u32, month: u32, year: u32) -> String {
    let day = if day > 31 { 0 } else { day };
    let month = if month > 12 { 0 } else { month };
    let year = if year > 9999 { 0 } else { year };

    format!("{day:02}-{}-{year:04}", MONTHS[month as usize])
}

/// Today's date in the local time zone, as `DD-MON-YYYY`.
#[must_use]
pub fn today() -> String {
    format_naive_date(Local::now().date_naive())
}

/// Render a chrono date as `DD-MON-YYYY`.
#[must_use]
pub fn format_naive_date(date: NaiveDate) -> String {
    let year = u32::try_from(date.year()).unwrap_or(0);
    format_pdb_date(date.day(), date.month(), year)
}

/// Parse a `DD-MON-YYYY` date.
///
/// Returns `None` for an unknown (`???`) month or any malformed input.
#[must_use]
pub fn parse_pdb_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().splitn(3, '-');
    let day = parts.next()?.parse::<u32>().ok()?;
    let month_name = parts.next()?.to_ascii_uppercase();
    let year = parts.next()?.parse::<i32>().ok()?;

    let month = MONTHS
        .iter()
        .skip(1)
        .position(|name| *name == month_name)?;

    NaiveDate::from_ymd_opt(year, month as u32 + 1, day)
}
