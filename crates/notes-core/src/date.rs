//! The fixed-width `dd.mm.yyyy` date representation used on disk and in the CLI.

use chrono::{Datelike, NaiveDate};

use crate::error::{NotesError, Result};

/// chrono format string for note dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Render a date as `dd.mm.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Years that fit the four-digit `yyyy` field.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Reject dates whose year cannot be written as four digits.
///
/// chrono formats such years with a sign or a fifth digit, which
/// [`parse_date`] would refuse on the next load.
pub fn check_date(date: NaiveDate) -> Result<()> {
    if YEAR_RANGE.contains(&date.year()) {
        Ok(())
    } else {
        Err(NotesError::InvalidInput(format!(
            "Year {} is outside {}..={}",
            date.year(),
            YEAR_RANGE.start(),
            YEAR_RANGE.end()
        )))
    }
}

/// Parse a strict `dd.mm.yyyy` date.
///
/// Every component must be zero-padded and the date must exist on the
/// calendar, so `1.1.2021` and `31.02.2021` are both rejected.
///
/// # Examples
///
/// ```
/// use notes_core::date::parse_date;
///
/// assert!(parse_date("11.07.2021").is_ok());
/// assert!(parse_date("2021-07-11").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid =
        || NotesError::InvalidInput(format!("Invalid date (expected dd.mm.yyyy): {}", value));

    let shape_ok = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
