//! Date-literal parsing for dcterms:created / dcterms:modified.
//!
//! The harvested data mostly carries `YYYY-MM-DD`, occasionally with a time
//! suffix glued to the day field. A malformed literal is corrupt source data
//! and is surfaced as a fatal error rather than masked.

use chrono::NaiveDate;

use crate::errors::{Result, VocabError};

/// Parse a `YYYY-MM-DD`-like lexical form. Only the first two characters of
/// the day field are read, so `2020-01-15T00:00:00` parses as 2020-01-15.
pub fn parse_date_literal(value: &str) -> Result<NaiveDate> {
    let malformed = || VocabError::MalformedDate(value.to_string());

    let mut parts = value.splitn(3, '-');
    let year: i32 = parts
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let month: u32 = parts
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;
    let day_field = parts.next().ok_or_else(malformed)?;
    let day: u32 = day_field
        .get(..2)
        .unwrap_or(day_field)
        .parse()
        .map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}
