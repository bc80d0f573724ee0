use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::dates::{DISPLAY_FORMAT, INPUT_FORMAT};

/// A single logged activity. Entries are embedded in their owning user's
/// record and never change once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl ExerciseEntry {
    #[must_use]
    pub fn display_date(&self) -> String {
        format_display_date(self.date)
    }
}

#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parses a `yyyy-mm-dd` bound used by log queries.
#[must_use]
pub fn parse_query_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_FORMAT).ok()
}

/// Parses the date of a new entry. Besides `yyyy-mm-dd`, full RFC 3339
/// timestamps are accepted and reduced to their calendar date.
#[must_use]
pub fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    parse_query_date(raw).or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Anything after the digits is ignored (`"30min"` is 30).
#[must_use]
pub fn parse_duration(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
