//! Exercise log query: date-range filtering and front truncation.
//!
//! Entries are never re-sorted. With no bounds the log is the first `limit`
//! entries in append order; with either bound the entries strictly inside
//! `(from, to)` are kept first and then truncated the same way.

use chrono::NaiveDate;

use super::exercise_service::ExerciseError;
use crate::models::ExerciseEntry;
use crate::models::exercise::parse_query_date;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Builds a query from raw request values. Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExerciseError::InvalidDateFormat`] for a bound that is not
    /// `yyyy-mm-dd` and [`ExerciseError::InvalidLimit`] for a limit that is
    /// not a non-negative integer.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, ExerciseError> {
        Ok(Self {
            from: non_empty(from).map(parse_bound).transpose()?,
            to: non_empty(to).map(parse_bound).transpose()?,
            limit: non_empty(limit)
                .map(|raw| {
                    raw.parse::<usize>()
                        .map_err(|_| ExerciseError::InvalidLimit(raw.to_string()))
                })
                .transpose()?,
        })
    }

    #[must_use]
    pub const fn has_range(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    fn in_range(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date > from) && self.to.is_none_or(|to| date < to)
    }

    /// Applies the query to entries in storage order.
    #[must_use]
    pub fn apply(&self, entries: &[ExerciseEntry]) -> Vec<ExerciseEntry> {
        let limit = self.limit.unwrap_or(usize::MAX);

        if self.has_range() {
            entries
                .iter()
                .filter(|entry| self.in_range(entry.date))
                .take(limit)
                .cloned()
                .collect()
        } else {
            entries.iter().take(limit).cloned().collect()
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_bound(raw: &str) -> Result<NaiveDate, ExerciseError> {
    parse_query_date(raw).ok_or_else(|| ExerciseError::InvalidDateFormat(raw.to_string()))
}
