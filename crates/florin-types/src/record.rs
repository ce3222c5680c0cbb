//! Date/value record representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single observation in a time series: one calendar day, one value.
///
/// Dates are day-granular. There is no time-of-day or timezone component;
/// the remote sources publish daily, monthly, or irregular day-stamped data
/// and everything downstream operates on whole calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Observed value (price, index level, or rate).
    pub value: f64,
}

impl Record {
    /// Creates a new record.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Returns true if this record falls on the same calendar day as `other`.
    #[must_use]
    pub fn same_day(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{:.2}", self.date.format("%Y-%m-%d"), self.value)
    }
}

/// Sorts records ascending by date.
///
/// The sort is stable: records sharing a date keep their input order, so the
/// later occurrence wins when a consumer walks duplicates in sequence.
pub fn sort_by_date(records: &mut [Record]) {
    records.sort_by_key(|r| r.date);
}
