//! Inflation adjustment by index rebasing.

use chrono::NaiveDate;
use florin_types::{DateRange, Record, sort_by_date};
use thiserror::Error;

/// Errors for adjuster inputs that violate its preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreconditionError {
    /// One of the input series was empty.
    #[error("cannot adjust: {series} series is empty")]
    Empty {
        /// Which series was empty ("nominal" or "index").
        series: &'static str,
    },

    /// The two series share no date range at all.
    #[error("series do not overlap: common range would be {start} to {end}")]
    NoOverlap {
        /// Later of the two first dates.
        start: NaiveDate,
        /// Earlier of the two last dates.
        end: NaiveDate,
    },

    /// An overlap endpoint was absent from one of the series.
    ///
    /// Densified inputs sharing a calendar cannot hit this; it guards
    /// against being handed a sparse series by mistake.
    #[error("{date} is not in the {series} series")]
    DateNotFound {
        /// Which series lacked the date ("nominal" or "index").
        series: &'static str,
        /// The missing date.
        date: NaiveDate,
    },

    /// The index series carries a zero value, which cannot be rebased against.
    #[error("index value is zero at {date}, cannot rebase")]
    ZeroIndex {
        /// The date of the zero index value.
        date: NaiveDate,
    },
}

/// Rebases a nominal series against a price index over their common range.
///
/// Both inputs are expected dense ([`densify`](crate::densify) output) and
/// are sorted defensively on entry. Every value in the overlap window
/// `[max(first dates), min(last dates)]` is scaled by
/// `latest_index / index_that_day`, where `latest_index` is the index
/// series' final value (at its own last date, not necessarily the window
/// end). The result expresses the whole series in the purchasing power of
/// the index's most recent period.
///
/// # Errors
///
/// Returns a [`PreconditionError`] if either series is empty, the ranges
/// are disjoint, an overlap endpoint is missing from either series, or an
/// index value inside the window is exactly zero.
pub fn adjust_for_inflation(
    mut nominal: Vec<Record>,
    index: &[Record],
) -> Result<Vec<Record>, PreconditionError> {
    if nominal.is_empty() {
        return Err(PreconditionError::Empty { series: "nominal" });
    }
    if index.is_empty() {
        return Err(PreconditionError::Empty { series: "index" });
    }

    sort_by_date(&mut nominal);
    let mut index = index.to_vec();
    sort_by_date(&mut index);

    let start = nominal[0].date.max(index[0].date);
    let end = nominal[nominal.len() - 1]
        .date
        .min(index[index.len() - 1].date);
    let window =
        DateRange::new(start, end).map_err(|_| PreconditionError::NoOverlap { start, end })?;

    let nominal_start = position_of(&nominal, window.start, "nominal")?;
    let nominal_end = position_of(&nominal, window.end, "nominal")?;
    let index_start = position_of(&index, window.start, "index")?;
    let index_end = position_of(&index, window.end, "index")?;

    // Rebase onto the index's most recent period, not the window end
    let latest = index[index.len() - 1];
    if latest.value == 0.0 {
        return Err(PreconditionError::ZeroIndex { date: latest.date });
    }

    let days = (nominal_end - nominal_start).min(index_end - index_start);
    let mut real = Vec::with_capacity(window.total_days());
    for (offset, day) in window.days().enumerate().take(days + 1) {
        let nominal_record = nominal[nominal_start + offset];
        let index_record = index[index_start + offset];
        if index_record.value == 0.0 {
            return Err(PreconditionError::ZeroIndex { date: day });
        }
        real.push(Record::new(
            day,
            nominal_record.value * (latest.value / index_record.value),
        ));
    }

    Ok(real)
}

/// Locates the exact position of a date within a sorted series.
fn position_of(
    records: &[Record],
    date: NaiveDate,
    series: &'static str,
) -> Result<usize, PreconditionError> {
    records
        .binary_search_by_key(&date, |r| r.date)
        .map_err(|_| PreconditionError::DateNotFound { series, date })
}
