//! Date text parsing tolerant of the formats the sources actually use.
//!
//! The three data sources are not uniform: the Land Registry export uses ISO
//! dates, the Bank of England table uses `07 Aug 2025` / `03 Nov 22` style
//! dates, and ONS monthly rows carry only a year and month name. All of
//! them resolve to a plain calendar day.

use chrono::NaiveDate;
use thiserror::Error;

/// Day-granular formats, tried in order.
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%d %b %y"];

/// Month-granular formats, resolved to the first day of the month.
///
/// Each format carries a trailing `%d` so a literal day can be appended
/// before parsing; chrono cannot produce a `NaiveDate` without one.
const MONTH_FORMATS: &[&str] = &["%Y-%m %d", "%Y %b %d", "%b %Y %d"];

/// Error for date text matching none of the supported formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("date format not recognized: '{0}'")]
pub struct DateFormatError(pub String);

/// Parses date text in any of the supported formats.
///
/// Surrounding whitespace is ignored. Month-granular text (e.g. `1989 JAN`,
/// `2004-01`) resolves to the first day of that month.
///
/// # Errors
///
/// Returns a [`DateFormatError`] carrying the offending text if no format
/// matches.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    let trimmed = text.trim();

    for format in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    let with_day = format!("{trimmed} 1");
    for format in MONTH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, format) {
            return Ok(date);
        }
    }

    Err(DateFormatError(trimmed.to_string()))
}
