//! Error types for florin.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for florin operations.
pub type Result<T> = std::result::Result<T, FlorinError>;

/// Errors that can occur while building an economic time series.
#[derive(Error, Debug)]
pub enum FlorinError {
    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A row or cell could not be converted into a record.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A transformation precondition was violated.
    #[error("Precondition error: {0}")]
    Precondition(String),

    /// Dataset not found in the catalog.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// A source produced no usable records.
    #[error("No data available for {dataset}")]
    NoDataAvailable {
        /// The dataset that had no data.
        dataset: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output formatting error.
    #[error("Format error: {0}")]
    Format(String),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
