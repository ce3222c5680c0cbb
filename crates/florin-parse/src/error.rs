//! Parse error definitions.

use thiserror::Error;

use crate::date::DateFormatError;

/// Errors that can occur while converting raw rows into records.
///
/// Every variant that refers to input names the row (and where it applies,
/// the column) that failed, so a caller can report exactly which part of a
/// multi-thousand-row export went bad.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A date cell did not match any supported format.
    #[error("row {row}, column {column}: {source}")]
    InvalidDate {
        /// Zero-based row index in the input.
        row: usize,
        /// Zero-based column index of the date cell.
        column: usize,
        /// The underlying date format error.
        #[source]
        source: DateFormatError,
    },

    /// A value cell was not parseable as a number.
    #[error("row {row}, column {column}: invalid number '{text}'")]
    InvalidNumber {
        /// Zero-based row index in the input.
        row: usize,
        /// Zero-based column index of the value cell.
        column: usize,
        /// The offending cell text.
        text: String,
    },

    /// A row was shorter than the configured column positions require.
    #[error("row {row}: missing column {column}")]
    MissingColumn {
        /// Zero-based row index in the input.
        row: usize,
        /// The column index that was absent.
        column: usize,
    },

    /// A scraped table row did not carry both a date and a value cell.
    #[error("row {row}: {detail}")]
    MalformedRow {
        /// Zero-based row index in the table body.
        row: usize,
        /// What was missing or duplicated.
        detail: String,
    },

    /// The underlying CSV reader rejected the input.
    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}
