//! Delimited record output.

use florin_types::Record;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing records.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Delimited record formatter.
///
/// Writes one row per record: the date as `YYYY-MM-DD` and the value with a
/// fixed decimal point and exactly two fractional digits, independent of
/// locale. No header row is written; the output round-trips through
/// `florin_parse::parse_csv` with date column 0, value column 1, and zero
/// header rows.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self { delimiter: '\t' }
    }

    /// Writes records to the given writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_records<W: Write>(
        &self,
        records: &[Record],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        for record in records {
            writeln!(
                writer,
                "{}{d}{:.2}",
                record.date.format("%Y-%m-%d"),
                record.value
            )?;
        }

        Ok(())
    }

    /// Writes records to a file, creating or truncating it.
    ///
    /// The output is buffered; the buffer is flushed before returning on
    /// every path, so a write failure never leaves silently-truncated rows
    /// behind an `Ok` result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to_path(&self, records: &[Record], path: &Path) -> Result<(), FormatError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let written = self.write_records(records, &mut writer);
        let flushed = writer.flush();
        written?;
        flushed?;
        Ok(())
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}
