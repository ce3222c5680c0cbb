//! CSV row parsing.

use florin_types::{CsvLayout, Record};

use crate::ParseError;
use crate::date::parse_date;

/// Parses CSV bytes into records using the given column layout.
///
/// The first `layout.header_rows` rows are skipped; every remaining row
/// must yield exactly one record. Rows may have varying lengths (the ONS
/// export mixes annual, quarterly, and monthly sections) as long as the
/// configured columns are present in the data rows.
///
/// # Errors
///
/// Returns an error identifying the row and column if a date or number
/// fails to parse, if a configured column is missing, or if the input is
/// not well-formed CSV.
pub fn parse_csv(data: &[u8], layout: &CsvLayout) -> Result<Vec<Record>, ParseError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let fields = result?;
        if row < layout.header_rows {
            continue;
        }

        let date_text = fields
            .get(layout.date_column)
            .ok_or(ParseError::MissingColumn {
                row,
                column: layout.date_column,
            })?;
        let date = parse_date(date_text).map_err(|source| ParseError::InvalidDate {
            row,
            column: layout.date_column,
            source,
        })?;

        let value_text = fields
            .get(layout.value_column)
            .ok_or(ParseError::MissingColumn {
                row,
                column: layout.value_column,
            })?;
        let value = value_text
            .trim()
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber {
                row,
                column: layout.value_column,
                text: value_text.to_string(),
            })?;

        records.push(Record::new(date, value));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_simple_export() {
        let data = b"period,price\n2020-01-01,100.50\n2020-02-01,101.00\n";
        let layout = CsvLayout::new(0, 1, 1);

        let records = parse_csv(data, &layout).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(date(2020, 1, 1), 100.5),
                Record::new(date(2020, 2, 1), 101.0),
            ]
        );
    }

    #[test]
    fn test_header_rows_skipped_even_when_unparseable() {
        // ONS exports carry free-text metadata rows before the data
        let data = b"Title,CPI INDEX\nRelease date,2024-01-17\n1989 JAN,76.1\n";
        let layout = CsvLayout::new(0, 1, 2);

        let records = parse_csv(data, &layout).unwrap();
        assert_eq!(records, vec![Record::new(date(1989, 1, 1), 76.1)]);
    }

    #[test]
    fn test_columns_by_index() {
        let data = b"h,h,h,h,h,h,h\nx,y,z,2004-01-01,a,b,112345.67\n";
        let layout = CsvLayout::new(3, 6, 1);

        let records = parse_csv(data, &layout).unwrap();
        assert_eq!(records, vec![Record::new(date(2004, 1, 1), 112_345.67)]);
    }

    #[test]
    fn test_bad_date_names_row_and_column() {
        let data = b"2020-01-01,1.0\nnot-a-date,2.0\n";
        let layout = CsvLayout::new(0, 1, 0);

        let err = parse_csv(data, &layout).unwrap_err();
        match err {
            ParseError::InvalidDate { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, 0);
            }
            other => panic!("expected InvalidDate, got {other}"),
        }
    }

    #[test]
    fn test_bad_number_is_distinct_from_bad_date() {
        let data = b"2020-01-01,abc\n";
        let layout = CsvLayout::new(0, 1, 0);

        let err = parse_csv(data, &layout).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber { row: 0, column: 1, .. }
        ));
    }

    #[test]
    fn test_number_with_surrounding_whitespace() {
        let data = b"2020-01-01, 42.50 \n";
        let layout = CsvLayout::new(0, 1, 0);

        let records = parse_csv(data, &layout).unwrap();
        assert_eq!(records[0].value, 42.5);
    }

    #[test]
    fn test_missing_column() {
        let data = b"2020-01-01\n";
        let layout = CsvLayout::new(0, 1, 0);

        let err = parse_csv(data, &layout).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn { row: 0, column: 1 }));
    }

    #[test]
    fn test_empty_input() {
        let layout = CsvLayout::new(0, 1, 0);
        assert!(parse_csv(b"", &layout).unwrap().is_empty());
    }
}
