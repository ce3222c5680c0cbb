//! HTML rate-table scraping.

use florin_types::Record;
use scraper::{Html, Selector};

use crate::ParseError;
use crate::date::parse_date;

/// Parses the Bank of England rate table into records.
///
/// The table has no fixed column positions, so cells are located by the
/// page's alignment convention instead: within each body row the
/// `align="left"` cell holds the effective date and the `align="right"`
/// cell holds the rate. Every row must carry both or the parse fails.
///
/// # Errors
///
/// Returns an error naming the row (and cell) if a date or number fails to
/// parse or a row is missing either aligned cell.
pub fn parse_rate_table(html: &str) -> Result<Vec<Record>, ParseError> {
    let document = Html::parse_document(html);
    let row_selector =
        Selector::parse("#stats-table tbody tr").expect("static selector is valid");
    let cell_selector = Selector::parse("td").expect("static selector is valid");

    let mut records = Vec::new();
    for (row, tr) in document.select(&row_selector).enumerate() {
        let mut date = None;
        let mut value = None;

        for (column, cell) in tr.select(&cell_selector).enumerate() {
            let text: String = cell.text().collect();
            match cell.value().attr("align") {
                Some("left") => {
                    date = Some(parse_date(&text).map_err(|source| ParseError::InvalidDate {
                        row,
                        column,
                        source,
                    })?);
                }
                Some("right") => {
                    value = Some(text.trim().parse::<f64>().map_err(|_| {
                        ParseError::InvalidNumber {
                            row,
                            column,
                            text: text.trim().to_string(),
                        }
                    })?);
                }
                _ => {}
            }
        }

        match (date, value) {
            (Some(date), Some(value)) => records.push(Record::new(date, value)),
            (None, _) => {
                return Err(ParseError::MalformedRow {
                    row,
                    detail: "no left-aligned date cell".to_string(),
                });
            }
            (_, None) => {
                return Err(ParseError::MalformedRow {
                    row,
                    detail: "no right-aligned value cell".to_string(),
                });
            }
        }
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

    fn page(rows: &str) -> String {
        format!(
            "<html><body><table id=\"stats-table\">\
             <thead><tr><th>Date Changed</th><th>Rate</th></tr></thead>\
             <tbody>{rows}</tbody></table></body></html>"
        )
    }

    #[test]
    fn test_parse_aligned_cells() {
        let html = page(
            "<tr><td align=\"left\">07 Aug 2025</td><td align=\"right\">4.00</td></tr>\
             <tr><td align=\"left\">03 Nov 22</td><td align=\"right\">3.0</td></tr>",
        );

        let records = parse_rate_table(&html).unwrap();
        assert_eq!(
            records,
            vec![
                Record::new(date(2025, 8, 7), 4.0),
                Record::new(date(2022, 11, 3), 3.0),
            ]
        );
    }

    #[test]
    fn test_cell_order_does_not_matter() {
        let html = page(
            "<tr><td align=\"right\">0.25</td><td align=\"left\">2016-08-04</td></tr>",
        );

        let records = parse_rate_table(&html).unwrap();
        assert_eq!(records, vec![Record::new(date(2016, 8, 4), 0.25)]);
    }

    #[test]
    fn test_unaligned_cells_are_ignored() {
        let html = page(
            "<tr><td>footnote</td>\
             <td align=\"left\">2020-03-19</td><td align=\"right\">0.10</td></tr>",
        );

        let records = parse_rate_table(&html).unwrap();
        assert_eq!(records, vec![Record::new(date(2020, 3, 19), 0.1)]);
    }

    #[test]
    fn test_row_missing_value_cell() {
        let html = page("<tr><td align=\"left\">2020-03-19</td></tr>");

        let err = parse_rate_table(&html).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRow { row: 0, .. }));
    }

    #[test]
    fn test_bad_rate_number() {
        let html = page(
            "<tr><td align=\"left\">2020-03-19</td><td align=\"right\">n/a</td></tr>",
        );

        let err = parse_rate_table(&html).unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { row: 0, .. }));
    }

    #[test]
    fn test_value_with_surrounding_whitespace() {
        let html = page(
            "<tr><td align=\"left\">2020-03-19</td><td align=\"right\"> 0.10 </td></tr>",
        );

        let records = parse_rate_table(&html).unwrap();
        assert_eq!(records[0].value, 0.1);
    }

    #[test]
    fn test_missing_table_yields_no_records() {
        let records = parse_rate_table("<html><body><p>nothing</p></body></html>").unwrap();
        assert!(records.is_empty());
    }
}
