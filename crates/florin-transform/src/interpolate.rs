//! Forward-fill densification of sparse series.

use florin_types::{Record, sort_by_date};

/// Expands a sparse series into one record per calendar day.
///
/// The input is sorted ascending by date first; callers need not pre-sort.
/// For each adjacent pair of input records, one output record is emitted
/// per day from the earlier date (inclusive) up to the later date
/// (exclusive), all carrying the earlier value: the last known value is
/// held constant until a new one appears, with no numeric interpolation
/// between the two.
///
/// The final input record only terminates the last gap; no output is
/// emitted for its own date. A single-record input therefore densifies to
/// an empty output, as does an empty one. Records sharing a date are
/// tolerated: the later one in sort order starts the next gap.
#[must_use]
pub fn densify(mut records: Vec<Record>) -> Vec<Record> {
    sort_by_date(&mut records);

    let mut dense = Vec::new();
    for pair in records.windows(2) {
        let mut date = pair[0].date;
        while date < pair[1].date {
            dense.push(Record::new(date, pair[0].value));
            let Some(next) = date.succ_opt() else { break };
            date = next;
        }
    }
    dense
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_forward_fill() {
        let sparse = vec![
            Record::new(date(2020, 1, 1), 10.0),
            Record::new(date(2020, 1, 4), 20.0),
        ];

        assert_eq!(
            densify(sparse),
            vec![
                Record::new(date(2020, 1, 1), 10.0),
                Record::new(date(2020, 1, 2), 10.0),
                Record::new(date(2020, 1, 3), 10.0),
            ]
        );
    }

    #[test]
    fn test_output_density() {
        let sparse = vec![
            Record::new(date(2020, 1, 1), 1.0),
            Record::new(date(2020, 2, 1), 2.0),
            Record::new(date(2020, 3, 1), 3.0),
        ];

        let dense = densify(sparse);

        // One record per day in [first, last), none for the last date
        assert_eq!(dense.len(), 60); // 31 (Jan) + 29 (leap Feb)
        assert_eq!(dense.first().unwrap().date, date(2020, 1, 1));
        assert_eq!(dense.last().unwrap().date, date(2020, 2, 29));
        for pair in dense.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let sparse = vec![
            Record::new(date(2020, 1, 4), 20.0),
            Record::new(date(2020, 1, 1), 10.0),
        ];

        let dense = densify(sparse);
        assert_eq!(dense.len(), 3);
        assert_eq!(dense[0], Record::new(date(2020, 1, 1), 10.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(densify(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_record_input() {
        // A lone record has no following record to fill towards
        let sparse = vec![Record::new(date(2020, 1, 1), 10.0)];
        assert!(densify(sparse).is_empty());
    }

    #[test]
    fn test_duplicate_dates_are_tolerated() {
        let sparse = vec![
            Record::new(date(2020, 1, 1), 10.0),
            Record::new(date(2020, 1, 1), 15.0),
            Record::new(date(2020, 1, 3), 20.0),
        ];

        // The later duplicate starts the next gap; the earlier one fills
        // nothing because the gap between the duplicates is empty
        assert_eq!(
            densify(sparse),
            vec![
                Record::new(date(2020, 1, 1), 15.0),
                Record::new(date(2020, 1, 2), 15.0),
            ]
        );
    }
}
