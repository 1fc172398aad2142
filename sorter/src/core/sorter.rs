//! Stable record ordering by a single column.

use std::cmp::Ordering;

use crate::core::collation::Collation;
use crate::core::types::{ColumnKey, Direction, FieldValue};
use crate::record::Record;

/// Compare two records on `column` in ascending order.
///
/// Text goes through the collator; numbers compare numerically.
pub fn compare_records(
    left: &Record,
    right: &Record,
    column: ColumnKey,
    collation: &Collation,
) -> Ordering {
    match (left.field(column), right.field(column)) {
        (FieldValue::Text(a), FieldValue::Text(b)) => collation.compare(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(&b),
        // A column has one type across all records.
        (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
        (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
    }
}

/// Return `records` ordered by `column` in `direction`, leaving the input untouched.
pub fn sort(
    records: &[Record],
    column: ColumnKey,
    direction: Direction,
    collation: &Collation,
) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sort_in_place(&mut sorted, column, direction, collation);
    sorted
}

/// Reorder `records` by `column` in `direction`.
///
/// Equal keys keep their current relative order in both directions: the
/// descending comparator is the reversed ascending one and `sort_by` is stable.
pub fn sort_in_place(
    records: &mut [Record],
    column: ColumnKey,
    direction: Direction,
    collation: &Collation,
) {
    records.sort_by(|a, b| {
        let ordering = compare_records(a, b, column, collation);
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collation::DEFAULT_LOCALE;

    fn korean() -> Collation {
        Collation::new(DEFAULT_LOCALE).expect("collation")
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|record| record.id).collect()
    }

    fn ages() -> Vec<Record> {
        vec![
            Record::new(1, "a", 30),
            Record::new(2, "b", 30),
            Record::new(3, "c", 10),
        ]
    }

    #[test]
    fn ascending_keeps_ties_in_input_order() {
        let sorted = sort(&ages(), ColumnKey::Age, Direction::Asc, &korean());
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn descending_does_not_reverse_ties() {
        let sorted = sort(&ages(), ColumnKey::Age, Direction::Desc, &korean());
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let input = ages();
        let _ = sort(&input, ColumnKey::Age, Direction::Asc, &korean());
        assert_eq!(input, ages());
    }

    #[test]
    fn ids_sort_numerically() {
        let records = vec![
            Record::new(100, "x", 1),
            Record::new(9, "y", 1),
            Record::new(-5, "z", 1),
        ];
        let sorted = sort(&records, ColumnKey::Id, Direction::Asc, &korean());
        assert_eq!(ids(&sorted), vec![-5, 9, 100]);
    }

    #[test]
    fn negative_ages_sort_below_zero() {
        let records = vec![
            Record::new(1, "a", 0),
            Record::new(2, "b", -3),
            Record::new(3, "c", 7),
        ];
        let sorted = sort(&records, ColumnKey::Age, Direction::Asc, &korean());
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn names_follow_korean_collation_not_codepoints() {
        let records = vec![
            Record::new(1, "가", 0),
            Record::new(2, "A", 0),
            Record::new(3, "나", 0),
        ];
        let sorted = sort(&records, ColumnKey::Name, Direction::Asc, &korean());
        let names: Vec<&str> = sorted.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["가", "나", "A"]);
    }

    #[test]
    fn case_variants_tie_and_stay_stable() {
        let records = vec![
            Record::new(1, "b", 0),
            Record::new(2, "B", 0),
            Record::new(3, "a", 0),
        ];
        let collation = Collation::new("en").expect("collation");
        let asc = sort(&records, ColumnKey::Name, Direction::Asc, &collation);
        assert_eq!(ids(&asc), vec![3, 1, 2]);
        let desc = sort(&records, ColumnKey::Name, Direction::Desc, &collation);
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn empty_and_single_sets_sort_trivially() {
        assert!(sort(&[], ColumnKey::Name, Direction::Asc, &korean()).is_empty());
        let one = vec![Record::new(7, "solo", 1)];
        assert_eq!(sort(&one, ColumnKey::Age, Direction::Desc, &korean()), one);
    }
}
