//! Client-side sorting.

use std::cmp::Ordering;

use super::column::ColumnDef;
use super::row::Row;
use super::state::{SortDirection, SortingState};
use super::value::CellValue;

/// Next direction when a column header is clicked.
///
/// Cycles unsorted → `first` → reversed `first` → unsorted.
pub fn next_sort_direction(
    current: Option<SortDirection>,
    first: SortDirection,
) -> Option<SortDirection> {
    match current {
        None => Some(first),
        Some(direction) if direction == first => Some(first.reversed()),
        Some(_) => None,
    }
}

/// First direction for a column without an explicit preference.
///
/// Text sorts ascending first, everything else descending first.
pub fn auto_sort_direction(sample: Option<&CellValue>) -> SortDirection {
    match sample {
        Some(value) if value.is_text() => SortDirection::Ascending,
        _ => SortDirection::Descending,
    }
}

/// Sort rows by `sorting`, recursing into sub-rows.
///
/// The sort is stable, so rows that compare equal keep data order. Sorts on
/// unknown or value-less columns are ignored.
pub(crate) fn sort_rows<'a, T>(
    rows: &mut Vec<Row<'a, T>>,
    sorting: &SortingState,
    columns: &[ColumnDef<T>],
) {
    let keys: Vec<(&ColumnDef<T>, SortDirection)> = sorting
        .entries()
        .iter()
        .filter_map(|sort| {
            columns
                .iter()
                .find(|column| column.id() == sort.id && column.has_accessor())
                .map(|column| (column, sort.direction()))
        })
        .collect();
    if keys.is_empty() {
        return;
    }
    sort_with_keys(rows, &keys);
}

fn sort_with_keys<'a, T>(rows: &mut Vec<Row<'a, T>>, keys: &[(&ColumnDef<T>, SortDirection)]) {
    let mut keyed: Vec<(Vec<CellValue>, Row<'a, T>)> = rows
        .drain(..)
        .map(|row| {
            let values = keys
                .iter()
                .map(|(column, _)| column.value(row.original()))
                .collect();
            (values, row)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        for ((x, y), (_, direction)) in a.iter().zip(b.iter()).zip(keys) {
            let ordering = compare_in_direction(x, y, *direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
    for row in rows.iter_mut() {
        if !row.sub_rows().is_empty() {
            sort_with_keys(row.sub_rows_mut(), keys);
        }
    }
}

/// Order two values for `direction`. Missing values stay last either way.
fn compare_in_direction(x: &CellValue, y: &CellValue, direction: SortDirection) -> Ordering {
    if x.is_missing() || y.is_missing() {
        return x.compare(y);
    }
    match direction {
        SortDirection::Ascending => x.compare(y),
        SortDirection::Descending => y.compare(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_descending_first() {
        let first = SortDirection::Descending;
        let step1 = next_sort_direction(None, first);
        let step2 = next_sort_direction(step1, first);
        let step3 = next_sort_direction(step2, first);
        assert_eq!(step1, Some(SortDirection::Descending));
        assert_eq!(step2, Some(SortDirection::Ascending));
        assert_eq!(step3, None);
    }

    #[test]
    fn test_cycle_ascending_first() {
        let first = SortDirection::Ascending;
        assert_eq!(next_sort_direction(None, first), Some(SortDirection::Ascending));
        assert_eq!(
            next_sort_direction(Some(SortDirection::Ascending), first),
            Some(SortDirection::Descending)
        );
        assert_eq!(next_sort_direction(Some(SortDirection::Descending), first), None);
    }

    #[test]
    fn test_auto_direction() {
        assert_eq!(
            auto_sort_direction(Some(&CellValue::from("nginx"))),
            SortDirection::Ascending
        );
        assert_eq!(
            auto_sort_direction(Some(&CellValue::Int(3))),
            SortDirection::Descending
        );
        assert_eq!(auto_sort_direction(None), SortDirection::Descending);
    }

    #[test]
    fn test_missing_values_last_in_both_directions() {
        let missing = CellValue::None;
        let nan = CellValue::Float(f64::NAN);
        let present = CellValue::Int(3);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            assert_eq!(compare_in_direction(&missing, &present, direction), Ordering::Greater);
            assert_eq!(compare_in_direction(&present, &nan, direction), Ordering::Less);
        }
        assert_eq!(
            compare_in_direction(&CellValue::Int(7), &present, SortDirection::Descending),
            Ordering::Less
        );
    }
}
