//! Comparator sort invariants over generated rosters

use std::cmp::Ordering;

use crate::common::*;
use proptest::prelude::*;
use safetysync::core::{compare_values, Record};

fn keys_equal(a: &[&Employee], b: &[&Employee], field: EmployeeField) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| compare_values(&x.field(field), &y.field(field)) == Ordering::Equal)
}

proptest! {
    #[test]
    fn test_ascending_is_ordered_absent_last(employees in roster(), field in sortable_field()) {
        let state = FilterState::new().with_sort(field, SortDirection::Ascending);
        let sorted = run_query(&employees, &state).records;
        prop_assert!(sorted
            .windows(2)
            .all(|w| compare_values(&w[0].field(field), &w[1].field(field)) != Ordering::Greater));
        if let Some(first_absent) = sorted.iter().position(|e| e.field(field).is_absent()) {
            prop_assert!(sorted[first_absent..].iter().all(|e| e.field(field).is_absent()));
        }
    }

    #[test]
    fn test_descending_keys_mirror_ascending(employees in roster(), field in sortable_field()) {
        let asc = run_query(&employees, &FilterState::new().with_sort(field, SortDirection::Ascending));
        let desc = run_query(&employees, &FilterState::new().with_sort(field, SortDirection::Descending));
        let mut reversed = asc.records.clone();
        reversed.reverse();
        prop_assert!(keys_equal(&desc.records, &reversed, field));
    }

    #[test]
    fn test_sort_is_stable(employees in roster()) {
        let state = FilterState::new().with_sort(EmployeeField::Department, SortDirection::Ascending);
        let sorted = run_query(&employees, &state).records;
        for w in sorted.windows(2) {
            if w[0].department == w[1].department {
                prop_assert!(w[0].id < w[1].id);
            }
        }
    }

    #[test]
    fn test_sort_is_a_permutation(employees in roster(), field in sortable_field()) {
        let state = FilterState::new().with_sort(field, SortDirection::Descending);
        let mut sorted = ids(&run_query(&employees, &state).records);
        sorted.sort();
        let mut original: Vec<RecordId> = employees.iter().map(|e| e.id.clone()).collect();
        original.sort();
        prop_assert_eq!(sorted, original);
    }
}

#[test]
fn test_text_sort_ignores_case() {
    let roster = vec![
        Employee::new(1u64, "bob", "b@x.io", "Ops"),
        Employee::new(2u64, "Alice", "a@x.io", "Ops"),
        Employee::new(3u64, "carol", "c@x.io", "Ops"),
    ];
    let state = FilterState::new().with_sort(EmployeeField::Name, SortDirection::Ascending);
    let names: Vec<&str> = run_query(&roster, &state)
        .records
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "bob", "carol"]);
}

#[test]
fn test_dates_sort_chronologically_with_absent_last() {
    let roster = vec![
        Employee::new(1u64, "A", "a@x.io", "Ops").with_hire_date(date(2022, 5, 1)),
        Employee::new(2u64, "B", "b@x.io", "Ops"),
        Employee::new(3u64, "C", "c@x.io", "Ops").with_hire_date(date(2019, 1, 9)),
    ];
    let state = FilterState::new().with_sort(EmployeeField::HireDate, SortDirection::Ascending);
    assert_eq!(
        ids(&run_query(&roster, &state).records),
        vec![RecordId::from(3u64), RecordId::from(1u64), RecordId::from(2u64)]
    );
}
