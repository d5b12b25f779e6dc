//! Predicate filter invariants over generated rosters

use crate::common::*;
use proptest::prelude::*;
use safetysync::query::filter_records;

proptest! {
    #[test]
    fn test_empty_state_returns_everything(employees in roster()) {
        let result = run_query(&employees, &FilterState::new());
        prop_assert_eq!(result.len(), employees.len());
        prop_assert_eq!(result.matched, employees.len());
        prop_assert!(!result.truncated);
    }

    #[test]
    fn test_filter_is_idempotent(
        employees in roster(),
        query in query_text(),
        dept in proptest::sample::select(DEPARTMENTS),
    ) {
        let state = FilterState::new()
            .with_query(query)
            .with_selector(EmployeeField::Department, Selector::parse(dept));
        let once: Vec<Employee> = filter_records(&employees, &state).into_iter().cloned().collect();
        let twice = filter_records(&once, &state);
        prop_assert_eq!(twice.len(), once.len());
        prop_assert!(twice.iter().zip(&once).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_extra_selector_never_grows_result(
        employees in roster(),
        query in query_text(),
        dept in proptest::sample::select(DEPARTMENTS),
    ) {
        let base = FilterState::new().with_query(query);
        let narrowed = base
            .clone()
            .with_selector(EmployeeField::Department, Selector::parse(dept));

        let wide = ids(&filter_records(&employees, &base));
        let narrow = ids(&filter_records(&employees, &narrowed));
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(narrow.iter().all(|id| wide.contains(id)));
    }

    #[test]
    fn test_all_sentinel_is_no_constraint(employees in roster(), query in query_text()) {
        let base = FilterState::new().with_query(query.clone());
        let sentinel = FilterState::new()
            .with_query(query)
            .with_selector(EmployeeField::Department, Selector::parse("all"))
            .with_selector(EmployeeField::Status, Selector::parse("ANY"));
        prop_assert_eq!(
            ids(&filter_records(&employees, &base)),
            ids(&filter_records(&employees, &sentinel))
        );
    }

    #[test]
    fn test_filter_preserves_input_order(employees in roster(), query in query_text()) {
        let state = FilterState::new().with_query(query);
        let kept = ids(&filter_records(&employees, &state));
        let positions: Vec<usize> = kept
            .iter()
            .map(|id| employees.iter().position(|e| &e.id == id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_selector_match_is_case_sensitive() {
    let roster = sample_roster();
    let state = FilterState::new().with_selector(EmployeeField::Department, Selector::parse("ops"));
    assert!(filter_records(&roster, &state).is_empty());
}

#[test]
fn test_absent_field_fails_active_selector() {
    let roster = vec![
        Employee::new(1u64, "Alice", "a@x.io", "Safety").with_position("Lead"),
        Employee::new(2u64, "Bob", "b@x.io", "Ops"),
    ];
    let state =
        FilterState::new().with_selector(EmployeeField::Position, Selector::parse("Lead"));
    assert_eq!(ids(&filter_records(&roster, &state)), vec![RecordId::from(1u64)]);
}
