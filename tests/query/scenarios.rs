//! End-to-end search, projection and summary walkthroughs

use crate::common::*;
use safetysync::core::EmployeeField as F;
use safetysync::views::{Presentation, Projector, SummaryProjector, View, ViewKind};

#[test]
fn test_search_ali_across_all_departments() {
    let roster = sample_roster();
    let state = FilterState::new()
        .with_query("ali")
        .with_selector(F::Department, Selector::parse("all"));
    let result = run_query(&roster, &state);
    assert_eq!(ids(&result.records), vec![RecordId::from(1u64), RecordId::from(3u64)]);
}

#[test]
fn test_search_then_narrow_to_department() {
    let roster = sample_roster();
    let state = FilterState::new()
        .with_query("  ALI ")
        .with_selector(F::Department, Selector::parse("Ops"));
    let result = run_query(&roster, &state);
    assert_eq!(ids(&result.records), vec![RecordId::from(3u64)]);
    assert_eq!((result.total, result.matched), (3, 1));
}

#[test]
fn test_list_projection_follows_sorted_order() {
    let roster = sample_roster();
    let state = FilterState::new().with_sort(F::Name, SortDirection::Descending);
    let result = run_query(&roster, &state);

    let View::List(list) = Employee::project_view(ViewKind::List, &result.records, &[]) else {
        panic!("expected list view");
    };
    let titles: Vec<&str> = list.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Bob", "Alicia", "Alice"]);
}

#[test]
fn test_summary_counts_departments() {
    let roster = sample_roster();
    let refs: Vec<&Employee> = roster.iter().collect();
    let summary = SummaryProjector::by(F::Department).project(&refs);
    assert_eq!(summary.records, 3);
    assert_eq!(summary.count("department", "Ops"), 2);
    assert_eq!(summary.count("department", "Safety"), 1);
    assert_eq!(summary.count("department", "HR"), 0);
}

#[test]
fn test_summary_of_empty_input_is_empty() {
    let summary = SummaryProjector::by(F::Department).project(&Vec::<&Employee>::new());
    assert_eq!(summary.records, 0);
    assert!(summary.groups[0].counts.is_empty());
}

#[test]
fn test_summary_groups_absent_values() {
    let roster = vec![
        Employee::new(1u64, "A", "a@x.io", "Ops").with_position("Lead"),
        Employee::new(2u64, "B", "b@x.io", "Ops"),
    ];
    let refs: Vec<&Employee> = roster.iter().collect();
    let summary = SummaryProjector::by(F::Position).project(&refs);
    assert_eq!(summary.count("position", "Lead"), 1);
    assert_eq!(summary.count("position", safetysync::views::ABSENT_GROUP), 1);
}

#[test]
fn test_grid_renders_absent_placeholder() {
    let roster = vec![Employee::new(1u64, "A", "a@x.io", "Ops")];
    let refs: Vec<&Employee> = roster.iter().collect();
    let View::Grid(grid) = Employee::project_view(ViewKind::Grid, &refs, &[]) else {
        panic!("expected grid view");
    };
    let column = grid.headers.iter().position(|h| h == "position").unwrap();
    assert_eq!(grid.rows[0].cells[column], safetysync::views::ABSENT_PLACEHOLDER);
}
