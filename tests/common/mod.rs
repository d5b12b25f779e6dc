//! Shared fixtures and proptest strategies for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use chrono::NaiveDate;
use proptest::prelude::*;

pub use safetysync::core::{Employee, EmployeeField, EmployeeStatus, RecordId};
pub use safetysync::query::{run_query, FilterState, Selector, SortDirection, SortSpec};

pub const DEPARTMENTS: &[&str] = &["Safety", "Ops", "HR", "Finance"];
const NAMES: &[&str] = &["Alice", "alicia", "Bob", "Carol", "dave", "Eve", "Mallory", "Zed"];
const POSITIONS: &[&str] = &["Lead", "Inspector", "Clerk"];
const QUERIES: &[&str] = &["", "  ", "ali", "ALI", "bo", "example", "lead", "zzz", " eve "];
const SORTABLE: &[EmployeeField] = &[
    EmployeeField::Id,
    EmployeeField::Name,
    EmployeeField::Department,
    EmployeeField::Status,
    EmployeeField::HireDate,
    EmployeeField::Position,
];

/// The three-person roster used by the search walkthrough.
pub fn sample_roster() -> Vec<Employee> {
    vec![
        Employee::new(1u64, "Alice", "alice@example.com", "Safety"),
        Employee::new(2u64, "Bob", "bob@example.com", "Ops"),
        Employee::new(3u64, "Alicia", "alicia@example.com", "Ops"),
    ]
}

pub fn ids(records: &[&Employee]) -> Vec<RecordId> {
    records.iter().map(|e| e.id.clone()).collect()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Strategies
// ============================================================================

fn status() -> impl Strategy<Value = EmployeeStatus> {
    prop_oneof![
        Just(EmployeeStatus::Active),
        Just(EmployeeStatus::Inactive),
        Just(EmployeeStatus::OnLeave),
    ]
}

fn hire_date() -> impl Strategy<Value = Option<NaiveDate>> {
    proptest::option::of((2015i32..2025, 1u32..13, 1u32..29).prop_map(|(y, m, d)| date(y, m, d)))
}

/// Rosters of up to 24 employees with unique sequential ids.
pub fn roster() -> impl Strategy<Value = Vec<Employee>> {
    proptest::collection::vec(
        (
            proptest::sample::select(NAMES),
            proptest::sample::select(DEPARTMENTS),
            status(),
            hire_date(),
            proptest::option::of(proptest::sample::select(POSITIONS)),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, dept, status, hired, position))| {
                let mut e = Employee::new(
                    i as u64 + 1,
                    name,
                    format!("{}{}@example.com", name.to_lowercase(), i),
                    dept,
                )
                .with_status(status);
                e.hire_date = hired;
                e.position = position.map(str::to_string);
                e
            })
            .collect()
    })
}

/// Query text drawn from fragments that do and do not occur in the roster.
pub fn query_text() -> impl Strategy<Value = String> {
    proptest::sample::select(QUERIES).prop_map(str::to_string)
}

pub fn sortable_field() -> impl Strategy<Value = EmployeeField> {
    proptest::sample::select(SORTABLE)
}
