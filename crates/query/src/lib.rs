//! Record query infrastructure for SafetySync
//!
//! This crate provides:
//! - FilterState: query text, categorical selectors and sort for one view
//! - Predicate filter: case-insensitive substring search AND exact selectors
//! - Comparator sort: stable, case-insensitive text, natural numbers/dates
//! - run_query: the filter-then-sort pipeline with optional truncation
//!
//! # Usage
//!
//! ```
//! use safetysync_core::{Employee, EmployeeField};
//! use safetysync_query::{run_query, FilterState, Selector, SortDirection};
//!
//! let roster = vec![
//!     Employee::new(1u64, "Alice", "alice@example.com", "Safety"),
//!     Employee::new(2u64, "Bob", "bob@example.com", "Ops"),
//! ];
//! let state = FilterState::new()
//!     .with_query("ali")
//!     .with_selector(EmployeeField::Department, Selector::parse("all"))
//!     .with_sort(EmployeeField::Name, SortDirection::Ascending);
//!
//! let result = run_query(&roster, &state);
//! assert_eq!(result.records.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod pipeline;
pub mod sort;

// Re-export commonly used types
pub use filter::{filter_records, matches, FilterState, Predicate, Selector};
pub use pipeline::{run_query, run_query_limited, QueryResult};
pub use sort::{compare_records, sort_records, SortDirection, SortSpec};
