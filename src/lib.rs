//! SafetySync - client-side records toolkit for compliance data
//!
//! Employees, certificates, training sessions, documents and support
//! tickets are held as in-memory collections. Each view searches, filters,
//! sorts and projects them locally, and the admin dashboard keeps its
//! widget layout in a small key-value store.
//!
//! # Quick Start
//!
//! ```
//! use safetysync::{run_query, Employee, EmployeeField, FilterState, Selector, SortDirection};
//!
//! let roster = vec![
//!     Employee::new(1u64, "Alice", "alice@example.com", "Safety"),
//!     Employee::new(2u64, "Bob", "bob@example.com", "Ops"),
//!     Employee::new(3u64, "Alicia", "alicia@example.com", "Ops"),
//! ];
//! let state = FilterState::new()
//!     .with_query("ali")
//!     .with_selector(EmployeeField::Department, Selector::parse("all"))
//!     .with_sort(EmployeeField::Name, SortDirection::Ascending);
//!
//! let result = run_query(&roster, &state);
//! assert_eq!(result.len(), 2);
//! ```
//!
//! # Architecture
//!
//! - `core`: record types, field identifiers and errors
//! - `storage`: the key-value persistence port
//! - `query`: filter state, predicate, comparator and pipeline
//! - `views`: projections, format rules and training status
//! - `dashboard`: widget catalog and layout persistence
//! - `engine`: collections, record sources, workspace and config

pub use safetysync_core as core;
pub use safetysync_dashboard as dashboard;
pub use safetysync_engine as engine;
pub use safetysync_query as query;
pub use safetysync_storage as storage;
pub use safetysync_views as views;

pub use safetysync_core::{
    Certificate, Document, Employee, EmployeeField, Error, Record, RecordId, RecordKind, Result,
    SupportTicket, TrainingSession,
};
pub use safetysync_dashboard::{LayoutManager, WidgetDescriptor, WidgetId};
pub use safetysync_engine::{RecordCollection, SafetySyncConfig, Workspace};
pub use safetysync_query::{run_query, run_query_limited, FilterState, Selector, SortDirection, SortSpec};
pub use safetysync_storage::{FileStore, KeyValueStore, MemoryStore};
pub use safetysync_views::{Presentation, Projector, TrainingStatus, View, ViewKind};
