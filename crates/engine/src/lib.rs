//! Application layer for SafetySync
//!
//! This crate ties the lower layers together:
//! - Workspace: data directory with `safetysync.toml` and persisted UI state
//! - RecordCollection: ordered, id-unique record sets
//! - Record sources: JSON files, static fixtures, fail-soft fallback
//! - SelectionSet: local selection with explicit save/restore
//! - SupportDesk: ticket update and assignment
//! - QuickSearch: employee type-ahead
//!
//! The workspace is the only component that knows about:
//! - Configuration file handling
//! - Which store backend is in use

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collection;
pub mod config;
pub mod quick_search;
pub mod selection;
pub mod source;
pub mod support;
pub mod workspace;

pub use collection::RecordCollection;
pub use config::{SafetySyncConfig, StorageMode, CONFIG_FILE_NAME, DEFAULT_QUICK_SEARCH_LIMIT};
pub use quick_search::{QuickSearch, QuickSearchHits};
pub use selection::SelectionSet;
pub use source::{load_collection, load_or_fallback, JsonFileSource, RecordSource, StaticSource};
pub use support::{SupportDesk, TicketPatch};
pub use workspace::{SharedStore, Workspace, STATE_DIR};
