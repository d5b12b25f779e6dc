//! Admin dashboard layout for SafetySync
//!
//! This crate provides:
//! - The factory widget catalog with per-widget format rules
//! - LayoutManager: toggle, move, reset, and user-default persistence
//!   over any `KeyValueStore`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod layout;
pub mod widget;

pub use layout::{merge_saved, LayoutManager, SavedWidget, DEFAULT_LAYOUT_KEY, LAYOUT_KEY};
pub use widget::{factory_catalog, factory_formats, GridRect, WidgetDescriptor, WidgetId};
