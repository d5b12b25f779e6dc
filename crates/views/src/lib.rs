//! Presentation layer for SafetySync records
//!
//! This crate provides:
//! - Projector trait with list, grid and summary implementations
//! - FormatRule / FormatTable: explicit per-field display formatting
//! - Presentation: per-entity list lines, summary grouping and formats
//! - Training status derived from certificate expiration dates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod format;
pub mod presets;
pub mod projector;
pub mod training;

pub use format::{FormatRule, FormatTable, ABSENT_PLACEHOLDER};
pub use presets::Presentation;
pub use projector::{
    Column, Grid, GridProjector, GridRow, GroupCounts, ItemList, ItemListProjector, ListItem,
    Projector, Summary, SummaryProjector, ValueCount, View, ViewKind, ABSENT_GROUP,
};
pub use training::{
    training_status, training_status_summary, CertificateIndex, StatusCount, TrainingOverview,
    TrainingStatus, TrainingStatusRule, DEFAULT_EXPIRING_WINDOW_DAYS,
};
