//! Widget descriptors and the factory catalog
//!
//! The factory catalog is the fixed set of tiles the admin dashboard ships
//! with. Persisted layouts only ever adjust visibility and placement of
//! these tiles; titles and format rules always come from the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use safetysync_core::{Error, Result};
use safetysync_views::{FormatRule, FormatTable};

/// Widget identifier, stable across releases
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        WidgetId(id.into())
    }

    /// Identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        WidgetId::new(s)
    }
}

impl PartialEq<str> for WidgetId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WidgetId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Placement on the dashboard grid, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridRect {
    /// Column of the left edge
    pub x: u32,
    /// Row of the top edge
    pub y: u32,
    /// Width in columns
    pub w: u32,
    /// Height in rows
    pub h: u32,
}

impl GridRect {
    /// Create a rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        GridRect { x, y, w, h }
    }

    /// Reject zero-sized rectangles
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if width or height is zero.
    pub fn validate(&self) -> Result<()> {
        if self.w == 0 || self.h == 0 {
            return Err(Error::invalid_input(format!(
                "widget rectangle must have non-zero size, got {}x{}",
                self.w, self.h
            )));
        }
        Ok(())
    }
}

impl fmt::Display for GridRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.w, self.h, self.x, self.y)
    }
}

/// One dashboard tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable identifier
    pub id: WidgetId,
    /// Display title
    pub title: String,
    /// Whether the tile is shown
    pub visible: bool,
    /// Grid placement
    pub rect: GridRect,
    /// How the tile's headline number is rendered
    pub format: FormatRule,
}

impl WidgetDescriptor {
    fn factory(id: &str, title: &str, visible: bool, rect: GridRect, format: FormatRule) -> Self {
        WidgetDescriptor {
            id: WidgetId::new(id),
            title: title.to_string(),
            visible,
            rect,
            format,
        }
    }
}

/// The factory default descriptor set, in display order
pub fn factory_catalog() -> Vec<WidgetDescriptor> {
    use FormatRule::*;
    vec![
        WidgetDescriptor::factory("total-users", "Total Users", true, GridRect::new(0, 0, 3, 2), Count),
        WidgetDescriptor::factory("active-employees", "Active Employees", true, GridRect::new(3, 0, 3, 2), Count),
        WidgetDescriptor::factory("compliance-rate", "Compliance Rate", true, GridRect::new(6, 0, 3, 2), Percent),
        WidgetDescriptor::factory("monthly-revenue", "Monthly Revenue", true, GridRect::new(9, 0, 3, 2), Currency),
        WidgetDescriptor::factory("expiring-certificates", "Expiring Certificates", true, GridRect::new(0, 2, 4, 3), Count),
        WidgetDescriptor::factory("upcoming-training", "Upcoming Training", true, GridRect::new(4, 2, 4, 3), Count),
        WidgetDescriptor::factory("open-tickets", "Open Support Tickets", true, GridRect::new(8, 2, 4, 3), Count),
        WidgetDescriptor::factory("avg-training-time", "Average Training Time", false, GridRect::new(0, 5, 4, 2), Minutes),
        WidgetDescriptor::factory("recent-documents", "Recent Documents", false, GridRect::new(4, 5, 8, 2), Plain),
    ]
}

/// Format rules for every catalog widget
pub fn factory_formats() -> FormatTable<WidgetId> {
    factory_catalog()
        .into_iter()
        .map(|w| (w.id, w.format))
        .collect()
}
