//! View projection infrastructure
//!
//! This module provides:
//! - Projector trait for pluggable presentation shapes
//! - ItemListProjector: one row per record (cards, compact lists)
//! - GridProjector: fixed columns of rendered cells
//! - SummaryProjector: counts grouped by categorical fields
//!
//! Projectors never alter record content and accept empty input, producing
//! an empty list, an empty grid, or a zero-count summary.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use safetysync_core::{Error, FieldId, Record, RecordId};

use crate::format::FormatRule;

/// Group label used for records whose grouping field is absent
pub const ABSENT_GROUP: &str = "(none)";

// ============================================================================
// Projector Trait
// ============================================================================

/// Pluggable presentation interface
///
/// Takes an already filtered and sorted collection and maps it into one
/// display shape.
pub trait Projector<R: Record> {
    /// Presentation shape produced
    type Output;

    /// Map records into the presentation shape
    fn project(&self, records: &[&R]) -> Self::Output;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// Item list
// ============================================================================

/// One row of an item list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Record identifier
    pub id: RecordId,
    /// Primary line
    pub title: String,
    /// Secondary line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Status chip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Itemized list, one entry per record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemList {
    /// Rows in input order
    pub items: Vec<ListItem>,
}

/// Projects each record onto title / subtitle / badge lines
#[derive(Debug, Clone)]
pub struct ItemListProjector<F: FieldId> {
    title: F,
    subtitle: Option<F>,
    badge: Option<F>,
}

impl<F: FieldId> ItemListProjector<F> {
    /// List showing only `title`
    pub fn new(title: F) -> Self {
        ItemListProjector {
            title,
            subtitle: None,
            badge: None,
        }
    }

    /// Builder: add a secondary line
    pub fn with_subtitle(mut self, field: F) -> Self {
        self.subtitle = Some(field);
        self
    }

    /// Builder: add a status chip
    pub fn with_badge(mut self, field: F) -> Self {
        self.badge = Some(field);
        self
    }
}

impl<R: Record> Projector<R> for ItemListProjector<R::Field> {
    type Output = ItemList;

    fn project(&self, records: &[&R]) -> ItemList {
        let text = |record: &R, field: R::Field| {
            record.field(field).as_text().map(|t| t.into_owned())
        };
        let items = records
            .iter()
            .map(|&record| ListItem {
                id: record.id().clone(),
                title: FormatRule::Plain.render(&record.field(self.title)),
                subtitle: self.subtitle.and_then(|f| text(record, f)),
                badge: self.badge.and_then(|f| text(record, f)),
            })
            .collect();
        ItemList { items }
    }

    fn name(&self) -> &str {
        "list"
    }
}

// ============================================================================
// Grid
// ============================================================================

/// One grid column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<F: FieldId> {
    /// Source field
    pub field: F,
    /// Header label
    pub header: String,
    /// Cell formatting
    pub format: FormatRule,
}

impl<F: FieldId> Column<F> {
    /// Plain column headed by the field name
    pub fn new(field: F) -> Self {
        Column {
            field,
            header: field.name().to_string(),
            format: FormatRule::Plain,
        }
    }

    /// Builder: override the header label
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Builder: set the formatting rule
    pub fn with_format(mut self, format: FormatRule) -> Self {
        self.format = format;
        self
    }
}

/// One grid row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    /// Record identifier
    pub id: RecordId,
    /// Rendered cells, one per column
    pub cells: Vec<String>,
}

/// Tabular grid: rows by fixed columns
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Column headers
    pub headers: Vec<String>,
    /// Rows in input order
    pub rows: Vec<GridRow>,
}

/// Projects records onto a fixed column set
#[derive(Debug, Clone)]
pub struct GridProjector<F: FieldId> {
    columns: Vec<Column<F>>,
}

impl<F: FieldId> GridProjector<F> {
    /// Grid with the given columns
    pub fn new(columns: Vec<Column<F>>) -> Self {
        GridProjector { columns }
    }

    /// Grid with one plain column per entity field
    pub fn all_fields() -> Self {
        Self::new(F::all().iter().copied().map(Column::new).collect())
    }

    /// Configured columns
    pub fn columns(&self) -> &[Column<F>] {
        &self.columns
    }
}

impl<R: Record> Projector<R> for GridProjector<R::Field> {
    type Output = Grid;

    fn project(&self, records: &[&R]) -> Grid {
        let headers = self.columns.iter().map(|c| c.header.clone()).collect();
        let rows = records
            .iter()
            .map(|record| GridRow {
                id: record.id().clone(),
                cells: self
                    .columns
                    .iter()
                    .map(|c| c.format.render(&record.field(c.field)))
                    .collect(),
            })
            .collect();
        Grid { headers, rows }
    }

    fn name(&self) -> &str {
        "grid"
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Occurrences of one distinct value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    /// Distinct field value (or `(none)`)
    pub value: String,
    /// Number of records carrying it
    pub count: usize,
}

/// Counts for one grouping field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    /// Grouping field name
    pub field: String,
    /// Counts in ascending value order
    pub counts: Vec<ValueCount>,
}

/// Aggregate counts over a collection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records summarized
    pub records: usize,
    /// One entry per grouping field, in configured order
    pub groups: Vec<GroupCounts>,
}

impl Summary {
    /// Count for `value` of `field`; zero when not present
    pub fn count(&self, field: &str, value: &str) -> usize {
        self.groups
            .iter()
            .find(|g| g.field == field)
            .and_then(|g| g.counts.iter().find(|c| c.value == value))
            .map_or(0, |c| c.count)
    }
}

/// Counts distinct values of one or more fields
#[derive(Debug, Clone)]
pub struct SummaryProjector<F: FieldId> {
    group_by: Vec<F>,
}

impl<F: FieldId> SummaryProjector<F> {
    /// Summary grouped by each of `group_by`
    pub fn new(group_by: Vec<F>) -> Self {
        SummaryProjector { group_by }
    }

    /// Summary grouped by a single field
    pub fn by(field: F) -> Self {
        Self::new(vec![field])
    }
}

impl<R: Record> Projector<R> for SummaryProjector<R::Field> {
    type Output = Summary;

    fn project(&self, records: &[&R]) -> Summary {
        let groups = self
            .group_by
            .iter()
            .map(|&field| {
                let mut tally: BTreeMap<String, usize> = BTreeMap::new();
                for record in records {
                    let key = record
                        .field(field)
                        .as_text()
                        .map_or_else(|| ABSENT_GROUP.to_string(), |t| t.into_owned());
                    *tally.entry(key).or_insert(0) += 1;
                }
                GroupCounts {
                    field: field.name().to_string(),
                    counts: tally
                        .into_iter()
                        .map(|(value, count)| ValueCount { value, count })
                        .collect(),
                }
            })
            .collect();
        Summary {
            records: records.len(),
            groups,
        }
    }

    fn name(&self) -> &str {
        "summary"
    }
}

// ============================================================================
// Dynamic selection
// ============================================================================

/// Presentation shape picked at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Item list
    #[default]
    List,
    /// Tabular grid
    Grid,
    /// Aggregate summary
    Summary,
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "list" | "cards" => Ok(ViewKind::List),
            "grid" | "table" => Ok(ViewKind::Grid),
            "summary" => Ok(ViewKind::Summary),
            other => Err(Error::invalid_input(format!(
                "unknown view '{}', expected list, grid or summary",
                other
            ))),
        }
    }
}

/// Output of any projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum View {
    /// Item list output
    List(ItemList),
    /// Grid output
    Grid(Grid),
    /// Summary output
    Summary(Summary),
}

#[cfg(test)]
mod tests {
    use super::*;
    use safetysync_core::{Employee, EmployeeField, EmployeeStatus};

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new(1u64, "Alice", "alice@example.com", "Safety").with_position("Lead"),
            Employee::new(2u64, "Bob", "bob@example.com", "Ops"),
            Employee::new(3u64, "Alicia", "alicia@example.com", "Ops")
                .with_status(EmployeeStatus::Inactive),
        ]
    }

    #[test]
    fn test_item_list_projection() {
        let records = roster();
        let refs: Vec<&Employee> = records.iter().collect();
        let projector = ItemListProjector::new(EmployeeField::Name)
            .with_subtitle(EmployeeField::Position)
            .with_badge(EmployeeField::Status);
        let list = projector.project(&refs);

        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[0].title, "Alice");
        assert_eq!(list.items[0].subtitle.as_deref(), Some("Lead"));
        assert_eq!(list.items[1].subtitle, None);
        assert_eq!(list.items[2].badge.as_deref(), Some("inactive"));
        assert_eq!(Projector::<Employee>::name(&projector), "list");
    }

    #[test]
    fn test_grid_projection() {
        let records = roster();
        let refs: Vec<&Employee> = records.iter().collect();
        let projector = GridProjector::new(vec![
            Column::new(EmployeeField::Name).with_header("Name"),
            Column::new(EmployeeField::Position),
        ]);
        let grid = projector.project(&refs);

        assert_eq!(grid.headers, vec!["Name", "position"]);
        assert_eq!(grid.rows.len(), 3);
        assert_eq!(grid.rows[0].cells, vec!["Alice", "Lead"]);
        assert_eq!(grid.rows[1].cells, vec!["Bob", "-"]);
    }

    #[test]
    fn test_grid_all_fields_has_one_column_per_field() {
        let projector: GridProjector<EmployeeField> = GridProjector::all_fields();
        assert_eq!(projector.columns().len(), EmployeeField::ALL.len());
    }

    #[test]
    fn test_summary_projection() {
        let records = roster();
        let refs: Vec<&Employee> = records.iter().collect();
        let projector =
            SummaryProjector::new(vec![EmployeeField::Department, EmployeeField::Position]);
        let summary = projector.project(&refs);

        assert_eq!(summary.records, 3);
        assert_eq!(summary.count("department", "Ops"), 2);
        assert_eq!(summary.count("department", "Safety"), 1);
        assert_eq!(summary.count("position", ABSENT_GROUP), 2);
        assert_eq!(summary.count("department", "Finance"), 0);

        let values: Vec<&str> = summary.groups[0]
            .counts
            .iter()
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(values, vec!["Ops", "Safety"]);
    }

    #[test]
    fn test_summary_of_empty_collection() {
        let refs: Vec<&Employee> = Vec::new();
        let summary = SummaryProjector::by(EmployeeField::Status).project(&refs);
        assert_eq!(summary.records, 0);
        assert_eq!(summary.groups.len(), 1);
        assert!(summary.groups[0].counts.is_empty());
    }

    #[test]
    fn test_view_kind_parse() {
        assert_eq!("grid".parse::<ViewKind>().unwrap(), ViewKind::Grid);
        assert_eq!("cards".parse::<ViewKind>().unwrap(), ViewKind::List);
        assert!("chart".parse::<ViewKind>().is_err());
    }

    #[test]
    fn test_view_serializes_with_tag() {
        let view = View::Summary(Summary::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["view"], "summary");
        assert_eq!(json["records"], 0);
    }
}
