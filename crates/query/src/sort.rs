//! Comparator sort
//!
//! Orders a filtered collection by one field. Text compares
//! case-insensitively, numbers and dates naturally, absent values last.
//!
//! The sort is stable: records with equal keys keep their input order in
//! both directions. Descending flips the comparator's sign rather than
//! reversing the output, so ties are not reversed.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use safetysync_core::{compare_values, Error, FieldId, Record};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(Error::invalid_input(format!(
                "unknown sort direction '{}', expected asc or desc",
                other
            ))),
        }
    }
}

/// Field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec<F: FieldId> {
    /// Field to order by
    pub field: F,
    /// Ordering direction
    pub direction: SortDirection,
}

impl<F: FieldId> SortSpec<F> {
    /// Create a sort specification
    pub fn new(field: F, direction: SortDirection) -> Self {
        SortSpec { field, direction }
    }

    /// Ascending sort on `field`
    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Descending sort on `field`
    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// Compare two records under `spec`
pub fn compare_records<R: Record>(a: &R, b: &R, spec: &SortSpec<R::Field>) -> Ordering {
    spec.direction
        .apply(compare_values(&a.field(spec.field), &b.field(spec.field)))
}

/// Return a newly ordered sequence; the input slice is untouched
pub fn sort_records<'a, R: Record>(records: &[&'a R], spec: &SortSpec<R::Field>) -> Vec<&'a R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_records(*a, *b, spec));
    sorted
}
