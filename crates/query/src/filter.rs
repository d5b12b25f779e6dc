//! Predicate filter
//!
//! A record is included when it passes both tests:
//! - **Text query**: the trimmed, case-folded query is empty, or it is a
//!   substring of at least one of the entity's search fields
//! - **Selectors**: every active selector equals the record's field text
//!   exactly (logical AND). `Selector::All` never excludes anything.
//!
//! The filter is pure: the same record and state always give the same
//! answer, and input order is preserved.

use safetysync_core::{FieldId, Record};

use crate::sort::{SortDirection, SortSpec};

// ============================================================================
// Selector
// ============================================================================

/// One categorical filter value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Sentinel: no constraint
    All,
    /// Field must equal this value exactly
    Only(String),
}

impl Selector {
    /// Parse a UI selector value
    ///
    /// `"all"` and `"any"` (any case) are the sentinel; anything else is an
    /// exact-match constraint.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("all") || raw.eq_ignore_ascii_case("any") {
            Selector::All
        } else {
            Selector::Only(raw.to_string())
        }
    }

    /// True for a constraining selector
    pub fn is_active(&self) -> bool {
        matches!(self, Selector::Only(_))
    }
}

// ============================================================================
// FilterState
// ============================================================================

/// Current search, filter and sort parameters for one view
///
/// Starts empty: no query, no active selectors, no sort. An empty state
/// matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: FieldId> {
    query: String,
    selectors: Vec<(F, Selector)>,
    sort: Option<SortSpec<F>>,
}

impl<F: FieldId> Default for FilterState<F> {
    fn default() -> Self {
        FilterState {
            query: String::new(),
            selectors: Vec::new(),
            sort: None,
        }
    }
}

impl<F: FieldId> FilterState<F> {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Builder: set one selector
    pub fn with_selector(mut self, field: F, selector: Selector) -> Self {
        self.set_selector(field, selector);
        self
    }

    /// Builder: set the sort
    pub fn with_sort(mut self, field: F, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    /// Replace the text query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Set the selector for `field`, replacing any previous one
    pub fn set_selector(&mut self, field: F, selector: Selector) {
        match self.selectors.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = selector,
            None => self.selectors.push((field, selector)),
        }
    }

    /// Reset the selector for `field` to `All`
    pub fn clear_selector(&mut self, field: F) {
        self.selectors.retain(|(f, _)| *f != field);
    }

    /// Replace the sort specification
    pub fn set_sort(&mut self, sort: Option<SortSpec<F>>) {
        self.sort = sort;
    }

    /// Raw text query as entered
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selector for `field` (`All` when unset)
    pub fn selector(&self, field: F) -> &Selector {
        self.selectors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, s)| s)
            .unwrap_or(&Selector::All)
    }

    /// Active (constraining) selectors in insertion order
    pub fn active_selectors(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.selectors.iter().filter_map(|(f, s)| match s {
            Selector::Only(value) => Some((*f, value.as_str())),
            Selector::All => None,
        })
    }

    /// Current sort specification
    pub fn sort(&self) -> Option<&SortSpec<F>> {
        self.sort.as_ref()
    }

    /// True when the state cannot exclude any record
    pub fn is_unconstrained(&self) -> bool {
        self.query.trim().is_empty() && self.active_selectors().next().is_none()
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// A filter state prepared for repeated evaluation
///
/// Folds the query once instead of per record.
#[derive(Debug)]
pub struct Predicate<'s, F: FieldId> {
    needle: Option<String>,
    selectors: Vec<(F, &'s str)>,
}

impl<'s, F: FieldId> Predicate<'s, F> {
    /// Prepare `state` for evaluation
    pub fn new(state: &'s FilterState<F>) -> Self {
        let trimmed = state.query().trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        Predicate {
            needle,
            selectors: state.active_selectors().collect(),
        }
    }

    /// Evaluate the predicate for one record
    pub fn test<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        self.text_matches(record) && self.selectors_match(record)
    }

    fn text_matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        match &self.needle {
            None => true,
            Some(needle) => R::search_fields()
                .iter()
                .any(|f| record.field(*f).contains_folded(needle)),
        }
    }

    fn selectors_match<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        self.selectors.iter().all(|(field, wanted)| {
            record
                .field(*field)
                .as_text()
                .is_some_and(|actual| actual == *wanted)
        })
    }
}

/// Decide whether one record matches the filter state
pub fn matches<R: Record>(record: &R, state: &FilterState<R::Field>) -> bool {
    Predicate::new(state).test(record)
}

/// Keep the records that match, preserving input order
pub fn filter_records<'a, R: Record>(records: &'a [R], state: &FilterState<R::Field>) -> Vec<&'a R> {
    let predicate = Predicate::new(state);
    records.iter().filter(|r| predicate.test(*r)).collect()
}

// ============================================================================
// Tests
// ============================================================================
