//! Filter-then-sort pipeline
//!
//! `run_query` is what a view calls on every Filter State change:
//! filter the collection, order the survivors, optionally keep the first
//! `limit` for compact widgets. Nothing here mutates the collection.

use tracing::debug;

use safetysync_core::Record;

use crate::filter::{filter_records, FilterState};
use crate::sort::sort_records;

/// Result of running a query over one collection
#[derive(Debug)]
pub struct QueryResult<'a, R> {
    /// Matching records in final order
    pub records: Vec<&'a R>,
    /// Size of the source collection
    pub total: usize,
    /// Number of matches before any limit was applied
    pub matched: usize,
    /// Whether `limit` cut the result short
    pub truncated: bool,
}

impl<'a, R> QueryResult<'a, R> {
    /// True if nothing matched
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records returned
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Filter and sort `records` under `state`
pub fn run_query<'a, R: Record>(records: &'a [R], state: &FilterState<R::Field>) -> QueryResult<'a, R> {
    run_query_limited(records, state, None)
}

/// Filter, sort and truncate to at most `limit` records
pub fn run_query_limited<'a, R: Record>(
    records: &'a [R],
    state: &FilterState<R::Field>,
    limit: Option<usize>,
) -> QueryResult<'a, R> {
    let filtered = filter_records(records, state);
    let mut ordered = match state.sort() {
        Some(spec) => sort_records(&filtered, spec),
        None => filtered,
    };

    let matched = ordered.len();
    let truncated = match limit {
        Some(k) if matched > k => {
            ordered.truncate(k);
            true
        }
        _ => false,
    };

    debug!(
        kind = %R::KIND,
        total = records.len(),
        matched,
        returned = ordered.len(),
        "query evaluated"
    );

    QueryResult {
        records: ordered,
        total: records.len(),
        matched,
        truncated,
    }
}
