//! Employee quick search
//!
//! Backs the dashboard's type-ahead box: text query over the roster, names
//! ascending, first `limit` matches.

use safetysync_core::{Employee, EmployeeField};
use safetysync_query::{run_query_limited, FilterState, SortDirection};

use crate::config::DEFAULT_QUICK_SEARCH_LIMIT;

/// Matches for one quick-search query
#[derive(Debug)]
pub struct QuickSearchHits<'a> {
    /// Matches in name order, at most `limit`
    pub employees: Vec<&'a Employee>,
    /// Matches before truncation
    pub total: usize,
}

impl QuickSearchHits<'_> {
    /// True when more matched than were returned
    pub fn has_more(&self) -> bool {
        self.total > self.employees.len()
    }
}

/// Type-ahead search over an employee roster
#[derive(Debug, Clone, Copy)]
pub struct QuickSearch {
    limit: usize,
}

impl Default for QuickSearch {
    fn default() -> Self {
        QuickSearch {
            limit: DEFAULT_QUICK_SEARCH_LIMIT,
        }
    }
}

impl QuickSearch {
    /// Quick search returning at most `limit` matches
    pub fn with_limit(limit: usize) -> Self {
        QuickSearch { limit }
    }

    /// Configured limit
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Run `query` over `roster`
    ///
    /// An empty query matches everyone.
    pub fn search<'a>(&self, roster: &'a [Employee], query: &str) -> QuickSearchHits<'a> {
        let state = FilterState::new()
            .with_query(query)
            .with_sort(EmployeeField::Name, SortDirection::Ascending);
        let result = run_query_limited(roster, &state, Some(self.limit));
        QuickSearchHits {
            employees: result.records,
            total: result.matched,
        }
    }
}
