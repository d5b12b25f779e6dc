//! Local selection set
//!
//! Tracks which records the user has ticked in a view. The set is never
//! committed anywhere; it only outlives the view if the caller saves it
//! explicitly under a key of its choosing.

use std::collections::BTreeSet;

use tracing::debug;

use safetysync_core::{Record, RecordId, Result};
use safetysync_storage::{load_json_lenient, save_json, KeyValueStore};

/// Set of selected record ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns true if it is now selected
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Add every record of a (filtered) result
    pub fn select_all<R: Record>(&mut self, records: &[&R]) {
        self.ids.extend(records.iter().map(|r| r.id().clone()));
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether `id` is selected
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// True if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in id order
    pub fn ids(&self) -> impl Iterator<Item = &RecordId> + '_ {
        self.ids.iter()
    }

    /// Persist under `key`
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, key: &str) -> Result<()> {
        let ids: Vec<&RecordId> = self.ids.iter().collect();
        save_json(store, key, &ids)?;
        debug!(key, count = ids.len(), "saved selection");
        Ok(())
    }

    /// Restore from `key`; an absent or unreadable payload yields an empty set
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Self {
        let ids: Vec<RecordId> = load_json_lenient(store, key).unwrap_or_default();
        SelectionSet {
            ids: ids.into_iter().collect(),
        }
    }
}
