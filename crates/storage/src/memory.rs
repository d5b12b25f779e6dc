//! MemoryStore: in-process key-value store
//!
//! Backed by an `FxHashMap` behind a `parking_lot::RwLock`. Used by tests and
//! by hosts that do not need state to outlive the process.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use safetysync_core::Result;

use crate::traits::{Blob, KeyValueStore};

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<FxHashMap<String, Blob>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// All stored keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Blob>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn save(&self, key: &str, blob: Blob) -> Result<()> {
        self.data.write().insert(key.to_string(), blob);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.data.write().remove(key).is_some())
    }

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().contains_key(key))
    }
}
