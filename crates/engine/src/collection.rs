//! Ordered record collections with unique identifiers
//!
//! A collection is built once when a view mounts and then read by the query
//! pipeline. Insertion order is preserved; it is the order ties keep after a
//! stable sort.

use rustc_hash::FxHashMap;

use safetysync_core::{Error, Record, RecordId, Result};

/// Ordered records of one kind, unique by id
#[derive(Debug, Clone)]
pub struct RecordCollection<R: Record> {
    records: Vec<R>,
    index: FxHashMap<RecordId, usize>,
}

impl<R: Record> Default for RecordCollection<R> {
    fn default() -> Self {
        RecordCollection {
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<R: Record> RecordCollection<R> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from records, rejecting repeated ids
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` naming the first repeated id.
    pub fn from_records(records: Vec<R>) -> Result<Self> {
        let mut collection = RecordCollection {
            records: Vec::with_capacity(records.len()),
            index: FxHashMap::default(),
        };
        for record in records {
            collection.insert(record)?;
        }
        Ok(collection)
    }

    /// Append a record
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if a record with the same id is present; the
    /// collection is unchanged.
    pub fn insert(&mut self, record: R) -> Result<()> {
        if self.index.contains_key(record.id()) {
            return Err(Error::DuplicateId {
                kind: R::KIND,
                id: record.id().clone(),
            });
        }
        self.index.insert(record.id().clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Record with `id`
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// Record with `id`, or `NotFound`
    pub fn require(&self, id: &RecordId) -> Result<&R> {
        self.get(id).ok_or_else(|| Error::NotFound {
            kind: R::KIND,
            id: id.clone(),
        })
    }

    /// Mutable access to the record with `id`
    ///
    /// The id itself must not be changed through this reference.
    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Result<&mut R> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.records[i]),
            None => Err(Error::NotFound {
                kind: R::KIND,
                id: id.clone(),
            }),
        }
    }

    /// All records in insertion order
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume into the record vector
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordCollection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
