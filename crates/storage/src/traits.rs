//! Key-value persistence port
//!
//! This module defines the `KeyValueStore` trait that replaces ambient
//! browser local storage. Components receive a store instead of reaching
//! for global state, so tests can inject an in-memory implementation.

use safetysync_core::Result;

/// Opaque persisted payload
///
/// Payloads are UTF-8 JSON in practice, but the port does not interpret
/// them. Decoding happens in [`crate::json`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob(Vec<u8>);

impl Blob {
    /// Wrap raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }

    /// Borrow the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length payload
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl From<&str> for Blob {
    fn from(s: &str) -> Self {
        Blob(s.as_bytes().to_vec())
    }
}

impl From<String> for Blob {
    fn from(s: String) -> Self {
        Blob(s.into_bytes())
    }
}

/// Storage abstraction for persisted UI state
///
/// Keys are short, fixed strings chosen by the component that owns the
/// data (e.g. `"admin-dashboard-layout"`). There is no versioning or
/// migration contract on the stored payloads.
///
/// Thread safety: implementations must be `Send + Sync` so a host can share
/// one store between views.
pub trait KeyValueStore: Send + Sync {
    /// Load the payload stored under `key`
    ///
    /// Returns `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn load(&self, key: &str) -> Result<Option<Blob>>;

    /// Store `blob` under `key`, replacing any previous payload
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unusable or the write fails.
    fn save(&self, key: &str, blob: Blob) -> Result<()>;

    /// Remove the payload under `key`
    ///
    /// Returns true if something was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be modified.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Check whether a payload exists under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<Blob>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: Blob) -> Result<()> {
        (**self).save(key, blob)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
