//! JSON payload helpers over any [`KeyValueStore`]
//!
//! Two flavours:
//! - strict (`load_json`, `save_json`): errors propagate to the caller
//! - lenient (`load_json_lenient`): absent or unparsable payloads become
//!   `None` and a warning is logged; the caller substitutes its default

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use safetysync_core::Result;

use crate::traits::{Blob, KeyValueStore};

/// Load and decode a JSON payload
///
/// # Errors
///
/// Returns an error if the store fails or the payload is not valid JSON
/// for `T`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(blob) => Ok(Some(serde_json::from_slice(blob.as_bytes())?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns an error if encoding or the store write fails.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec(value)?;
    store.save(key, Blob::new(bytes))
}

/// Load a JSON payload, treating every failure as "nothing stored"
///
/// Store errors and decode errors are logged at warn level and never
/// returned.
pub fn load_json_lenient<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "ignoring unreadable stored payload");
            None
        }
    }
}
