//! Storage layer for SafetySync
//!
//! This crate implements the key-value persistence port with:
//! - KeyValueStore: `load(key) -> Option<Blob>`, `save(key, blob)`, `remove(key)`
//! - MemoryStore: FxHashMap behind a parking_lot RwLock
//! - FileStore: one file per key with atomic write-fsync-rename
//! - JSON helpers: strict and lenient (fail-soft) payload decoding

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod json;
pub mod memory;
pub mod traits;

pub use file::FileStore;
pub use json::{load_json, load_json_lenient, save_json};
pub use memory::MemoryStore;
pub use traits::{Blob, KeyValueStore};
