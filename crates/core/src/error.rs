//! Error types for SafetySync
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::id::RecordId;
use crate::kind::RecordKind;
use std::io;
use thiserror::Error;

/// Result type alias for SafetySync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SafetySync
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations, stores, etc.)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Two records in one collection share an identifier
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// Entity kind of the collection
        kind: RecordKind,
        /// The repeated identifier
        id: RecordId,
    },

    /// No record with the given identifier
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Entity kind searched
        kind: RecordKind,
        /// The missing identifier
        id: RecordId,
    },

    /// Field name not known for the entity kind
    #[error("Unknown {kind} field: {name}")]
    InvalidField {
        /// Entity kind the field was resolved against
        kind: RecordKind,
        /// The rejected field name
        name: String,
    },

    /// Widget identifier not in the dashboard catalog
    #[error("Unknown widget: {0}")]
    UnknownWidget(String),

    /// Caller supplied a malformed argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Key-value store failure
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Configuration file could not be used
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl Error {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Shorthand for a `StorageError`
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::StorageError(msg.into())
    }

    /// Shorthand for a `ConfigError`
    pub fn config(msg: impl Into<String>) -> Self {
        Error::ConfigError(msg.into())
    }
}
