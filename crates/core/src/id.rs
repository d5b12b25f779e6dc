//! Record identifiers
//!
//! The REST API hands out identifiers as either JSON numbers or strings,
//! depending on the resource. `RecordId` accepts both and keeps the raw form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier, unique within one collection
///
/// Integer and text identifiers are never equal to each other:
/// `RecordId::from(1u64) != RecordId::from("1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Numeric(u64),
    /// Text identifier (UUIDs, badge numbers, ...)
    Text(String),
}

impl RecordId {
    /// Parse a command-line or query-string identifier
    ///
    /// All-digit input becomes `Numeric`, everything else `Text`.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => RecordId::Numeric(n),
            Err(_) => RecordId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Numeric(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Text(s)
    }
}
