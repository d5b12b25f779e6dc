//! Record kind enumeration
//!
//! Every collection holds records of exactly one kind. The kind is used in
//! error messages, CLI argument parsing and storage keys.

use serde::{Deserialize, Serialize};

/// The entity kinds managed by SafetySync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// Employee roster entry
    Employee,
    /// Issued training certificate
    Certificate,
    /// Scheduled or completed training session
    TrainingSession,
    /// Uploaded compliance document
    Document,
    /// Support desk ticket
    SupportTicket,
}

impl RecordKind {
    /// All record kinds (for iteration)
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Employee,
        RecordKind::Certificate,
        RecordKind::TrainingSession,
        RecordKind::Document,
        RecordKind::SupportTicket,
    ];

    /// Short identifier (for CLI arguments, storage keys, etc.)
    pub const fn id(&self) -> &'static str {
        match self {
            RecordKind::Employee => "employee",
            RecordKind::Certificate => "certificate",
            RecordKind::TrainingSession => "training-session",
            RecordKind::Document => "document",
            RecordKind::SupportTicket => "support-ticket",
        }
    }

    /// Parse from short identifier
    ///
    /// Plural forms are accepted, as are the REST resource names
    /// (`training-sessions`, `support`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "employee" | "employees" => Some(RecordKind::Employee),
            "certificate" | "certificates" => Some(RecordKind::Certificate),
            "training-session" | "training-sessions" | "training" => {
                Some(RecordKind::TrainingSession)
            }
            "document" | "documents" => Some(RecordKind::Document),
            "support-ticket" | "support-tickets" | "support" | "tickets" => {
                Some(RecordKind::SupportTicket)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// Tests
// ============================================================================
