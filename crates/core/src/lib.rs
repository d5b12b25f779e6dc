//! Core types and traits for SafetySync
//!
//! This crate defines the foundational types used throughout the workspace:
//! - RecordId: Opaque identifier (numeric or text) unique within a collection
//! - RecordKind: Discriminates between entity kinds
//! - FieldId / FieldValue: Closed field identifiers and borrowed field views
//! - Record: Trait implemented by every entity struct
//! - Entities: Employee, Certificate, TrainingSession, Document, SupportTicket
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

#[macro_use]
mod named;

pub mod error;
pub mod field;
pub mod id;
pub mod kind;
pub mod record;
pub mod records;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use field::{compare_values, FieldId, FieldValue, DATE_FORMAT};
pub use id::RecordId;
pub use kind::RecordKind;
pub use record::Record;
pub use records::{
    Certificate, CertificateField, CertificateStatus, Document, DocumentField, DocumentStatus,
    Employee, EmployeeField, EmployeeStatus, SessionStatus, SupportTicket, SupportTicketField,
    TicketPriority, TicketStatus, TrainingSession, TrainingSessionField,
};
