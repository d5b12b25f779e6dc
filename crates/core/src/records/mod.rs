//! Concrete entity types
//!
//! One struct per entity with explicit `Option` fields, deserializable from
//! the JSON arrays served by the REST API (camelCase keys).

pub mod certificate;
pub mod document;
pub mod employee;
pub mod ticket;
pub mod training;

pub use certificate::{Certificate, CertificateField, CertificateStatus};
pub use document::{Document, DocumentField, DocumentStatus};
pub use employee::{Employee, EmployeeField, EmployeeStatus};
pub use ticket::{SupportTicket, SupportTicketField, TicketPriority, TicketStatus};
pub use training::{SessionStatus, TrainingSession, TrainingSessionField};
