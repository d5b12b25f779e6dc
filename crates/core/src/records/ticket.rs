//! Support desk tickets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;
use crate::record::{id_value, Record};

named_enum! {
    /// Workflow state of a ticket
    #[derive(Default)]
    pub enum TicketStatus: "ticket status" {
        /// Awaiting triage
        #[default]
        Open => "open",
        /// Being worked on
        InProgress => "in-progress",
        /// Fix delivered, awaiting confirmation
        Resolved => "resolved",
        /// Done
        Closed => "closed",
    }
}

named_enum! {
    /// Urgency of a ticket
    #[derive(Default)]
    pub enum TicketPriority: "ticket priority" {
        /// Whenever convenient
        Low => "low",
        /// Normal queue
        #[default]
        Medium => "medium",
        /// Ahead of the normal queue
        High => "high",
        /// Drop everything
        Urgent => "urgent",
    }
}

named_enum! {
    /// Fields of a [`SupportTicket`]
    pub enum SupportTicketField: "support ticket field" {
        /// Record identifier
        Id => "id",
        /// One-line summary
        Subject => "subject",
        /// Requester's email
        RequesterEmail => "requester-email",
        /// Urgency
        Priority => "priority",
        /// Workflow state
        Status => "status",
        /// Assigned agent
        Assignee => "assignee",
        /// Creation date
        CreatedAt => "created-at",
    }
}

impl FieldId for SupportTicketField {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

/// One support request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// Record identifier
    pub id: RecordId,
    /// One-line summary
    pub subject: String,
    /// Requester's email
    pub requester_email: String,
    /// Urgency
    #[serde(default)]
    pub priority: TicketPriority,
    /// Workflow state
    #[serde(default)]
    pub status: TicketStatus,
    /// Assigned agent, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Creation date
    pub created_at: NaiveDate,
}

impl SupportTicket {
    /// Create an open, unassigned, medium-priority ticket
    pub fn new(
        id: impl Into<RecordId>,
        subject: impl Into<String>,
        requester_email: impl Into<String>,
        created_at: NaiveDate,
    ) -> Self {
        SupportTicket {
            id: id.into(),
            subject: subject.into(),
            requester_email: requester_email.into(),
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            assignee: None,
            created_at,
        }
    }
}

impl Record for SupportTicket {
    type Field = SupportTicketField;
    const KIND: RecordKind = RecordKind::SupportTicket;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, field: SupportTicketField) -> FieldValue<'_> {
        match field {
            SupportTicketField::Id => id_value(&self.id),
            SupportTicketField::Subject => FieldValue::Text(&self.subject),
            SupportTicketField::RequesterEmail => FieldValue::Text(&self.requester_email),
            SupportTicketField::Priority => FieldValue::Text(self.priority.as_str()),
            SupportTicketField::Status => FieldValue::Text(self.status.as_str()),
            SupportTicketField::Assignee => FieldValue::from_opt_str(self.assignee.as_deref()),
            SupportTicketField::CreatedAt => FieldValue::Date(self.created_at),
        }
    }

    fn search_fields() -> &'static [SupportTicketField] {
        &[
            SupportTicketField::Subject,
            SupportTicketField::RequesterEmail,
            SupportTicketField::Assignee,
        ]
    }
}
