//! Support desk ticket mutation
//!
//! Mirrors the two ticket endpoints of the REST API (partial update and
//! assignment) against an in-memory ticket collection.

use serde::{Deserialize, Serialize};
use tracing::info;

use safetysync_core::{RecordId, Result, SupportTicket, TicketPriority, TicketStatus};

use crate::collection::RecordCollection;

/// Partial ticket update; `None` fields are left unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPatch {
    /// New workflow state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    /// New urgency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
}

impl TicketPatch {
    /// Patch that changes only the status
    pub fn status(status: TicketStatus) -> Self {
        TicketPatch {
            status: Some(status),
            priority: None,
        }
    }

    /// Patch that changes only the priority
    pub fn priority(priority: TicketPriority) -> Self {
        TicketPatch {
            status: None,
            priority: Some(priority),
        }
    }

    /// True if applying the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }
}

/// Ticket queue with update and assignment
#[derive(Debug, Default)]
pub struct SupportDesk {
    tickets: RecordCollection<SupportTicket>,
}

impl SupportDesk {
    /// Desk over an existing ticket collection
    pub fn new(tickets: RecordCollection<SupportTicket>) -> Self {
        SupportDesk { tickets }
    }

    /// All tickets in insertion order
    pub fn tickets(&self) -> &RecordCollection<SupportTicket> {
        &self.tickets
    }

    /// Apply `patch` to ticket `id` and return the updated ticket
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown ids; no ticket is modified.
    pub fn update(&mut self, id: &RecordId, patch: TicketPatch) -> Result<&SupportTicket> {
        let ticket = self.tickets.get_mut(id)?;
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        if let Some(priority) = patch.priority {
            ticket.priority = priority;
        }
        info!(ticket = %id, status = %ticket.status, priority = %ticket.priority, "ticket updated");
        Ok(&*ticket)
    }

    /// Set or clear the assignee of ticket `id`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown ids; no ticket is modified.
    pub fn assign(&mut self, id: &RecordId, assignee: Option<String>) -> Result<&SupportTicket> {
        let ticket = self.tickets.get_mut(id)?;
        ticket.assignee = assignee;
        info!(ticket = %id, assignee = ?ticket.assignee, "ticket assigned");
        Ok(&*ticket)
    }

    /// Number of tickets in `status`
    pub fn count_with_status(&self, status: TicketStatus) -> usize {
        self.tickets.iter().filter(|t| t.status == status).count()
    }

    /// Consume into the ticket collection
    pub fn into_tickets(self) -> RecordCollection<SupportTicket> {
        self.tickets
    }
}
