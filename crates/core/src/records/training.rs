//! Training sessions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;
use crate::record::{id_value, Record};

named_enum! {
    /// Lifecycle of a training session
    #[derive(Default)]
    pub enum SessionStatus: "session status" {
        /// Planned, not started
        #[default]
        Scheduled => "scheduled",
        /// Running now
        InProgress => "in-progress",
        /// Finished
        Completed => "completed",
        /// Called off
        Cancelled => "cancelled",
    }
}

named_enum! {
    /// Fields of a [`TrainingSession`]
    pub enum TrainingSessionField: "training session field" {
        /// Record identifier
        Id => "id",
        /// Course title
        Title => "title",
        /// Instructor name
        Instructor => "instructor",
        /// Venue
        Location => "location",
        /// Course category (e.g. "OSHA", "HAZMAT")
        Category => "category",
        /// Session date
        Date => "date",
        /// Length in minutes
        DurationMinutes => "duration-minutes",
        /// Seats available
        Capacity => "capacity",
        /// Seats taken
        Enrolled => "enrolled",
        /// Lifecycle status
        Status => "status",
    }
}

impl FieldId for TrainingSessionField {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

/// One scheduled or delivered training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    /// Record identifier
    pub id: RecordId,
    /// Course title
    pub title: String,
    /// Instructor name
    pub instructor: String,
    /// Venue
    pub location: String,
    /// Course category
    pub category: String,
    /// Session date
    pub date: NaiveDate,
    /// Length in minutes
    #[serde(default)]
    pub duration_minutes: u32,
    /// Seats available
    #[serde(default)]
    pub capacity: u32,
    /// Seats taken
    #[serde(default)]
    pub enrolled: u32,
    /// Lifecycle status
    #[serde(default)]
    pub status: SessionStatus,
}

impl TrainingSession {
    /// Seats still open; never negative
    pub fn seats_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled)
    }
}

impl Record for TrainingSession {
    type Field = TrainingSessionField;
    const KIND: RecordKind = RecordKind::TrainingSession;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, field: TrainingSessionField) -> FieldValue<'_> {
        match field {
            TrainingSessionField::Id => id_value(&self.id),
            TrainingSessionField::Title => FieldValue::Text(&self.title),
            TrainingSessionField::Instructor => FieldValue::Text(&self.instructor),
            TrainingSessionField::Location => FieldValue::Text(&self.location),
            TrainingSessionField::Category => FieldValue::Text(&self.category),
            TrainingSessionField::Date => FieldValue::Date(self.date),
            TrainingSessionField::DurationMinutes => {
                FieldValue::Integer(i64::from(self.duration_minutes))
            }
            TrainingSessionField::Capacity => FieldValue::Integer(i64::from(self.capacity)),
            TrainingSessionField::Enrolled => FieldValue::Integer(i64::from(self.enrolled)),
            TrainingSessionField::Status => FieldValue::Text(self.status.as_str()),
        }
    }

    fn search_fields() -> &'static [TrainingSessionField] {
        &[
            TrainingSessionField::Title,
            TrainingSessionField::Instructor,
            TrainingSessionField::Location,
            TrainingSessionField::Category,
        ]
    }
}
