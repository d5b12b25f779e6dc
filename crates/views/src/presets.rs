//! Per-entity presentation presets
//!
//! Each entity declares its list lines, default summary grouping and
//! column formats once. Views built from a preset never guess formatting
//! from field names.

use safetysync_core::{
    Certificate, CertificateField, Document, DocumentField, Employee, EmployeeField, FieldId,
    Record, SupportTicket, SupportTicketField, TrainingSession, TrainingSessionField,
};

use crate::format::{FormatRule, FormatTable};
use crate::projector::{
    Column, GridProjector, ItemListProjector, Projector, SummaryProjector, View, ViewKind,
};

/// Default presentation of one entity kind
pub trait Presentation: Record + Sized {
    /// List lines: title, optional subtitle and badge
    fn list_projector() -> ItemListProjector<Self::Field>;

    /// Fields grouped by the summary view when the caller names none
    fn summary_fields() -> Vec<Self::Field>;

    /// Explicit column formats; unlisted fields render plain
    fn formats() -> FormatTable<Self::Field> {
        FormatTable::new()
    }

    /// Grid with one column per field, formatted from [`Presentation::formats`]
    fn grid_projector() -> GridProjector<Self::Field> {
        let formats = Self::formats();
        GridProjector::new(
            Self::Field::all()
                .iter()
                .map(|&field| Column::new(field).with_format(formats.rule(&field)))
                .collect(),
        )
    }

    /// Project `records` into the requested view
    ///
    /// An empty `group_by` falls back to [`Presentation::summary_fields`].
    fn project_view(kind: ViewKind, records: &[&Self], group_by: &[Self::Field]) -> View {
        match kind {
            ViewKind::List => View::List(Self::list_projector().project(records)),
            ViewKind::Grid => View::Grid(Self::grid_projector().project(records)),
            ViewKind::Summary => {
                let fields = if group_by.is_empty() {
                    Self::summary_fields()
                } else {
                    group_by.to_vec()
                };
                View::Summary(SummaryProjector::new(fields).project(records))
            }
        }
    }
}

impl Presentation for Employee {
    fn list_projector() -> ItemListProjector<EmployeeField> {
        ItemListProjector::new(EmployeeField::Name)
            .with_subtitle(EmployeeField::Department)
            .with_badge(EmployeeField::Status)
    }

    fn summary_fields() -> Vec<EmployeeField> {
        vec![EmployeeField::Department, EmployeeField::Status]
    }
}

impl Presentation for Certificate {
    fn list_projector() -> ItemListProjector<CertificateField> {
        ItemListProjector::new(CertificateField::Title)
            .with_subtitle(CertificateField::ExpirationDate)
            .with_badge(CertificateField::Status)
    }

    fn summary_fields() -> Vec<CertificateField> {
        vec![CertificateField::Status, CertificateField::Issuer]
    }

    fn formats() -> FormatTable<CertificateField> {
        FormatTable::new()
            .with_rule(CertificateField::IssuedDate, FormatRule::Date)
            .with_rule(CertificateField::ExpirationDate, FormatRule::Date)
    }
}

impl Presentation for TrainingSession {
    fn list_projector() -> ItemListProjector<TrainingSessionField> {
        ItemListProjector::new(TrainingSessionField::Title)
            .with_subtitle(TrainingSessionField::Date)
            .with_badge(TrainingSessionField::Status)
    }

    fn summary_fields() -> Vec<TrainingSessionField> {
        vec![TrainingSessionField::Category, TrainingSessionField::Status]
    }

    fn formats() -> FormatTable<TrainingSessionField> {
        FormatTable::new()
            .with_rule(TrainingSessionField::DurationMinutes, FormatRule::Minutes)
            .with_rule(TrainingSessionField::Capacity, FormatRule::Count)
            .with_rule(TrainingSessionField::Enrolled, FormatRule::Count)
    }
}

impl Presentation for Document {
    fn list_projector() -> ItemListProjector<DocumentField> {
        ItemListProjector::new(DocumentField::Title)
            .with_subtitle(DocumentField::Category)
            .with_badge(DocumentField::Status)
    }

    fn summary_fields() -> Vec<DocumentField> {
        vec![DocumentField::Category, DocumentField::Status]
    }

    fn formats() -> FormatTable<DocumentField> {
        FormatTable::new().with_rule(DocumentField::SizeBytes, FormatRule::Count)
    }
}

impl Presentation for SupportTicket {
    fn list_projector() -> ItemListProjector<SupportTicketField> {
        ItemListProjector::new(SupportTicketField::Subject)
            .with_subtitle(SupportTicketField::Assignee)
            .with_badge(SupportTicketField::Status)
    }

    fn summary_fields() -> Vec<SupportTicketField> {
        vec![SupportTicketField::Status, SupportTicketField::Priority]
    }
}
