//! Compliance documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;
use crate::record::{id_value, Record};

named_enum! {
    /// Publication state of a document
    #[derive(Default)]
    pub enum DocumentStatus: "document status" {
        /// Work in progress
        #[default]
        Draft => "draft",
        /// Visible to employees
        Published => "published",
        /// Retained but hidden
        Archived => "archived",
    }
}

named_enum! {
    /// Fields of a [`Document`]
    pub enum DocumentField: "document field" {
        /// Record identifier
        Id => "id",
        /// Document title
        Title => "title",
        /// Filing category (policy, SDS, procedure, ...)
        Category => "category",
        /// Uploader's name
        UploadedBy => "uploaded-by",
        /// Upload date
        UploadedAt => "uploaded-at",
        /// File size in bytes
        SizeBytes => "size-bytes",
        /// Publication state
        Status => "status",
    }
}

impl FieldId for DocumentField {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

/// One uploaded document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Record identifier
    pub id: RecordId,
    /// Document title
    pub title: String,
    /// Filing category
    pub category: String,
    /// Uploader's name
    pub uploaded_by: String,
    /// Upload date
    pub uploaded_at: NaiveDate,
    /// File size in bytes
    #[serde(default)]
    pub size_bytes: u64,
    /// Publication state
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Record for Document {
    type Field = DocumentField;
    const KIND: RecordKind = RecordKind::Document;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, field: DocumentField) -> FieldValue<'_> {
        match field {
            DocumentField::Id => id_value(&self.id),
            DocumentField::Title => FieldValue::Text(&self.title),
            DocumentField::Category => FieldValue::Text(&self.category),
            DocumentField::UploadedBy => FieldValue::Text(&self.uploaded_by),
            DocumentField::UploadedAt => FieldValue::Date(self.uploaded_at),
            DocumentField::SizeBytes => {
                FieldValue::Integer(i64::try_from(self.size_bytes).unwrap_or(i64::MAX))
            }
            DocumentField::Status => FieldValue::Text(self.status.as_str()),
        }
    }

    fn search_fields() -> &'static [DocumentField] {
        &[
            DocumentField::Title,
            DocumentField::Category,
            DocumentField::UploadedBy,
        ]
    }
}
