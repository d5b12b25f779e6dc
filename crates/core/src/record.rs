//! The `Record` trait
//!
//! Every entity struct implements `Record` so that the generic pipeline
//! (filter, sort, project) can work over any collection without knowing the
//! concrete type.

use crate::error::{Error, Result};
use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;

/// A flat entity with an identifier and typed fields
pub trait Record {
    /// Closed set of field identifiers for this entity
    type Field: FieldId;

    /// Entity kind, for errors and storage keys
    const KIND: RecordKind;

    /// Identifier, unique within one collection
    fn id(&self) -> &RecordId;

    /// Borrowed view of one field
    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// Fields consulted by the free-text query
    fn search_fields() -> &'static [Self::Field];

    /// Resolve a field name, reporting the entity kind on failure
    fn parse_field(name: &str) -> Result<Self::Field> {
        Self::Field::from_name(name).ok_or_else(|| Error::InvalidField {
            kind: Self::KIND,
            name: name.to_string(),
        })
    }
}

/// Map a numeric id onto a field value
pub(crate) fn id_value(id: &RecordId) -> FieldValue<'_> {
    match id {
        RecordId::Numeric(n) => FieldValue::Integer(i64::try_from(*n).unwrap_or(i64::MAX)),
        RecordId::Text(s) => FieldValue::Text(s),
    }
}
