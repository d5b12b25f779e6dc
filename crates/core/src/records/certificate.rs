//! Training certificates issued to employees

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;
use crate::record::{id_value, Record};

named_enum! {
    /// Administrative state of a certificate
    #[derive(Default)]
    pub enum CertificateStatus: "certificate status" {
        /// Valid as issued
        #[default]
        Active => "active",
        /// Marked expired by an administrator
        Expired => "expired",
        /// Withdrawn before its expiration date
        Revoked => "revoked",
    }
}

named_enum! {
    /// Fields of a [`Certificate`]
    pub enum CertificateField: "certificate field" {
        /// Record identifier
        Id => "id",
        /// Holder's employee id (not validated against the roster)
        EmployeeId => "employee-id",
        /// Course or qualification name
        Title => "title",
        /// Printed certificate number
        CertificateNumber => "certificate-number",
        /// Issuing body
        Issuer => "issuer",
        /// Date of issue
        IssuedDate => "issued-date",
        /// Date after which the certificate lapses
        ExpirationDate => "expiration-date",
        /// Administrative state
        Status => "status",
    }
}

impl FieldId for CertificateField {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

/// A certificate held by one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Record identifier
    pub id: RecordId,
    /// Holder's employee id
    pub employee_id: RecordId,
    /// Course or qualification name
    #[serde(alias = "certificateName")]
    pub title: String,
    /// Printed certificate number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
    /// Issuing body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Date of issue
    #[serde(alias = "issueDate")]
    pub issued_date: NaiveDate,
    /// Lapse date; `None` means the certificate never expires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
    /// Administrative state
    #[serde(default)]
    pub status: CertificateStatus,
}

impl Certificate {
    /// Create an active, non-expiring certificate
    pub fn new(
        id: impl Into<RecordId>,
        employee_id: impl Into<RecordId>,
        title: impl Into<String>,
        issued_date: NaiveDate,
    ) -> Self {
        Certificate {
            id: id.into(),
            employee_id: employee_id.into(),
            title: title.into(),
            certificate_number: None,
            issuer: None,
            issued_date,
            expiration_date: None,
            status: CertificateStatus::Active,
        }
    }

    /// Set the expiration date
    pub fn expiring(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Set the issuing body
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }
}

impl Record for Certificate {
    type Field = CertificateField;
    const KIND: RecordKind = RecordKind::Certificate;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, field: CertificateField) -> FieldValue<'_> {
        match field {
            CertificateField::Id => id_value(&self.id),
            CertificateField::EmployeeId => id_value(&self.employee_id),
            CertificateField::Title => FieldValue::Text(&self.title),
            CertificateField::CertificateNumber => {
                FieldValue::from_opt_str(self.certificate_number.as_deref())
            }
            CertificateField::Issuer => FieldValue::from_opt_str(self.issuer.as_deref()),
            CertificateField::IssuedDate => FieldValue::Date(self.issued_date),
            CertificateField::ExpirationDate => FieldValue::from_opt_date(self.expiration_date),
            CertificateField::Status => FieldValue::Text(self.status.as_str()),
        }
    }

    fn search_fields() -> &'static [CertificateField] {
        &[
            CertificateField::Title,
            CertificateField::CertificateNumber,
            CertificateField::Issuer,
        ]
    }
}
