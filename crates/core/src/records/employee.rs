//! Employee roster entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::field::{FieldId, FieldValue};
use crate::id::RecordId;
use crate::kind::RecordKind;
use crate::record::{id_value, Record};

named_enum! {
    /// Employment status
    #[derive(Default)]
    pub enum EmployeeStatus: "employee status" {
        /// Currently employed and working
        #[default]
        Active => "active",
        /// No longer employed
        Inactive => "inactive",
        /// Employed but temporarily away
        OnLeave => "on-leave",
    }
}

named_enum! {
    /// Fields of an [`Employee`]
    pub enum EmployeeField: "employee field" {
        /// Record identifier
        Id => "id",
        /// Badge / payroll number
        EmployeeNumber => "employee-number",
        /// Full name
        Name => "name",
        /// Work email
        Email => "email",
        /// Department name
        Department => "department",
        /// Job title
        Position => "position",
        /// Employment status
        Status => "status",
        /// Date of hire
        HireDate => "hire-date",
        /// Contact phone
        Phone => "phone",
    }
}

impl FieldId for EmployeeField {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn all() -> &'static [Self] {
        Self::ALL
    }
}

/// One employee on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Record identifier
    pub id: RecordId,
    /// Badge / payroll number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    /// Full name
    pub name: String,
    /// Work email
    pub email: String,
    /// Department name
    pub department: String,
    /// Job title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Employment status
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Date of hire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Employee {
    /// Create an active employee with only the required fields set
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Employee {
            id: id.into(),
            employee_number: None,
            name: name.into(),
            email: email.into(),
            department: department.into(),
            position: None,
            status: EmployeeStatus::Active,
            hire_date: None,
            phone: None,
        }
    }

    /// Set the job title
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the employment status
    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the hire date
    pub fn with_hire_date(mut self, date: NaiveDate) -> Self {
        self.hire_date = Some(date);
        self
    }

    /// Set the badge number
    pub fn with_employee_number(mut self, number: impl Into<String>) -> Self {
        self.employee_number = Some(number.into());
        self
    }
}

impl Record for Employee {
    type Field = EmployeeField;
    const KIND: RecordKind = RecordKind::Employee;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field(&self, field: EmployeeField) -> FieldValue<'_> {
        match field {
            EmployeeField::Id => id_value(&self.id),
            EmployeeField::EmployeeNumber => FieldValue::from_opt_str(self.employee_number.as_deref()),
            EmployeeField::Name => FieldValue::Text(&self.name),
            EmployeeField::Email => FieldValue::Text(&self.email),
            EmployeeField::Department => FieldValue::Text(&self.department),
            EmployeeField::Position => FieldValue::from_opt_str(self.position.as_deref()),
            EmployeeField::Status => FieldValue::Text(self.status.as_str()),
            EmployeeField::HireDate => FieldValue::from_opt_date(self.hire_date),
            EmployeeField::Phone => FieldValue::from_opt_str(self.phone.as_deref()),
        }
    }

    fn search_fields() -> &'static [EmployeeField] {
        &[
            EmployeeField::Name,
            EmployeeField::Email,
            EmployeeField::EmployeeNumber,
            EmployeeField::Position,
        ]
    }
}
