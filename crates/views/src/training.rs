//! Derived training status
//!
//! An employee's training status is computed from the certificates whose
//! `employeeId` matches the employee. Rules are evaluated in order and the
//! first match wins:
//!
//! 1. no related certificates → `NoTraining`
//! 2. any certificate expired before `as_of` → `Expired`
//! 3. any certificate expiring within the window → `ExpiringSoon`
//! 4. otherwise → `Current`
//!
//! Certificates without an expiration date never expire. `as_of` is always
//! passed in so the derivation stays pure.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use safetysync_core::{Certificate, Employee, Record, RecordId};

/// Default look-ahead for "expiring soon", in days
pub const DEFAULT_EXPIRING_WINDOW_DAYS: u32 = 30;

/// Training status of one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingStatus {
    /// No certificates on file
    NoTraining,
    /// At least one certificate has lapsed
    Expired,
    /// At least one certificate lapses within the window
    ExpiringSoon,
    /// Everything on file is valid beyond the window
    Current,
}

impl TrainingStatus {
    /// All statuses in precedence order
    pub const ALL: [TrainingStatus; 4] = [
        TrainingStatus::NoTraining,
        TrainingStatus::Expired,
        TrainingStatus::ExpiringSoon,
        TrainingStatus::Current,
    ];

    /// Canonical name
    pub const fn as_str(&self) -> &'static str {
        match self {
            TrainingStatus::NoTraining => "no-training",
            TrainingStatus::Expired => "expired",
            TrainingStatus::ExpiringSoon => "expiring-soon",
            TrainingStatus::Current => "current",
        }
    }
}

impl std::fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status rule with a configurable expiring window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingStatusRule {
    window_days: u32,
}

impl Default for TrainingStatusRule {
    fn default() -> Self {
        TrainingStatusRule {
            window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
        }
    }
}

impl TrainingStatusRule {
    /// Rule with a custom window
    pub fn with_window_days(window_days: u32) -> Self {
        TrainingStatusRule { window_days }
    }

    /// Window length in days
    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Evaluate the rule for one employee's certificates
    pub fn evaluate(&self, certificates: &[&Certificate], as_of: NaiveDate) -> TrainingStatus {
        if certificates.is_empty() {
            return TrainingStatus::NoTraining;
        }

        let expirations = || certificates.iter().filter_map(|c| c.expiration_date);

        if expirations().any(|exp| exp < as_of) {
            return TrainingStatus::Expired;
        }

        let horizon = as_of
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX);
        if expirations().any(|exp| exp <= horizon) {
            return TrainingStatus::ExpiringSoon;
        }

        TrainingStatus::Current
    }
}

/// Certificates grouped by holder
///
/// Built once per certificate collection; lookups for unknown employees
/// return an empty slice.
#[derive(Debug, Default)]
pub struct CertificateIndex<'a> {
    by_employee: HashMap<&'a RecordId, Vec<&'a Certificate>>,
}

impl<'a> CertificateIndex<'a> {
    /// Group `certificates` by `employee_id`, preserving input order
    pub fn build(certificates: &'a [Certificate]) -> Self {
        let mut by_employee: HashMap<&'a RecordId, Vec<&'a Certificate>> = HashMap::new();
        for cert in certificates {
            by_employee.entry(&cert.employee_id).or_default().push(cert);
        }
        CertificateIndex { by_employee }
    }

    /// Certificates held by `employee_id`
    pub fn certificates_for(&self, employee_id: &RecordId) -> &[&'a Certificate] {
        self.by_employee
            .get(employee_id)
            .map_or(&[], |certs| certs.as_slice())
    }

    /// Number of distinct holders
    pub fn holders(&self) -> usize {
        self.by_employee.len()
    }
}

/// Training status of one employee
pub fn training_status(
    employee: &Employee,
    index: &CertificateIndex<'_>,
    rule: &TrainingStatusRule,
    as_of: NaiveDate,
) -> TrainingStatus {
    rule.evaluate(index.certificates_for(employee.id()), as_of)
}

/// Count of employees in one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    /// Status
    pub status: TrainingStatus,
    /// Employees in it
    pub count: usize,
}

/// Training status counts over an employee collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOverview {
    /// Evaluation date
    pub as_of: NaiveDate,
    /// Employees considered
    pub total: usize,
    /// One entry per status, zero counts included, in precedence order
    pub counts: Vec<StatusCount>,
}

impl TrainingOverview {
    /// Count for one status
    pub fn count(&self, status: TrainingStatus) -> usize {
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map_or(0, |c| c.count)
    }
}

/// Summarize training status across `employees`
pub fn training_status_summary(
    employees: &[&Employee],
    index: &CertificateIndex<'_>,
    rule: &TrainingStatusRule,
    as_of: NaiveDate,
) -> TrainingOverview {
    let mut counts: Vec<StatusCount> = TrainingStatus::ALL
        .iter()
        .map(|&status| StatusCount { status, count: 0 })
        .collect();
    for employee in employees {
        let status = training_status(employee, index, rule, as_of);
        if let Some(slot) = counts.iter_mut().find(|c| c.status == status) {
            slot.count += 1;
        }
    }
    TrainingOverview {
        as_of,
        total: employees.len(),
        counts,
    }
}
