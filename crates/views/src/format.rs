//! Formatting rules
//!
//! Display formatting is chosen from an explicit rule table keyed by field
//! or widget identifier. The table is built once when a view is configured;
//! rendering never inspects identifier text to guess a format.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use safetysync_core::{FieldValue, DATE_FORMAT};

/// Placeholder rendered for absent values
pub const ABSENT_PLACEHOLDER: &str = "-";

/// How to render one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatRule {
    /// Raw text form
    #[default]
    Plain,
    /// Integer with thousands separators: `12,345`
    Count,
    /// Whole currency units: `$12,345`
    Currency,
    /// Percentage: `87%`
    Percent,
    /// ISO calendar date: `2025-01-31`
    Date,
    /// Duration in minutes: `1h 30m`
    Minutes,
}

impl FormatRule {
    /// Render a field value
    pub fn render(&self, value: &FieldValue<'_>) -> String {
        match value {
            FieldValue::Absent => ABSENT_PLACEHOLDER.to_string(),
            FieldValue::Integer(n) => self.render_number(*n),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FieldValue::Text(s) => s.to_string(),
        }
    }

    /// Render a bare number (dashboard metrics, counts)
    pub fn render_number(&self, n: i64) -> String {
        match self {
            FormatRule::Plain | FormatRule::Date => n.to_string(),
            FormatRule::Count => group_thousands(n),
            FormatRule::Currency => {
                if n < 0 {
                    format!("-${}", group_thousands(n.saturating_abs()))
                } else {
                    format!("${}", group_thousands(n))
                }
            }
            FormatRule::Percent => format!("{}%", n),
            FormatRule::Minutes => {
                let (hours, minutes) = (n / 60, n % 60);
                match (hours, minutes) {
                    (0, m) => format!("{}m", m),
                    (h, 0) => format!("{}h", h),
                    (h, m) => format!("{}h {}m", h, m.abs()),
                }
            }
        }
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format rules keyed by field or widget identifier
///
/// Identifiers without an entry render with the table's fallback rule
/// (`Plain` unless overridden).
#[derive(Debug, Clone)]
pub struct FormatTable<K: Eq + Hash> {
    rules: HashMap<K, FormatRule>,
    fallback: FormatRule,
}

impl<K: Eq + Hash> Default for FormatTable<K> {
    fn default() -> Self {
        FormatTable {
            rules: HashMap::new(),
            fallback: FormatRule::Plain,
        }
    }
}

impl<K: Eq + Hash> FormatTable<K> {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add one rule
    pub fn with_rule(mut self, key: K, rule: FormatRule) -> Self {
        self.rules.insert(key, rule);
        self
    }

    /// Builder: change the fallback rule
    pub fn with_fallback(mut self, rule: FormatRule) -> Self {
        self.fallback = rule;
        self
    }

    /// Rule for `key`
    pub fn rule(&self, key: &K) -> FormatRule {
        self.rules.get(key).copied().unwrap_or(self.fallback)
    }

    /// Number of explicit rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no explicit rules are set
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Eq + Hash> FromIterator<(K, FormatRule)> for FormatTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, FormatRule)>>(iter: I) -> Self {
        FormatTable {
            rules: iter.into_iter().collect(),
            fallback: FormatRule::Plain,
        }
    }
}
