//! Field identifiers and borrowed field values
//!
//! Records expose their fields through a closed identifier enum per entity
//! and a borrowed [`FieldValue`]. The filter, sort and projection stages
//! only ever see records through this view.
//!
//! ## Ordering
//!
//! - Text compares case-insensitively (`"alice" == "ALICE"` for ordering)
//! - Integers and dates compare by natural value
//! - Mixed kinds order by kind rank: Integer < Date < Text
//! - `Absent` orders after every present value

use chrono::NaiveDate;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Date format used for rendering and parsing calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Closed set of field identifiers for one entity kind
pub trait FieldId: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Canonical kebab-case field name
    fn name(&self) -> &'static str;

    /// Every field of the entity, in display order
    fn all() -> &'static [Self];

    /// Resolve a field by its canonical name
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

/// Borrowed view of one field of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// String or enumerated status value
    Text(&'a str),
    /// Integer quantity (counts, sizes, numeric ids)
    Integer(i64),
    /// Calendar date
    Date(NaiveDate),
    /// Optional field that is not set
    Absent,
}

impl<'a> FieldValue<'a> {
    /// Wrap an optional string field
    pub fn from_opt_str(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }

    /// Wrap an optional date field
    pub fn from_opt_date(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Date)
    }

    /// True when the underlying optional field is unset
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Text form used for categorical equality and display
    ///
    /// Returns `None` for `Absent`.
    pub fn as_text(&self) -> Option<Cow<'a, str>> {
        match *self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s)),
            FieldValue::Integer(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Date(d) => Some(Cow::Owned(d.format(DATE_FORMAT).to_string())),
            FieldValue::Absent => None,
        }
    }

    /// Case-insensitive substring test, used by the text query
    ///
    /// `needle` must already be lowercase. Only `Text` values participate.
    pub fn contains_folded(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle),
            _ => false,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Integer(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Absent => 3,
        }
    }
}

/// Total order over field values
///
/// See the module documentation for the rules. Equal text under case folding
/// compares `Equal`, so a stable sort keeps such records in input order.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(x), FieldValue::Text(y)) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
        (FieldValue::Integer(x), FieldValue::Integer(y)) => x.cmp(y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        _ => a.kind_rank().cmp(&b.kind_rank()),
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(
            compare_values(&FieldValue::Text("alice"), &FieldValue::Text("ALICE")),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&FieldValue::Text("alice"), &FieldValue::Text("Bob")),
            Ordering::Less
        );
    }

    #[test]
    fn test_integers_and_dates_compare_naturally() {
        assert_eq!(
            compare_values(&FieldValue::Integer(9), &FieldValue::Integer(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(
                &FieldValue::Date(date(2024, 5, 1)),
                &FieldValue::Date(date(2023, 12, 31))
            ),
            Ordering::Greater
        );
    }

    #[test]
    fn test_absent_orders_last() {
        for present in [
            FieldValue::Text("z"),
            FieldValue::Integer(i64::MAX),
            FieldValue::Date(date(9999, 1, 1)),
        ] {
            assert_eq!(compare_values(&present, &FieldValue::Absent), Ordering::Less);
            assert_eq!(compare_values(&FieldValue::Absent, &present), Ordering::Greater);
        }
        assert_eq!(
            compare_values(&FieldValue::Absent, &FieldValue::Absent),
            Ordering::Equal
        );
    }

    #[test]
    fn test_as_text_renders_each_kind() {
        assert_eq!(FieldValue::Text("Ops").as_text().as_deref(), Some("Ops"));
        assert_eq!(FieldValue::Integer(12).as_text().as_deref(), Some("12"));
        assert_eq!(
            FieldValue::Date(date(2024, 2, 9)).as_text().as_deref(),
            Some("2024-02-09")
        );
        assert_eq!(FieldValue::Absent.as_text(), None);
    }

    #[test]
    fn test_contains_folded_only_matches_text() {
        assert!(FieldValue::Text("Alicia Keys").contains_folded("ali"));
        assert!(!FieldValue::Integer(123).contains_folded("12"));
        assert!(!FieldValue::Absent.contains_folded(""));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn value() -> impl Strategy<Value = FieldValue<'static>> {
            prop_oneof![
                any::<i64>().prop_map(FieldValue::Integer),
                (0i32..3000, 1u32..=12, 1u32..=28)
                    .prop_map(|(y, m, d)| FieldValue::Date(date(y, m, d))),
                prop::sample::select(vec!["alice", "Alice", "bob", "", "Zed", "é"])
                    .prop_map(FieldValue::Text),
                Just(FieldValue::Absent),
            ]
        }

        proptest! {
            #[test]
            fn test_compare_values_is_antisymmetric(a in value(), b in value()) {
                prop_assert_eq!(compare_values(&a, &b), compare_values(&b, &a).reverse());
            }

            #[test]
            fn test_compare_values_is_transitive(a in value(), b in value(), c in value()) {
                use std::cmp::Ordering::*;
                if compare_values(&a, &b) != Greater && compare_values(&b, &c) != Greater {
                    prop_assert_ne!(compare_values(&a, &c), Greater);
                }
            }

            #[test]
            fn test_absent_sorts_last(a in value()) {
                prop_assert_ne!(compare_values(&a, &FieldValue::Absent), std::cmp::Ordering::Greater);
            }
        }
    }
}
