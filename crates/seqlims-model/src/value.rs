//! Field values carried by untyped records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of one record field
///
/// A missing key and an explicit JSON `null` are both [`FieldValue::Absent`].
/// Variant order matters for untagged deserialization: ISO dates are tried
/// before plain text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value recorded
    #[default]
    Absent,
    /// Boolean flag
    Bool(bool),
    /// Numeric measurement
    Number(f64),
    /// Calendar date
    Date(NaiveDate),
    /// Free text or enum code
    Text(String),
}

impl FieldValue {
    /// True when nothing usable was recorded (absent or blank text)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// True when the value is stored as a number (not coerced)
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Number(_))
    }

    /// Numeric view of the value
    ///
    /// Numbers are returned as-is, text is parsed after trimming.
    /// `NaN` never counts as numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Borrow text content, if any
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text form used for id resolution and enum matching
    ///
    /// Returns `None` for empty values.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Absent,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => {
                n.as_f64().map_or(FieldValue::Absent, FieldValue::Number)
            }
            serde_json::Value::String(s) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Ok(d) => FieldValue::Date(d),
                Err(_) => FieldValue::Text(s),
            },
            // Nested structures are kept as their JSON text
            other => FieldValue::Text(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values() {
        assert!(FieldValue::Absent.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::from("   ").is_empty());
        assert!(!FieldValue::from(0.0).is_empty());
        assert!(!FieldValue::from(false).is_empty());
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(FieldValue::from(12.5).as_number(), Some(12.5));
        assert_eq!(FieldValue::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from(f64::NAN).as_number(), None);
        assert_eq!(FieldValue::from(true).as_number(), None);
        assert_eq!(FieldValue::Absent.as_number(), None);
    }

    #[test]
    fn json_values_map_to_variants() {
        let v: FieldValue = serde_json::json!(null).into();
        assert_eq!(v, FieldValue::Absent);

        let v: FieldValue = serde_json::json!(3).into();
        assert_eq!(v, FieldValue::Number(3.0));

        let v: FieldValue = serde_json::json!("2024-03-01").into();
        assert!(matches!(v, FieldValue::Date(_)));

        let v: FieldValue = serde_json::json!("PCR001").into();
        assert_eq!(v, FieldValue::Text("PCR001".to_string()));
    }

    #[test]
    fn untagged_deserialization() {
        let v: FieldValue = serde_json::from_str("1.9").unwrap();
        assert_eq!(v, FieldValue::Number(1.9));

        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, FieldValue::Absent);

        let v: FieldValue = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(v.as_str(), Some("success"));
    }

    #[test]
    fn display_renders_plain_text() {
        assert_eq!(FieldValue::from(2.0).to_string(), "2");
        assert_eq!(FieldValue::from("S1").to_string(), "S1");
        assert_eq!(FieldValue::Absent.to_text(), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_as_number_never_nan(n in proptest::num::f64::ANY, text in "\\PC{0,16}") {
            proptest::prop_assert!(!FieldValue::Number(n).as_number().is_some_and(f64::is_nan));
            proptest::prop_assert!(!FieldValue::Text(text).as_number().is_some_and(f64::is_nan));
        }

        #[test]
        fn prop_finite_numbers_are_present(n in -1.0e9..1.0e9f64) {
            let value = FieldValue::from(n);
            proptest::prop_assert!(!value.is_empty());
            proptest::prop_assert_eq!(value.as_number(), Some(n));
        }
    }
}
