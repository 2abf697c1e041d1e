//! Validation findings
//!
//! A rule produces at most one [`ValidationResult`] per evaluation. Several
//! concerns about the same field are expressed as several rules.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding, ordered `info < warning < error < critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Acknowledgement or advice, nothing to fix
    Info,
    /// Questionable value that should be reviewed
    Warning,
    /// Invalid or missing data
    Error,
    /// Data that makes the record unusable
    Critical,
}

impl ValidationLevel {
    /// Lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationLevel::Info => "info",
            ValidationLevel::Warning => "warning",
            ValidationLevel::Error => "error",
            ValidationLevel::Critical => "critical",
        }
    }

    /// True for `error` and `critical`
    #[inline]
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        *self >= ValidationLevel::Error
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected issue on one field
///
/// Only `field`, `level` and `message` carry meaning for the engine; the
/// remaining fields are display enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Offending field name
    pub field: String,
    /// Severity
    pub level: ValidationLevel,
    /// Human-readable description
    pub message: String,
    /// Suggested corrective action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Value that triggered the finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<FieldValue>,
    /// Acceptable range, as display text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_range: Option<String>,
    /// Citation for the threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl ValidationResult {
    /// Create a bare result
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        level: ValidationLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            level,
            message: message.into(),
            suggestion: None,
            current_value: None,
            expected_range: None,
            reference: None,
        }
    }

    /// Shorthand for an `info` result
    #[inline]
    #[must_use]
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationLevel::Info, message)
    }

    /// Shorthand for a `warning` result
    #[inline]
    #[must_use]
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationLevel::Warning, message)
    }

    /// Shorthand for an `error` result
    #[inline]
    #[must_use]
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationLevel::Error, message)
    }

    /// Shorthand for a `critical` result
    #[inline]
    #[must_use]
    pub fn critical(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ValidationLevel::Critical, message)
    }

    /// With suggestion
    #[inline]
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// With the offending value
    #[inline]
    #[must_use]
    pub fn with_current_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.current_value = Some(value.into());
        self
    }

    /// With expected range text
    #[inline]
    #[must_use]
    pub fn with_expected_range(mut self, range: impl Into<String>) -> Self {
        self.expected_range = Some(range.into());
        self
    }

    /// With reference citation
    #[inline]
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(ValidationLevel::Info < ValidationLevel::Warning);
        assert!(ValidationLevel::Warning < ValidationLevel::Error);
        assert!(ValidationLevel::Error < ValidationLevel::Critical);
        assert!(ValidationLevel::Critical.is_blocking());
        assert!(!ValidationLevel::Warning.is_blocking());
    }

    #[test]
    fn result_builder() {
        let result = ValidationResult::warning("dnaConcentration", "too low")
            .with_current_value(5.0)
            .with_expected_range(">= 10")
            .with_suggestion("re-extract")
            .with_reference("lab SOP");

        assert_eq!(result.level, ValidationLevel::Warning);
        assert_eq!(result.current_value, Some(FieldValue::Number(5.0)));
        assert_eq!(result.reference.as_deref(), Some("lab SOP"));
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ValidationResult::error("dnaVolume", "required").with_expected_range("20-500");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["level"], "error");
        assert_eq!(json["expectedRange"], "20-500");
        assert!(json.get("suggestion").is_none());
    }
}
