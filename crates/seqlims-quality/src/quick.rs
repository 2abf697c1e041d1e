//! Ad-hoc single field validation
//!
//! [`quick_validate`] checks one value against caller-supplied [`QuickRules`]
//! without an experiment rule set. Checks run in a fixed order and the first
//! failure is returned:
//! 1. required
//! 2. declared type (number, email, url)
//! 3. numeric bounds
//! 4. pattern

use once_cell::sync::Lazy;
use regex::Regex;
use seqlims_model::{FieldValue, ValidationLevel, ValidationResult};
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

/// Declared type of a quick-checked value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Email,
    Url,
}

/// Constraints for [`quick_validate`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<String>,
    #[serde(rename = "type")]
    pub value_type: Option<ValueType>,
}

impl QuickRules {
    /// Create empty rules (everything passes)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }
}

/// Validate one field value; `None` means it passed
#[must_use]
pub fn quick_validate(
    field: &str,
    value: &FieldValue,
    rules: &QuickRules,
) -> Option<ValidationResult> {
    if value.is_empty() {
        return rules
            .required
            .then(|| ValidationResult::error(field, format!("{field}为必填项")));
    }

    let text = value.to_string();
    let type_error = match rules.value_type {
        Some(ValueType::Number) if value.as_number().is_none() => Some("必须为数值"),
        Some(ValueType::Email) if !EMAIL.is_match(&text) => Some("邮箱格式不正确"),
        Some(ValueType::Url) if url::Url::parse(&text).is_err() => Some("网址格式不正确"),
        _ => None,
    };
    if let Some(problem) = type_error {
        return Some(fail(field, ValidationLevel::Error, format!("{field}{problem}"), value));
    }

    let numeric = match rules.value_type {
        Some(ValueType::Number) => value.as_number(),
        _ if value.is_number() => value.as_number(),
        _ => None,
    };
    if let Some(n) = numeric {
        if let Some(min) = rules.min.filter(|min| n < *min) {
            return Some(
                fail(field, ValidationLevel::Warning, format!("{field}不能小于{min}"), value)
                    .with_expected_range(format!(">= {min}")),
            );
        }
        if let Some(max) = rules.max.filter(|max| n > *max) {
            return Some(
                fail(field, ValidationLevel::Warning, format!("{field}不能大于{max}"), value)
                    .with_expected_range(format!("<= {max}")),
            );
        }
    }

    if let Some(pattern) = &rules.pattern {
        match Regex::new(pattern) {
            Ok(re) if !re.is_match(&text) => {
                return Some(
                    fail(field, ValidationLevel::Warning, format!("{field}格式不正确"), value)
                        .with_expected_range(pattern.clone()),
                );
            }
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(
                    field,
                    pattern = %pattern,
                    error = %err,
                    "invalid quick-validate pattern"
                );
                return Some(
                    ValidationResult::warning(field, format!("{field}的校验规则无效"))
                        .with_suggestion(err.to_string()),
                );
            }
        }
    }

    None
}

fn fail(
    field: &str,
    level: ValidationLevel,
    message: String,
    value: &FieldValue,
) -> ValidationResult {
    ValidationResult::new(field, level, message).with_current_value(value.clone())
}
