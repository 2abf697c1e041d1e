//! Field check strategies
//!
//! Provides the [`FieldCheck`] trait and the reusable strategies rule sets are
//! assembled from:
//! - [`RequiredCheck`]: value must be present
//! - [`TieredRangeCheck`]: negative / low / high / above-optimal tiers from a standard
//! - [`RatioBandCheck`]: purity ratio with an "excellent" sub-band
//! - [`ConditionalCheck`]: only applies when a sibling field has a given value
//! - [`EnumStatusCheck`]: per-field mapping from status code to severity

use seqlims_model::{FieldValue, QualityStandard, Record, ValidationLevel, ValidationResult};
use std::sync::Arc;

/// Pure, total check of one field value
///
/// # Contract
/// - Never panics, whatever the value (absent, wrong type, `NaN`)
/// - Never mutates the record
/// - Returns at most one result, whose `field` equals the `field` argument
pub trait FieldCheck: Send + Sync + std::fmt::Debug {
    /// Evaluate the value of `field`, with the whole record available for
    /// cross-field logic
    fn evaluate(&self, field: &str, value: &FieldValue, record: &Record)
        -> Option<ValidationResult>;

    /// Whether an empty value is reported as a missing required field
    fn is_required(&self) -> bool {
        false
    }
}

fn required_result(field: &str, label: &str) -> ValidationResult {
    ValidationResult::error(field, format!("{label}为必填项"))
        .with_suggestion(format!("请填写{label}"))
}

fn not_numeric_result(field: &str, label: &str, value: &FieldValue) -> ValidationResult {
    ValidationResult::error(field, format!("{label}必须为数值"))
        .with_current_value(value.clone())
        .with_suggestion(format!("请输入有效的{label}数值"))
}

/// Value must be present and non-blank
#[derive(Debug, Clone)]
pub struct RequiredCheck {
    label: String,
}

impl RequiredCheck {
    /// Create check with a display label
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl FieldCheck for RequiredCheck {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        _record: &Record,
    ) -> Option<ValidationResult> {
        value
            .is_empty()
            .then(|| required_result(field, &self.label))
    }

    fn is_required(&self) -> bool {
        true
    }
}

/// Tiered numeric check driven by a [`QualityStandard`]
///
/// Branches are evaluated in this order and exactly one fires:
/// 1. empty: `error` when required, otherwise nothing
/// 2. not numeric: `error`
/// 3. `< 0`: `error`
/// 4. `< min`: `warning`
/// 5. `> max`: `error`
/// 6. `> optimal high`: `info`
/// 7. otherwise nothing
///
/// The negative branch precedes the low branch, so `-5` reports "negative"
/// even though it is also below the minimum.
#[derive(Debug, Clone)]
pub struct TieredRangeCheck {
    label: String,
    standard: QualityStandard,
    required: bool,
    low_hint: String,
    low_suggestion: Option<String>,
    high_hint: String,
    above_optimal_hint: String,
}

impl TieredRangeCheck {
    /// Create optional check for `standard`
    #[must_use]
    pub fn new(label: impl Into<String>, standard: QualityStandard) -> Self {
        Self {
            label: label.into(),
            standard,
            required: false,
            low_hint: "可能影响后续实验".to_string(),
            low_suggestion: None,
            high_hint: "请核实测量结果".to_string(),
            above_optimal_hint: "建议稀释后使用".to_string(),
        }
    }

    /// Report empty values as missing
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Text after "<label>过低，"
    #[inline]
    #[must_use]
    pub fn low_hint(mut self, hint: impl Into<String>) -> Self {
        self.low_hint = hint.into();
        self
    }

    /// Suggestion attached to the low-value warning
    #[inline]
    #[must_use]
    pub fn low_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.low_suggestion = Some(suggestion.into());
        self
    }

    /// Text after "<label>异常偏高，"
    #[inline]
    #[must_use]
    pub fn high_hint(mut self, hint: impl Into<String>) -> Self {
        self.high_hint = hint.into();
        self
    }

    /// Text after "<label>偏高，" for values above the optimal band
    #[inline]
    #[must_use]
    pub fn above_optimal_hint(mut self, hint: impl Into<String>) -> Self {
        self.above_optimal_hint = hint.into();
        self
    }

    fn annotate(&self, result: ValidationResult, value: f64) -> ValidationResult {
        let result = result
            .with_current_value(value)
            .with_expected_range(self.standard.range_text());
        match self.standard.source {
            Some(source) => result.with_reference(source),
            None => result,
        }
    }
}

impl FieldCheck for TieredRangeCheck {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        _record: &Record,
    ) -> Option<ValidationResult> {
        if value.is_empty() {
            return self
                .required
                .then(|| required_result(field, &self.label));
        }

        let Some(n) = value.as_number() else {
            return Some(not_numeric_result(field, &self.label, value));
        };

        let label = &self.label;
        let standard = &self.standard;

        if n < 0.0 {
            return Some(
                ValidationResult::error(field, format!("{label}不能为负数"))
                    .with_current_value(n)
                    .with_suggestion("请检查测量或录入是否有误"),
            );
        }

        if let Some(min) = standard.min_value.filter(|min| n < *min) {
            let suggestion = self.low_suggestion.clone().unwrap_or_else(|| {
                format!("{label}应不低于 {}，请考虑重新制备或浓缩样本", standard.with_unit(min))
            });
            return Some(self.annotate(
                ValidationResult::warning(field, format!("{label}过低，{}", self.low_hint))
                    .with_suggestion(suggestion),
                n,
            ));
        }

        if let Some(max) = standard.max_value.filter(|max| n > *max) {
            return Some(self.annotate(
                ValidationResult::error(field, format!("{label}异常偏高，{}", self.high_hint))
                    .with_suggestion(format!(
                        "{label}超过上限 {}，请复测确认",
                        standard.with_unit(max)
                    )),
                n,
            ));
        }

        if let Some((_, high)) = standard.optimal_range.filter(|(_, high)| n > *high) {
            return Some(self.annotate(
                ValidationResult::info(field, format!("{label}偏高，{}", self.above_optimal_hint))
                    .with_suggestion(format!("最佳上限为 {}", standard.with_unit(high))),
                n,
            ));
        }

        None
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// Ratio check with separate severities per direction and an "excellent" band
///
/// Order: below `low`, above `high`, inside the excellent band (`info`
/// acknowledgement), otherwise nothing. Empty values pass.
#[derive(Debug, Clone)]
pub struct RatioBandCheck {
    label: String,
    low: f64,
    high: f64,
    excellent: Option<(f64, f64)>,
    low_level: ValidationLevel,
    low_message: String,
    high_level: ValidationLevel,
    high_message: String,
    excellent_message: String,
    reference: Option<String>,
}

impl RatioBandCheck {
    /// Create check with acceptable band `[low, high]`
    ///
    /// Both directions default to `warning`.
    #[must_use]
    pub fn new(label: impl Into<String>, low: f64, high: f64) -> Self {
        let label = label.into();
        Self {
            low_message: format!("{label}偏低"),
            high_message: format!("{label}偏高"),
            excellent_message: format!("{label}优秀"),
            label,
            low,
            high,
            excellent: None,
            low_level: ValidationLevel::Warning,
            high_level: ValidationLevel::Warning,
            reference: None,
        }
    }

    /// Band from a standard's min/max, excellent band from its optimal range
    #[must_use]
    pub fn from_standard(label: impl Into<String>, standard: &QualityStandard) -> Self {
        let mut check = Self::new(
            label,
            standard.min_value.unwrap_or(f64::NEG_INFINITY),
            standard.max_value.unwrap_or(f64::INFINITY),
        );
        check.excellent = standard.optimal_range;
        check.reference = standard.source.map(str::to_string);
        check
    }

    /// Level and message below the band
    #[inline]
    #[must_use]
    pub fn when_low(mut self, level: ValidationLevel, message: impl Into<String>) -> Self {
        self.low_level = level;
        self.low_message = message.into();
        self
    }

    /// Level and message above the band
    #[inline]
    #[must_use]
    pub fn when_high(mut self, level: ValidationLevel, message: impl Into<String>) -> Self {
        self.high_level = level;
        self.high_message = message.into();
        self
    }

    /// Message for values in the excellent band
    #[inline]
    #[must_use]
    pub fn excellent_message(mut self, message: impl Into<String>) -> Self {
        self.excellent_message = message.into();
        self
    }

    /// Citation attached to out-of-band results
    #[inline]
    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    fn out_of_band(
        &self,
        field: &str,
        level: ValidationLevel,
        message: &str,
        value: f64,
    ) -> ValidationResult {
        let result = ValidationResult::new(field, level, message)
            .with_current_value(value)
            .with_expected_range(format!("{}-{}", self.low, self.high));
        match &self.reference {
            Some(reference) => result.with_reference(reference.clone()),
            None => result,
        }
    }
}

impl FieldCheck for RatioBandCheck {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        _record: &Record,
    ) -> Option<ValidationResult> {
        if value.is_empty() {
            return None;
        }
        let Some(n) = value.as_number() else {
            return Some(not_numeric_result(field, &self.label, value));
        };

        if n < self.low {
            return Some(self.out_of_band(field, self.low_level, &self.low_message, n));
        }
        if n > self.high {
            return Some(self.out_of_band(field, self.high_level, &self.high_message, n));
        }
        match self.excellent {
            Some((low, high)) if n >= low && n <= high => Some(
                ValidationResult::info(field, self.excellent_message.clone()).with_current_value(n),
            ),
            _ => None,
        }
    }
}

/// Check that only applies when a sibling field equals `gate_value`
///
/// When the gate is open, an empty value is a softer `warning` ("recommended
/// to record") and a present value is handed to the inner check.
#[derive(Debug, Clone)]
pub struct ConditionalCheck {
    gate_field: String,
    gate_value: String,
    missing_message: String,
    inner: Arc<dyn FieldCheck>,
}

impl ConditionalCheck {
    /// Gate `inner` on `record[gate_field] == gate_value`
    #[must_use]
    pub fn when(
        gate_field: impl Into<String>,
        gate_value: impl Into<String>,
        missing_message: impl Into<String>,
        inner: impl FieldCheck + 'static,
    ) -> Self {
        Self {
            gate_field: gate_field.into(),
            gate_value: gate_value.into(),
            missing_message: missing_message.into(),
            inner: Arc::new(inner),
        }
    }

    /// Check if the gate is open for `record`
    #[inline]
    #[must_use]
    pub fn applies_to(&self, record: &Record) -> bool {
        record.value(&self.gate_field).as_str() == Some(self.gate_value.as_str())
    }
}

impl FieldCheck for ConditionalCheck {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        record: &Record,
    ) -> Option<ValidationResult> {
        if !self.applies_to(record) {
            return None;
        }
        if value.is_empty() {
            return Some(
                ValidationResult::warning(field, self.missing_message.clone()).with_suggestion(
                    format!("{} 为 {} 时请补充该字段", self.gate_field, self.gate_value),
                ),
            );
        }
        self.inner.evaluate(field, value, record)
    }
}

/// One row of an [`EnumStatusCheck`] table
#[derive(Debug, Clone)]
struct StatusEntry {
    code: String,
    outcome: Option<(ValidationLevel, String)>,
}

/// Maps specific status codes to specific severities
///
/// Tables are per field and never shared: the same code can mean different
/// things on different fields.
#[derive(Debug, Clone)]
pub struct EnumStatusCheck {
    label: String,
    required: bool,
    entries: Vec<StatusEntry>,
}

impl EnumStatusCheck {
    /// Create optional check with an empty table
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            required: false,
            entries: Vec::new(),
        }
    }

    /// Report empty values as missing
    #[inline]
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Code that raises no finding
    #[must_use]
    pub fn accept(mut self, code: impl Into<String>) -> Self {
        self.entries.push(StatusEntry {
            code: code.into(),
            outcome: None,
        });
        self
    }

    /// Code that raises a finding at `level`
    #[must_use]
    pub fn map(
        mut self,
        code: impl Into<String>,
        level: ValidationLevel,
        message: impl Into<String>,
    ) -> Self {
        self.entries.push(StatusEntry {
            code: code.into(),
            outcome: Some((level, message.into())),
        });
        self
    }

    /// Known codes, in table order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }
}

impl FieldCheck for EnumStatusCheck {
    fn evaluate(
        &self,
        field: &str,
        value: &FieldValue,
        _record: &Record,
    ) -> Option<ValidationResult> {
        if value.is_empty() {
            return self
                .required
                .then(|| required_result(field, &self.label));
        }

        let code = value.to_string();
        match self.entries.iter().find(|e| e.code == code) {
            Some(StatusEntry { outcome: None, .. }) => None,
            Some(StatusEntry {
                outcome: Some((level, message)),
                ..
            }) => Some(
                ValidationResult::new(field, *level, message.clone())
                    .with_current_value(value.clone()),
            ),
            None => Some(
                ValidationResult::new(
                    field,
                    ValidationLevel::Warning,
                    format!("{}取值无效", self.label),
                )
                .with_current_value(value.clone())
                .with_expected_range(self.codes().collect::<Vec<_>>().join(" / ")),
            ),
        }
    }

    fn is_required(&self) -> bool {
        self.required
    }
}
