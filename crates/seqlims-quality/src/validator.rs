//! Data validator engine
//!
//! A [`DataValidator`] is built once per experiment type and holds only the
//! rule set, standards table and scoring configuration chosen at construction.
//! No call mutates it or its inputs, so a shared instance can serve many
//! callers at once.

use crate::config::ScoringConfig;
use crate::error::QualityError;
use crate::report::{self, QualityReport};
use crate::scoring;
use indexmap::IndexMap;
use seqlims_model::{
    ExperimentType, QualityScore, QualityStandard, Record, ValidationLevel, ValidationResult,
};
use seqlims_rules::{find_standard, rules_for, standards_for, ValidationRule};
use serde::Serialize;

/// Validation, scoring and reporting for one experiment type
#[derive(Debug, Clone)]
pub struct DataValidator {
    experiment_type: ExperimentType,
    rules: Vec<ValidationRule>,
    standards: &'static [QualityStandard],
    config: ScoringConfig,
}

impl DataValidator {
    /// Create validator with the default scoring policy
    #[must_use]
    pub fn new(experiment_type: ExperimentType) -> Self {
        Self::build(experiment_type, ScoringConfig::default())
    }

    /// Create validator with a custom scoring policy
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidConfig`] when `config` does not pass
    /// [`ScoringConfig::validate`].
    pub fn with_config(
        experiment_type: ExperimentType,
        config: ScoringConfig,
    ) -> Result<Self, QualityError> {
        config.validate()?;
        Ok(Self::build(experiment_type, config))
    }

    fn build(experiment_type: ExperimentType, config: ScoringConfig) -> Self {
        let rules = rules_for(experiment_type);
        let standards = standards_for(experiment_type);
        tracing::debug!(
            experiment = %experiment_type,
            rules = rules.len(),
            standards = standards.len(),
            "created data validator"
        );
        Self {
            experiment_type,
            rules,
            standards,
            config,
        }
    }

    /// Experiment type the tables were chosen for
    #[inline]
    #[must_use]
    pub fn experiment_type(&self) -> ExperimentType {
        self.experiment_type
    }

    /// Rule set, in evaluation order
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Standards table
    #[inline]
    #[must_use]
    pub fn standards(&self) -> &'static [QualityStandard] {
        self.standards
    }

    /// Scoring configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Fields of required rules, in rule order
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|r| r.is_required())
            .map(ValidationRule::field)
    }

    /// Required fields with no value in `record`
    #[must_use]
    pub fn missing_fields<'a>(&'a self, record: &Record) -> Vec<&'a str> {
        self.required_fields()
            .filter(|field| !record.has_value(field))
            .collect()
    }

    /// Run every rule against `record`
    ///
    /// All rules always run; results keep rule order and are not deduplicated.
    #[must_use]
    pub fn validate_record(&self, record: &Record) -> Vec<ValidationResult> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(record))
            .collect()
    }

    /// Validate a batch, keyed by [`Record::resolve_id`]
    ///
    /// Records resolving to the same id overwrite each other: the later
    /// record's results win and the key keeps its first position. Callers that
    /// need one entry per record must ensure ids are unique.
    #[must_use]
    pub fn validate_records(&self, records: &[Record]) -> IndexMap<String, Vec<ValidationResult>> {
        let validated = report::map_records(records, |record| {
            (record.resolve_id(), self.validate_record(record))
        });

        let mut by_id = IndexMap::with_capacity(validated.len());
        for (id, results) in validated {
            if by_id.contains_key(&id) {
                tracing::warn!(
                    record_id = %id,
                    "duplicate record id, later results replace earlier ones"
                );
            }
            by_id.insert(id, results);
        }
        by_id
    }

    /// Score one record
    #[must_use]
    pub fn calculate_quality_score(&self, record: &Record) -> QualityScore {
        let results = self.validate_record(record);
        self.score_with_results(record, &results)
    }

    /// Score a record whose findings were already computed
    pub(crate) fn score_with_results(
        &self,
        record: &Record,
        results: &[ValidationResult],
    ) -> QualityScore {
        let missing = self.missing_fields(record);
        let score = scoring::score_results(results, &missing, &self.config);
        tracing::debug!(
            record_id = %record.resolve_id(),
            findings = results.len(),
            missing = missing.len(),
            total = score.total_score,
            grade = %score.grade,
            "scored record"
        );
        score
    }

    /// Look up the standard for `parameter` (first match)
    #[inline]
    #[must_use]
    pub fn get_quality_standard(&self, parameter: &str) -> Option<&'static QualityStandard> {
        find_standard(self.standards, parameter)
    }

    /// Check a bare value against the standard for `parameter`
    ///
    /// Evaluated in order:
    /// 1. no standard: valid, `info` (fail open)
    /// 2. not a number: invalid, `error`
    /// 3. inside the optimal range: valid, `info`
    /// 4. above max: invalid, `error`
    /// 5. below min: invalid, `warning`
    /// 6. otherwise: valid, `info`
    #[must_use]
    pub fn check_value_against_standard(&self, parameter: &str, value: f64) -> StandardCheck {
        let Some(standard) = self.get_quality_standard(parameter) else {
            return StandardCheck {
                is_valid: true,
                level: ValidationLevel::Info,
                message: format!("未找到参数 {parameter} 的质量标准"),
                standard: None,
            };
        };

        let name = standard.name;
        let (is_valid, level, message) = if value.is_nan() {
            (false, ValidationLevel::Error, format!("{name}不是有效数值"))
        } else if standard.in_optimal_range(value) {
            (true, ValidationLevel::Info, format!("{name}在理想范围内"))
        } else if standard.exceeds_max(value) {
            let max = standard.max_value.unwrap_or(value);
            (
                false,
                ValidationLevel::Error,
                format!("{name}超过最大值 {}", standard.with_unit(max)),
            )
        } else if standard.below_min(value) {
            let min = standard.min_value.unwrap_or(value);
            (
                false,
                ValidationLevel::Warning,
                format!("{name}低于最小值 {}", standard.with_unit(min)),
            )
        } else {
            (true, ValidationLevel::Info, format!("{name}在可接受范围内"))
        };

        StandardCheck {
            is_valid,
            level,
            message,
            standard: Some(*standard),
        }
    }

    /// Score every record and summarise the batch
    #[must_use]
    pub fn generate_quality_report(&self, records: &[Record]) -> QualityReport {
        report::generate(self, records)
    }
}

/// Outcome of [`DataValidator::check_value_against_standard`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardCheck {
    pub is_valid: bool,
    pub level: ValidationLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<QualityStandard>,
}
