//! Weighted quality scoring
//!
//! Every finding subtracts a flat, level-dependent penalty from the total and
//! from exactly one category:
//! - `critical` -> reliability
//! - `error` -> accuracy
//! - `warning` -> consistency
//! - `info` -> completeness
//!
//! Missing required fields are penalised again on top of their `error`
//! findings, against the total and completeness. All five numbers are clamped
//! into `0..=MAX_SCORE` at the end.

use crate::config::ScoringConfig;
use seqlims_model::{CategoryScores, QualityScore, ValidationLevel, ValidationResult, MAX_SCORE};

/// Score a record from its findings and missing required fields
#[must_use]
pub fn score_results(
    results: &[ValidationResult],
    missing_fields: &[&str],
    config: &ScoringConfig,
) -> QualityScore {
    let mut total = MAX_SCORE;
    let mut categories = CategoryScores::full();
    let mut improvements = Vec::with_capacity(results.len() + 1);

    for result in results {
        let penalty = config.penalties.for_level(result.level);
        total -= penalty;
        match result.level {
            ValidationLevel::Critical => categories.reliability -= penalty,
            ValidationLevel::Error => categories.accuracy -= penalty,
            ValidationLevel::Warning => categories.consistency -= penalty,
            ValidationLevel::Info => categories.completeness -= penalty,
        }
        improvements.push(format!("[{}] {}", result.level, result.message));
    }

    if !missing_fields.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let count = missing_fields.len() as f64;
        let penalty = config.missing_field_penalty * count;
        total -= penalty;
        categories.completeness -= penalty;
        improvements.push(format!("缺少必填字段: {}", missing_fields.join(", ")));
    }

    let total_score = total.clamp(0.0, MAX_SCORE);
    QualityScore {
        total_score,
        max_score: MAX_SCORE,
        grade: config.grade_thresholds.grade(total_score),
        category_scores: categories.clamped(),
        improvements,
    }
}
