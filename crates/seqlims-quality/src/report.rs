//! Batch quality reports
//!
//! A report scores every record, counts records by outcome and ranks the most
//! frequent finding messages as recommendations.

use crate::error::QualityError;
use crate::validator::DataValidator;
use indexmap::IndexMap;
use seqlims_model::{QualityScore, Record, ValidationLevel, ValidationResult};
use serde::Serialize;
use std::fmt::Write as _;

/// Batch counters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_records: usize,
    /// Records graded A or B
    pub valid_records: usize,
    /// Records with at least one `error` or `critical` finding
    pub error_records: usize,
    /// Records with at least one `warning` finding
    pub warning_records: usize,
    /// Mean total score, rounded to 2 decimals; 0 for an empty batch
    pub average_score: f64,
}

/// Score and findings of one record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuality {
    pub record_id: String,
    pub score: QualityScore,
    pub validation_results: Vec<ValidationResult>,
}

/// Quality report over a batch of records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub summary: ReportSummary,
    /// One entry per input record, in input order
    pub details: Vec<RecordQuality>,
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// Pretty-printed camelCase JSON
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::Serialization`] if the report cannot be encoded.
    pub fn to_json_pretty(&self) -> Result<String, QualityError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text summary for terminals
    #[must_use]
    pub fn generate_text(&self) -> String {
        let s = &self.summary;
        let mut out = String::new();
        let _ = writeln!(out, "质量报告");
        let _ = writeln!(out, "  记录总数: {}", s.total_records);
        let _ = writeln!(out, "  合格记录: {}", s.valid_records);
        let _ = writeln!(out, "  错误记录: {}", s.error_records);
        let _ = writeln!(out, "  警告记录: {}", s.warning_records);
        let _ = writeln!(out, "  平均得分: {:.2}", s.average_score);

        if !self.details.is_empty() {
            let _ = writeln!(out, "\n记录明细:");
            for detail in &self.details {
                let _ = writeln!(
                    out,
                    "  {} {:.1} [{}] {} 项问题",
                    detail.record_id,
                    detail.score.total_score,
                    detail.score.grade,
                    detail.validation_results.len()
                );
            }
        }

        if !self.recommendations.is_empty() {
            let _ = writeln!(out, "\n改进建议:");
            for (i, rec) in self.recommendations.iter().enumerate() {
                let _ = writeln!(out, "  {}. {rec}", i + 1);
            }
        }
        out
    }
}

/// Map records, in parallel when the `parallel` feature is on
///
/// Output order always matches input order.
pub(crate) fn map_records<T, F>(records: &[Record], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Record) -> T + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        records.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        records.iter().map(f).collect()
    }
}

pub(crate) fn generate(validator: &DataValidator, records: &[Record]) -> QualityReport {
    let details = map_records(records, |record| {
        let validation_results = validator.validate_record(record);
        let score = validator.score_with_results(record, &validation_results);
        RecordQuality {
            record_id: record.resolve_id(),
            score,
            validation_results,
        }
    });

    let summary = summarize(&details);
    let recommendations = recommendations(&details, validator.config().recommendation_limit);

    tracing::info!(
        experiment = %validator.experiment_type(),
        total = summary.total_records,
        valid = summary.valid_records,
        errors = summary.error_records,
        warnings = summary.warning_records,
        average = summary.average_score,
        "generated quality report"
    );

    QualityReport {
        summary,
        details,
        recommendations,
    }
}

fn summarize(details: &[RecordQuality]) -> ReportSummary {
    let has_level = |d: &RecordQuality, pred: fn(ValidationLevel) -> bool| {
        d.validation_results.iter().any(|r| pred(r.level))
    };

    let total_records = details.len();
    let valid_records = details.iter().filter(|d| d.score.grade.is_passing()).count();
    let error_records = details
        .iter()
        .filter(|d| has_level(d, |l| l.is_blocking()))
        .count();
    let warning_records = details
        .iter()
        .filter(|d| has_level(d, |l| l == ValidationLevel::Warning))
        .count();

    let average_score = if total_records == 0 {
        0.0
    } else {
        let sum: f64 = details.iter().map(|d| d.score.total_score).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = total_records as f64;
        round2(sum / count)
    };

    ReportSummary {
        total_records,
        valid_records,
        error_records,
        warning_records,
        average_score,
    }
}

/// Most frequent finding messages, ties in first-seen order
fn recommendations(details: &[RecordQuality], limit: usize) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for result in details.iter().flat_map(|d| &d.validation_results) {
        *counts.entry(result.message.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(message, n)| format!("{message} (影响 {n} 条记录)"))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
