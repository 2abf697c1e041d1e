//! Quality score types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of every score
pub const MAX_SCORE: f64 = 100.0;

/// Letter grade derived from a total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// A and B count as valid records in reports
    #[inline]
    #[must_use]
    pub fn is_passing(&self) -> bool {
        matches!(self, Grade::A | Grade::B)
    }

    /// Single-letter form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category breakdown, each in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Reduced by `info` findings and missing required fields
    pub completeness: f64,
    /// Reduced by `error` findings
    pub accuracy: f64,
    /// Reduced by `warning` findings
    pub consistency: f64,
    /// Reduced by `critical` findings
    pub reliability: f64,
}

impl CategoryScores {
    /// All categories at [`MAX_SCORE`]
    #[inline]
    #[must_use]
    pub fn full() -> Self {
        Self {
            completeness: MAX_SCORE,
            accuracy: MAX_SCORE,
            consistency: MAX_SCORE,
            reliability: MAX_SCORE,
        }
    }

    /// Clamp every category into `0..=MAX_SCORE`
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            completeness: self.completeness.clamp(0.0, MAX_SCORE),
            accuracy: self.accuracy.clamp(0.0, MAX_SCORE),
            consistency: self.consistency.clamp(0.0, MAX_SCORE),
            reliability: self.reliability.clamp(0.0, MAX_SCORE),
        }
    }
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::full()
    }
}

/// Score of one record, recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Overall score in `[0, 100]`
    pub total_score: f64,
    /// Always [`MAX_SCORE`]
    pub max_score: f64,
    /// Letter grade of `total_score`
    pub grade: Grade,
    /// Per-category breakdown
    pub category_scores: CategoryScores,
    /// One line per finding plus a missing-fields summary
    pub improvements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_grades() {
        assert!(Grade::A.is_passing());
        assert!(Grade::B.is_passing());
        assert!(!Grade::C.is_passing());
        assert!(!Grade::F.is_passing());
    }

    #[test]
    fn clamped_categories() {
        let scores = CategoryScores {
            completeness: -20.0,
            accuracy: 55.0,
            consistency: 160.0,
            reliability: -0.5,
        }
        .clamped();

        assert_eq!(scores.completeness, 0.0);
        assert_eq!(scores.accuracy, 55.0);
        assert_eq!(scores.consistency, MAX_SCORE);
        assert_eq!(scores.reliability, 0.0);
    }

    #[test]
    fn score_serializes_camel_case() {
        let score = QualityScore {
            total_score: 84.0,
            max_score: MAX_SCORE,
            grade: Grade::B,
            category_scores: CategoryScores::full(),
            improvements: vec![],
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["totalScore"], 84.0);
        assert_eq!(json["grade"], "B");
        assert_eq!(json["categoryScores"]["completeness"], 100.0);
    }
}
