//! Scoring configuration
//!
//! [`ScoringConfig::default`] reproduces the standard lab scoring policy:
//! - `critical` -25, `error` -15, `warning` -8, `info` -2
//! - -10 per missing required field
//! - grades at 90 / 80 / 70 / 60
//! - top 5 recommendations per report

use crate::error::QualityError;
use seqlims_model::{Grade, ValidationLevel};
use serde::{Deserialize, Serialize};

/// Flat penalty per finding level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelPenalties {
    pub info: f64,
    pub warning: f64,
    pub error: f64,
    pub critical: f64,
}

impl LevelPenalties {
    /// Penalty applied for one finding at `level`
    #[inline]
    #[must_use]
    pub fn for_level(&self, level: ValidationLevel) -> f64 {
        match level {
            ValidationLevel::Info => self.info,
            ValidationLevel::Warning => self.warning,
            ValidationLevel::Error => self.error,
            ValidationLevel::Critical => self.critical,
        }
    }
}

impl Default for LevelPenalties {
    fn default() -> Self {
        Self {
            info: 2.0,
            warning: 8.0,
            error: 15.0,
            critical: 25.0,
        }
    }
}

/// Lowest total score for each passing grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl GradeThresholds {
    /// Grade of a clamped total score
    #[must_use]
    pub fn grade(&self, score: f64) -> Grade {
        if score >= self.a {
            Grade::A
        } else if score >= self.b {
            Grade::B
        } else if score >= self.c {
            Grade::C
        } else if score >= self.d {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            a: 90.0,
            b: 80.0,
            c: 70.0,
            d: 60.0,
        }
    }
}

/// Scoring and reporting configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Penalty per finding level
    pub penalties: LevelPenalties,
    /// Extra penalty per missing required field
    pub missing_field_penalty: f64,
    /// Grade boundaries
    pub grade_thresholds: GradeThresholds,
    /// Number of recommendations in a report
    pub recommendation_limit: usize,
}

impl ScoringConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With level penalties
    #[inline]
    #[must_use]
    pub fn with_penalties(mut self, penalties: LevelPenalties) -> Self {
        self.penalties = penalties;
        self
    }

    /// With missing-field penalty
    #[inline]
    #[must_use]
    pub fn with_missing_field_penalty(mut self, penalty: f64) -> Self {
        self.missing_field_penalty = penalty;
        self
    }

    /// With grade thresholds
    #[inline]
    #[must_use]
    pub fn with_grade_thresholds(mut self, thresholds: GradeThresholds) -> Self {
        self.grade_thresholds = thresholds;
        self
    }

    /// With recommendation limit
    #[inline]
    #[must_use]
    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Load overrides from TOML; unspecified keys keep their defaults
    ///
    /// ```toml
    /// missing_field_penalty = 5
    ///
    /// [penalties]
    /// warning = 10
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the text is not valid TOML for this shape, or when the
    /// result does not pass [`ScoringConfig::validate`].
    pub fn from_toml_str(s: &str) -> Result<Self, QualityError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that penalties are non-negative and grades descend
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidConfig`] naming the first bad penalty or
    /// the out-of-order thresholds.
    pub fn validate(&self) -> Result<(), QualityError> {
        let p = &self.penalties;
        let penalties = [
            ("info", p.info),
            ("warning", p.warning),
            ("error", p.error),
            ("critical", p.critical),
            ("missing_field_penalty", self.missing_field_penalty),
        ];
        let bad_penalty = penalties.iter().find(|(_, v)| v.is_nan() || *v < 0.0);
        if let Some((name, value)) = bad_penalty {
            return Err(QualityError::InvalidConfig(format!(
                "penalty '{name}' must be a non-negative number, got {value}"
            )));
        }

        let g = &self.grade_thresholds;
        if !(g.a >= g.b && g.b >= g.c && g.c >= g.d) {
            return Err(QualityError::InvalidConfig(format!(
                "grade thresholds must descend (a >= b >= c >= d), got {}/{}/{}/{}",
                g.a, g.b, g.c, g.d
            )));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            penalties: LevelPenalties::default(),
            missing_field_penalty: 10.0,
            grade_thresholds: GradeThresholds::default(),
            recommendation_limit: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_grades() {
        let g = GradeThresholds::default();
        assert_eq!(g.grade(100.0), Grade::A);
        assert_eq!(g.grade(90.0), Grade::A);
        assert_eq!(g.grade(89.9), Grade::B);
        assert_eq!(g.grade(84.0), Grade::B);
        assert_eq!(g.grade(70.0), Grade::C);
        assert_eq!(g.grade(60.0), Grade::D);
        assert_eq!(g.grade(25.0), Grade::F);
        assert_eq!(g.grade(0.0), Grade::F);
    }

    #[test]
    fn default_penalties() {
        let p = LevelPenalties::default();
        assert_eq!(p.for_level(ValidationLevel::Critical), 25.0);
        assert_eq!(p.for_level(ValidationLevel::Error), 15.0);
        assert_eq!(p.for_level(ValidationLevel::Warning), 8.0);
        assert_eq!(p.for_level(ValidationLevel::Info), 2.0);
    }

    #[test]
    fn toml_overrides_keep_defaults() {
        let config = ScoringConfig::from_toml_str(
            r#"
            missing_field_penalty = 5.0

            [penalties]
            warning = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.missing_field_penalty, 5.0);
        assert_eq!(config.penalties.warning, 10.0);
        assert_eq!(config.penalties.error, 15.0);
        assert_eq!(config.recommendation_limit, 5);
        assert_eq!(config.grade_thresholds, GradeThresholds::default());
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ScoringConfig::from_toml_str("").unwrap(), ScoringConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = ScoringConfig::from_toml_str("penalties = [").unwrap_err();
        assert!(matches!(err, QualityError::Config(_)));
    }

    #[test]
    fn rejects_negative_penalty() {
        let err = ScoringConfig::from_toml_str("[penalties]\ninfo = -1.0").unwrap_err();
        assert!(matches!(err, QualityError::InvalidConfig(msg) if msg.contains("info")));
    }

    #[test]
    fn rejects_unordered_grades() {
        let config = ScoringConfig::new().with_grade_thresholds(GradeThresholds {
            a: 50.0,
            b: 80.0,
            c: 70.0,
            d: 60.0,
        });
        assert!(config.validate().is_err());
    }
}
