//! SeqLIMS quality engine
//!
//! Validates experiment records against their rule set, scores them and
//! summarises batches into quality reports.
//!
//! # Core Concepts
//!
//! - [`DataValidator`]: engine for one experiment type, built by [`create_validator`]
//! - [`ScoringConfig`]: penalties, grade thresholds and report limits
//! - [`QualityReport`]: batch summary, per-record details and top recommendations
//! - [`quick_validate`]: ad-hoc check of one value against inline [`QuickRules`]
//!
//! The engine never fails and never blocks: it only classifies. Deciding what
//! to do with `error` and `critical` findings is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use seqlims_model::{ExperimentType, Grade, Record};
//! use seqlims_quality::create_validator;
//!
//! let validator = create_validator(ExperimentType::PcrAmplification);
//! let record = Record::new()
//!     .with("sampleCode", "PCR001")
//!     .with("pcrProduct", 2)
//!     .with("amplificationSuccess", "success");
//!
//! // low product and no band size recorded
//! assert_eq!(validator.validate_record(&record).len(), 2);
//!
//! let score = validator.calculate_quality_score(&record);
//! assert_eq!(score.total_score, 84.0);
//! assert_eq!(score.grade, Grade::B);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
mod error;
pub mod quick;
mod report;
mod scoring;
mod validator;

pub use config::{GradeThresholds, LevelPenalties, ScoringConfig};
pub use error::QualityError;
pub use quick::{quick_validate, QuickRules, ValueType};
pub use report::{QualityReport, RecordQuality, ReportSummary};
pub use scoring::score_results;
pub use validator::{DataValidator, StandardCheck};

use seqlims_model::ExperimentType;

/// Create a validator for `experiment_type` with default scoring
#[inline]
#[must_use]
pub fn create_validator(experiment_type: ExperimentType) -> DataValidator {
    DataValidator::new(experiment_type)
}

/// Common imports for engine callers
pub mod prelude {
    pub use crate::{
        create_validator, quick_validate, DataValidator, QualityError, QualityReport, QuickRules,
        ScoringConfig, StandardCheck,
    };
    pub use seqlims_model::{
        ExperimentType, FieldValue, Grade, QualityScore, QualityStandard, Record, ValidationLevel,
        ValidationResult,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
