//! SeqLIMS data model
//!
//! Plain value types shared by the rule tables and the quality engine.
//!
//! # Core Concepts
//!
//! - [`Record`]: untyped key/value record supplied by a caller
//! - [`FieldValue`]: tagged union of everything a record field may hold
//! - [`ValidationLevel`] / [`ValidationResult`]: one detected issue and its severity
//! - [`QualityStandard`]: acceptable envelope of one measurable parameter
//! - [`QualityScore`]: weighted 0-100 score with letter grade
//! - [`ExperimentType`]: the lab stage a validator is built for
//!
//! # Example
//!
//! ```rust
//! use seqlims_model::{FieldValue, Record};
//!
//! let record = Record::new()
//!     .with("sampleCode", "DNA001")
//!     .with("dnaConcentration", 85.0);
//!
//! assert_eq!(record.resolve_id(), "DNA001");
//! assert_eq!(record.value("dnaVolume"), &FieldValue::Absent);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod experiment;
mod record;
mod result;
mod score;
mod standard;
mod value;

pub use error::ModelError;
pub use experiment::ExperimentType;
pub use record::{records_from_json_str, Record, UNKNOWN_RECORD_ID};
pub use result::{ValidationLevel, ValidationResult};
pub use score::{CategoryScores, Grade, QualityScore, MAX_SCORE};
pub use standard::QualityStandard;
pub use value::FieldValue;
