//! SeqLIMS rule tables
//!
//! Static quality standards and the per-experiment validation rule sets built
//! on them.
//!
//! # Core Concepts
//!
//! - [`QualityStandard`](seqlims_model::QualityStandard) tables, one per
//!   [`ExperimentType`](seqlims_model::ExperimentType): see [`standards_for`]
//! - [`FieldCheck`]: pure, total check strategy for one field
//! - [`ValidationRule`]: binds a field to a check
//! - [`rules_for`]: the ordered rule set of an experiment type
//!
//! # Example
//!
//! ```rust
//! use seqlims_model::{ExperimentType, Record};
//! use seqlims_rules::rules_for;
//!
//! let record = Record::new().with("sampleCode", "DNA001");
//! let findings: Vec<_> = rules_for(ExperimentType::NucleicExtraction)
//!     .iter()
//!     .filter_map(|rule| rule.evaluate(&record))
//!     .collect();
//!
//! // dnaConcentration and dnaVolume are required
//! assert_eq!(findings.len(), 2);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod check;
mod rule;
mod rule_sets;
pub mod standards;

pub use check::{
    ConditionalCheck, EnumStatusCheck, FieldCheck, RatioBandCheck, RequiredCheck,
    TieredRangeCheck,
};
pub use rule::ValidationRule;
pub use rule_sets::{
    library_construction_rules, nucleic_extraction_rules, pcr_amplification_rules, rules_for,
};
pub use standards::{find_standard, standards_for};
