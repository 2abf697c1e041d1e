//! Per-experiment rule sets
//!
//! Each experiment type has its own fixed, ordered rule list. Order only
//! affects the order of results, never which results are produced.

mod library_construction;
mod nucleic_extraction;
mod pcr_amplification;

pub use library_construction::library_construction_rules;
pub use nucleic_extraction::nucleic_extraction_rules;
pub use pcr_amplification::pcr_amplification_rules;

use crate::rule::ValidationRule;
use seqlims_model::ExperimentType;

/// Rule set for an experiment type
#[must_use]
pub fn rules_for(experiment: ExperimentType) -> Vec<ValidationRule> {
    match experiment {
        ExperimentType::NucleicExtraction => nucleic_extraction_rules(),
        ExperimentType::PcrAmplification => pcr_amplification_rules(),
        ExperimentType::LibraryConstruction => library_construction_rules(),
    }
}
