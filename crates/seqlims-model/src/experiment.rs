//! Experiment stages a validator can be built for

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lab workflow stage whose records are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperimentType {
    /// DNA/RNA extraction from a raw sample
    NucleicExtraction,
    /// PCR amplification of the extracted template
    PcrAmplification,
    /// Sequencing library construction
    LibraryConstruction,
}

impl ExperimentType {
    /// Every supported experiment type, in workflow order
    pub const ALL: [ExperimentType; 3] = [
        ExperimentType::NucleicExtraction,
        ExperimentType::PcrAmplification,
        ExperimentType::LibraryConstruction,
    ];

    /// Stable machine name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentType::NucleicExtraction => "nucleic_extraction",
            ExperimentType::PcrAmplification => "pcr_amplification",
            ExperimentType::LibraryConstruction => "library_construction",
        }
    }

    /// Display label used in lab reports
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ExperimentType::NucleicExtraction => "核酸提取",
            ExperimentType::PcrAmplification => "PCR扩增",
            ExperimentType::LibraryConstruction => "文库构建",
        }
    }
}

impl fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperimentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperimentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownExperimentType(s.to_string()))
    }
}
