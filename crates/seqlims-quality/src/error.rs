//! Error types for the quality engine
//!
//! Validation itself never fails; these cover the edges:
//! - Scoring configuration loading
//! - Record parsing (via [`ModelError`])
//! - Report export

use seqlims_model::ModelError;

/// Main quality engine error type
#[derive(Debug, thiserror::Error)]
pub enum QualityError {
    /// Configuration text could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration parsed but is not usable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Record or experiment type could not be built
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Report could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QualityError {
    /// Check if the error comes from caller-supplied configuration
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::InvalidConfig(_))
    }
}
