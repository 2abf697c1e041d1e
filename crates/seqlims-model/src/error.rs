//! Error types for the data model

/// Errors raised while building model values from external input
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Experiment type name not recognised
    #[error("unknown experiment type: {0}")]
    UnknownExperimentType(String),

    /// Input parsed as JSON but is not a record
    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    /// Malformed JSON input
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
