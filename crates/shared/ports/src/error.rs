use catalyst_core::{Price, Timestamp};
use thiserror::Error;

/// Precondition violations raised by the analyzers
///
/// Validation is all-or-nothing: a run that fails returns no partial output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(
        "{series} not ordered by timestamp at index {index}: {current} precedes {previous}"
    )]
    UnorderedInput {
        series: &'static str,
        index: usize,
        previous: Timestamp,
        current: Timestamp,
    },

    #[error("Insufficient data: {required} price points required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid price at index {index}: {value} (must be positive)")]
    InvalidPrice { index: usize, value: Price },

    #[error("Duplicate event id: {0}")]
    DuplicateEventId(String),

    #[error("Missing config key: {0}")]
    MissingConfig(String),

    #[error("Invalid config value for {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}

impl AnalysisError {
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
