//! Error types for the ts-analysis crate.

use thiserror::Error;
use ts_core::{ErrorKind, SeriesError};

/// Result type alias for correlogram operations.
pub type AnalysisResult<T> = core::result::Result<T, AnalysisError>;

/// Error type for correlogram configuration and calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A series operation failed.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Returned when a configuration parameter is invalid.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl AnalysisError {
    /// Classify this error using the core taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Series(err) => err.kind(),
            Self::InvalidConfig { .. } => ErrorKind::InvalidArgument,
        }
    }
}
