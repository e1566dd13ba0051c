//! Prelude module for convenient imports.

pub use crate::autocorrelation::{
    autocorrelation, generate_autocorrelations, Correlogram, CorrelogramConfig,
};
pub use crate::correlation::pearson_correlation;
pub use crate::error::{AnalysisError, AnalysisResult};
