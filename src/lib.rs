//! # tseries
//!
//! Immutable, key-ordered time series with an algebra of range queries,
//! combinators, alignment-aware arithmetic, positional lags and
//! autocorrelation analysis.
//!
//! This facade re-exports the member crates:
//!
//! - [`ts_core`] - Container, builder, kinds, arithmetic and temporal utilities
//! - [`ts_analysis`] - Pearson correlation, autocorrelation and correlograms
//!
//! ## Example
//!
//! ```rust
//! use tseries::prelude::*;
//!
//! let ts: DoubleTimeSeries<u32> = SeriesBuilder::new()
//!     .put(1, 2.1)
//!     .put(2, 2.2)
//!     .put(3, 2.3)
//!     .put(4, 2.4)
//!     .build();
//!
//! assert_eq!(ts.lag(1).to_string(), "TimeSeries[(1, 2.2), (2, 2.3), (3, 2.4)]");
//! assert!((autocorrelation(&ts, 0).unwrap() - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use ts_analysis;
pub use ts_core;

pub use ts_analysis::{
    autocorrelation, generate_autocorrelations, pearson_correlation, AnalysisError,
    AnalysisResult, Correlogram, CorrelogramConfig,
};
pub use ts_core::{
    AlignmentPolicy, BinaryOp, DoubleTimeSeries, ErrorKind, IntTimeSeries, LongTimeSeries,
    Padded, PaddedDoubleTimeSeries, PaddedIntTimeSeries, PaddedLongTimeSeries, PaddedTimeSeries,
    Result, Series, SeriesBuilder, SeriesError, SeriesKind, SeriesNum, Strict, TimeSeries,
};

/// Everything needed to build, combine and analyse series.
pub mod prelude {
    pub use ts_analysis::prelude::*;
    pub use ts_core::prelude::*;
}
