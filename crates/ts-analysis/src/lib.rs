//! # ts-analysis
//!
//! Statistics over ts-core series.
//!
//! - [`pearson_correlation`] - Pearson product-moment correlation of two series
//! - [`autocorrelation`] and [`generate_autocorrelations`] - Correlation of a
//!   series with positionally lagged copies of itself
//! - [`Correlogram`] - Configured autocorrelation sweep over a range of lags
//!
//! Moments come from [`statrs`]; this crate only aligns and feeds the values.
//!
//! # Example
//!
//! ```
//! use ts_analysis::prelude::*;
//! use ts_core::DoubleTimeSeries;
//!
//! let ts: DoubleTimeSeries<u32> = (0..12).map(|i| (i, f64::from(i % 4))).collect();
//!
//! let pairs = generate_autocorrelations(&ts, 4).unwrap();
//! assert_eq!(pairs.len(), 5);
//! assert!((pairs[0].1 - 1.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod autocorrelation;
pub mod correlation;
pub mod error;

pub mod prelude;

pub use prelude::*;
