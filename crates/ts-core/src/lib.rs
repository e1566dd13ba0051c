//! # ts-core
//!
//! Core container and algebra for the tseries time series library.
//!
//! This crate provides an immutable, key-ordered series and the operations
//! that make up its algebra:
//!
//! - [`Series`] - Ordered key to value container, with kind aliases such as
//!   [`TimeSeries`] and [`PaddedTimeSeries`]
//! - [`SeriesBuilder`] - Single-writer accumulator that freezes into a series
//! - [`SeriesKind`] - Marker trait naming a series family and its alignment
//! - [`SeriesNum`] - Arithmetic strategy for `i32`, `i64`, `f32` and `f64` values
//! - [`AlignmentPolicy`] and [`BinaryOp`] - Two-series arithmetic controls
//!
//! Range queries (`sub_series`, `head`, `tail`), combinators (`map`,
//! `filter`, `fold`), arithmetic and temporal utilities (`lag`, `intersect`,
//! `unzip`) are inherent methods on [`Series`].
//!
//! ## Feature Flags
//!
//! - `std` (default) - Enable standard library support
//! - `serde` - Derive serialization for [`AlignmentPolicy`] and [`BinaryOp`]
//!
//! ## Example
//!
//! ```rust
//! use ts_core::prelude::*;
//!
//! let a: DoubleTimeSeries<u32> = Series::of(vec![1, 2, 3], vec![10.0, 20.0, 30.0]).unwrap();
//! let b: DoubleTimeSeries<u32> = Series::of(vec![2, 3, 4], vec![1.0, 2.0, 3.0]).unwrap();
//!
//! // Canonical series add over the shared keys only.
//! let sum = &a + &b;
//! assert_eq!(sum.len(), 2);
//!
//! // Values shift one position back onto unchanged keys.
//! let lagged = a.lag(1);
//! assert_eq!(lagged.get(&1), Some(&20.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod arith;
pub mod builder;
pub mod combinators;
pub mod error;
pub mod num;
pub mod prelude;
pub mod range;
pub mod series;
pub mod temporal;
pub mod traits;

// Re-export core types at crate root
pub use arith::{AlignmentPolicy, BinaryOp};
pub use builder::SeriesBuilder;
pub use error::{ErrorKind, Result, SeriesError};
pub use num::SeriesNum;
pub use series::{
    DoubleTimeSeries, IntTimeSeries, LongTimeSeries, PaddedDoubleTimeSeries, PaddedIntTimeSeries,
    PaddedLongTimeSeries, PaddedTimeSeries, Series, TimeSeries,
};
pub use traits::{Padded, SeriesKind, Strict};
