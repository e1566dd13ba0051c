//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits from ts-core.
//!
//! # Example
//!
//! ```rust
//! use ts_core::prelude::*;
//!
//! let series: IntTimeSeries<u32> = SeriesBuilder::new().put(1, 10).put(2, 20).build();
//! assert_eq!(series.tail(1).get(&2), Some(&20));
//! ```

// Containers
pub use crate::builder::SeriesBuilder;
pub use crate::series::{
    DoubleTimeSeries, IntTimeSeries, LongTimeSeries, PaddedDoubleTimeSeries, PaddedIntTimeSeries,
    PaddedLongTimeSeries, PaddedTimeSeries, Series, TimeSeries,
};

// Arithmetic
pub use crate::arith::{AlignmentPolicy, BinaryOp};
pub use crate::num::SeriesNum;

// Error types
pub use crate::error::{ErrorKind, Result, SeriesError};

// Traits
pub use crate::traits::{Padded, SeriesKind, Strict};
