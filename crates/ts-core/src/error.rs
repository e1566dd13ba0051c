//! Error types for series construction and algebra.
//!
//! Every failure in this crate is a programming error detected before any
//! result is produced. [`SeriesError::kind`] groups the variants into the three
//! broad categories callers usually care about.

use alloc::string::String;

use thiserror::Error;

use crate::arith::{AlignmentPolicy, BinaryOp};

/// Result type alias for series operations that may fail.
pub type Result<T> = core::result::Result<T, SeriesError>;

/// Broad classification of a [`SeriesError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A caller supplied an argument the operation cannot accept.
    InvalidArgument,
    /// An ordinal accessor was called outside `[0, len)`.
    IndexOutOfBounds,
    /// The operation has no implementation for the requested combination.
    UnsupportedOperation,
}

/// Errors that can occur while building or combining series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// Parallel key and value sequences have different lengths.
    #[error("Length mismatch: {keys} keys but {values} values")]
    LengthMismatch {
        /// Number of keys supplied.
        keys: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// Two series that must be paired entry for entry differ in length.
    #[error("Dimension mismatch: {left} entries vs {right} entries")]
    DimensionMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A divisor (scalar or element) was zero.
    #[error("Division by zero")]
    ZeroDivisor,

    /// Not enough entries for a statistical computation.
    #[error("Insufficient data: need {required} entries, got {actual}")]
    InsufficientData {
        /// Required number of entries.
        required: usize,
        /// Actual number of entries.
        actual: usize,
    },

    /// A number could not be converted into the series value type.
    #[error("Value {value} is not representable in the series value type")]
    NotRepresentable {
        /// Debug rendering of the offending number.
        value: String,
    },

    /// Ordinal index outside the series bounds.
    #[error("Index {index} out of bounds for series of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the series.
        len: usize,
    },

    /// The operation is not defined under the requested alignment policy.
    #[error("Operation {operation:?} is not supported under {policy:?} alignment")]
    Unsupported {
        /// Requested operation.
        operation: BinaryOp,
        /// Policy that rejected it.
        policy: AlignmentPolicy,
    },
}

impl SeriesError {
    /// Create a [`SeriesError::NotRepresentable`] from any debuggable value.
    #[must_use]
    pub fn not_representable(value: impl core::fmt::Debug) -> Self {
        Self::NotRepresentable {
            value: alloc::format!("{value:?}"),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. }
            | Self::DimensionMismatch { .. }
            | Self::ZeroDivisor
            | Self::InsufficientData { .. }
            | Self::NotRepresentable { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::Unsupported { .. } => ErrorKind::UnsupportedOperation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_series_error_display() {
        let err = SeriesError::LengthMismatch { keys: 3, values: 2 };
        assert_eq!(err.to_string(), "Length mismatch: 3 keys but 2 values");

        let err = SeriesError::DimensionMismatch { left: 4, right: 3 };
        assert_eq!(err.to_string(), "Dimension mismatch: 4 entries vs 3 entries");

        let err = SeriesError::IndexOutOfBounds { index: 5, len: 5 };
        assert_eq!(
            err.to_string(),
            "Index 5 out of bounds for series of length 5"
        );

        let err = SeriesError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "Insufficient data: need 2 entries, got 1");

        let err = SeriesError::Unsupported {
            operation: BinaryOp::Mul,
            policy: AlignmentPolicy::UnionWithDefault,
        };
        assert_eq!(
            err.to_string(),
            "Operation Mul is not supported under UnionWithDefault alignment"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(SeriesError::ZeroDivisor.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            SeriesError::LengthMismatch { keys: 1, values: 0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SeriesError::IndexOutOfBounds { index: 0, len: 0 }.kind(),
            ErrorKind::IndexOutOfBounds
        );
        assert_eq!(
            SeriesError::Unsupported {
                operation: BinaryOp::Div,
                policy: AlignmentPolicy::UnionWithDefault,
            }
            .kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn test_not_representable_helper() {
        let err = SeriesError::not_representable(1e20f64);
        match err {
            SeriesError::NotRepresentable { value } => assert_eq!(value, "1e20"),
            _ => panic!("Expected NotRepresentable error"),
        }
    }
}
