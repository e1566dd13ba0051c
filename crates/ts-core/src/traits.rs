//! Core trait definitions for series kinds.
//!
//! A series kind is a zero-sized marker carried as a type parameter. It gives
//! every series a name (used by `Display` and by equality) and the default
//! alignment policy for two-series `+` and `-`.

use crate::arith::AlignmentPolicy;

/// Marker trait for the concrete family a series belongs to.
///
/// Two series with identical entries but different kinds compare unequal: the
/// kind name is part of a series' identity.
///
/// # Example Implementation
///
/// ```rust
/// use ts_core::{AlignmentPolicy, Series, SeriesKind};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// struct Audit;
///
/// impl SeriesKind for Audit {
///     const NAME: &'static str = "AuditSeries";
///     const ALIGNMENT: AlignmentPolicy = AlignmentPolicy::Intersection;
/// }
///
/// let s: Series<u32, f64, Audit> = Series::of(vec![1], vec![0.5]).unwrap();
/// assert_eq!(s.to_string(), "AuditSeries[(1, 0.5)]");
/// ```
pub trait SeriesKind: Copy + Default + core::fmt::Debug + Send + Sync + 'static {
    /// Name rendered by `Display` and compared by equality.
    const NAME: &'static str;

    /// Alignment used by the kind's two-series `+` and `-`.
    const ALIGNMENT: AlignmentPolicy;
}

/// The canonical series family.
///
/// Two-series arithmetic keeps only keys present in both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Strict;

impl SeriesKind for Strict {
    const NAME: &'static str = "TimeSeries";
    const ALIGNMENT: AlignmentPolicy = AlignmentPolicy::Intersection;
}

/// The zero-padded series family.
///
/// Two-series `+` and `-` keep the union of both key sets, treating a key
/// missing on one side as zero. Multiplication and division between two
/// padded series are not defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padded;

impl SeriesKind for Padded {
    const NAME: &'static str = "PaddedTimeSeries";
    const ALIGNMENT: AlignmentPolicy = AlignmentPolicy::UnionWithDefault;
}
