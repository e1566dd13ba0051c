//! Numeric value abstractions for series arithmetic.
//!
//! This module defines the [`SeriesNum`] trait, the arithmetic strategy that
//! lets one generic [`Series`](crate::Series) carry `i32`, `i64`, `f32` or
//! `f64` values without a dedicated container per primitive.

use core::fmt::Debug;

use num_traits::{NumCast, ToPrimitive};

/// Trait for numeric value types that support series arithmetic.
///
/// Implementations supply the additive identity, the four elementwise
/// operations and lossless-where-possible conversion from any other primitive
/// number. Division is checked so that integer and floating-point series share
/// one zero-divisor rule.
///
/// # Example
///
/// ```rust
/// use ts_core::SeriesNum;
///
/// fn total<T: SeriesNum>(values: &[T]) -> T {
///     values.iter().fold(T::ZERO, |acc, &v| acc.add(v))
/// }
///
/// assert_eq!(total(&[1, 2, 3]), 6);
/// assert_eq!(<i64 as SeriesNum>::from_number(2.9f64), Some(2));
/// ```
pub trait SeriesNum:
    Copy + PartialOrd + Debug + Send + Sync + NumCast + ToPrimitive + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// `self + rhs`. Integer types wrap on overflow.
    #[must_use]
    fn add(self, rhs: Self) -> Self;

    /// `self - rhs`.
    #[must_use]
    fn sub(self, rhs: Self) -> Self;

    /// `self * rhs`.
    #[must_use]
    fn mul(self, rhs: Self) -> Self;

    /// `self / rhs`, or `None` when `rhs` is zero.
    ///
    /// `MIN / -1` on an integer type wraps to `MIN`.
    #[must_use]
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Returns `true` for the additive identity.
    #[must_use]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Convert any primitive number into this type.
    ///
    /// Floating-point values truncate toward zero when the target is an
    /// integer. Returns `None` when the value is out of range.
    #[must_use]
    fn from_number<N: ToPrimitive>(value: N) -> Option<Self> {
        <Self as NumCast>::from(value)
    }

    /// Convert to `f64`, rounding if the value has no exact representation.
    #[must_use]
    fn to_f64_lossy(self) -> f64;
}

// Integer arithmetic wraps on overflow, including `MIN / -1`.
macro_rules! impl_series_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeriesNum for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0 {
                        None
                    } else {
                        Some(self.wrapping_div(rhs))
                    }
                }

                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn to_f64_lossy(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_series_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SeriesNum for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    if rhs == 0.0 {
                        None
                    } else {
                        Some(self / rhs)
                    }
                }

                #[inline]
                #[allow(clippy::cast_lossless)]
                fn to_f64_lossy(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_series_int!(i32, i64);
impl_series_float!(f32, f64);
