//! Scalar and two-series arithmetic.
//!
//! Scalar operations touch every value and keep the key set. Two-series
//! operations first reconcile the key sets under an [`AlignmentPolicy`]:
//!
//! | Policy | Result keys | Missing side | Operations |
//! |---|---|---|---|
//! | [`Intersection`](AlignmentPolicy::Intersection) | keys in both | n/a | `+ - * /` |
//! | [`UnionWithDefault`](AlignmentPolicy::UnionWithDefault) | keys in either | zero | `+ -` |
//!
//! [`Strict`](crate::Strict) series default to intersection and
//! [`Padded`](crate::Padded) series default to union-with-default; any series
//! can still request either policy through [`Series::combine`].

use alloc::collections::BTreeMap;

use core::convert::Infallible;
use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::ToPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};
use crate::num::SeriesNum;
use crate::series::Series;
use crate::traits::SeriesKind;

/// Rule for reconciling two key sets before an elementwise operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlignmentPolicy {
    /// Keep only keys present in both operands.
    #[default]
    Intersection,
    /// Keep keys present in either operand; a missing term counts as zero.
    /// Only defined for addition and subtraction.
    UnionWithDefault,
}

impl AlignmentPolicy {
    /// Returns `true` if `op` is defined under this policy.
    #[must_use]
    pub fn supports(self, op: BinaryOp) -> bool {
        match self {
            Self::Intersection => true,
            Self::UnionWithDefault => matches!(op, BinaryOp::Add | BinaryOp::Sub),
        }
    }
}

/// Elementwise arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division; a zero divisor is an error.
    Div,
}

impl BinaryOp {
    /// Apply the operation to two values.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::ZeroDivisor`] when dividing by zero.
    pub fn apply<V: SeriesNum>(self, lhs: V, rhs: V) -> Result<V> {
        match self {
            Self::Add => Ok(lhs.add(rhs)),
            Self::Sub => Ok(lhs.sub(rhs)),
            Self::Mul => Ok(lhs.mul(rhs)),
            Self::Div => lhs.checked_div(rhs).ok_or(SeriesError::ZeroDivisor),
        }
    }
}

fn convert<V: SeriesNum, N: ToPrimitive + Debug + Copy>(value: N) -> Result<V> {
    V::from_number(value).ok_or_else(|| SeriesError::not_representable(value))
}

impl<K: Ord + Clone, V, S: SeriesKind> Series<K, V, S> {
    /// Walk two series under `policy`, producing one output per aligned key.
    ///
    /// `f` receives the value from each side; under union alignment exactly
    /// one side may be `None`.
    fn zip_aligned<W, S2, T, E, F>(
        &self,
        other: &Series<K, W, S2>,
        policy: AlignmentPolicy,
        mut f: F,
    ) -> core::result::Result<BTreeMap<K, T>, E>
    where
        S2: SeriesKind,
        F: FnMut(Option<&V>, Option<&W>) -> core::result::Result<T, E>,
    {
        let mut out = BTreeMap::new();
        match policy {
            AlignmentPolicy::Intersection => {
                for (key, lhs) in self.iter() {
                    if let Some(rhs) = other.get(key) {
                        out.insert(key.clone(), f(Some(lhs), Some(rhs))?);
                    }
                }
            }
            AlignmentPolicy::UnionWithDefault => {
                for (key, lhs) in self.iter() {
                    out.insert(key.clone(), f(Some(lhs), other.get(key))?);
                }
                for (key, rhs) in other.iter() {
                    if !self.contains(key) {
                        out.insert(key.clone(), f(None, Some(rhs))?);
                    }
                }
            }
        }
        Ok(out)
    }
}

impl<K: Ord + Clone, V: SeriesNum, S: SeriesKind> Series<K, V, S> {
    /// Combine two series elementwise under an explicit alignment policy.
    ///
    /// Values of `other` are converted into this series' value type first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ts_core::{AlignmentPolicy, BinaryOp, DoubleTimeSeries, IntTimeSeries};
    ///
    /// let a: DoubleTimeSeries<u32> = [(1, 10.0), (2, 20.0)].into_iter().collect();
    /// let b: IntTimeSeries<u32> = [(2, 15), (3, 30)].into_iter().collect();
    ///
    /// let both = a.combine(&b, BinaryOp::Add, AlignmentPolicy::Intersection).unwrap();
    /// assert_eq!(both.len(), 1);
    /// assert_eq!(both.get(&2), Some(&35.0));
    ///
    /// let either = a.combine(&b, BinaryOp::Add, AlignmentPolicy::UnionWithDefault).unwrap();
    /// assert_eq!(either.len(), 3);
    /// assert_eq!(either.get(&3), Some(&30.0));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`SeriesError::Unsupported`] for `Mul`/`Div` under union alignment.
    /// - [`SeriesError::ZeroDivisor`] if an aligned divisor is zero.
    /// - [`SeriesError::NotRepresentable`] if a value of `other` does not fit `V`.
    pub fn combine<W, S2>(
        &self,
        other: &Series<K, W, S2>,
        op: BinaryOp,
        policy: AlignmentPolicy,
    ) -> Result<Self>
    where
        W: SeriesNum,
        S2: SeriesKind,
    {
        if !policy.supports(op) {
            return Err(SeriesError::Unsupported {
                operation: op,
                policy,
            });
        }
        tracing::trace!(?op, ?policy, lhs = self.len(), rhs = other.len(), "combining series");

        let entries = self.zip_aligned(other, policy, |lhs, rhs| {
            let lhs = lhs.copied().unwrap_or(V::ZERO);
            let rhs = match rhs {
                Some(&value) => convert::<V, W>(value)?,
                None => V::ZERO,
            };
            op.apply(lhs, rhs)
        })?;
        Ok(Self::from_btree(entries))
    }

    /// `self + other` under this kind's default alignment.
    ///
    /// # Errors
    ///
    /// See [`combine`](Self::combine).
    pub fn add_series<W: SeriesNum, S2: SeriesKind>(&self, other: &Series<K, W, S2>) -> Result<Self> {
        self.combine(other, BinaryOp::Add, S::ALIGNMENT)
    }

    /// `self - other` under this kind's default alignment.
    ///
    /// # Errors
    ///
    /// See [`combine`](Self::combine).
    pub fn subtract_series<W: SeriesNum, S2: SeriesKind>(&self, other: &Series<K, W, S2>) -> Result<Self> {
        self.combine(other, BinaryOp::Sub, S::ALIGNMENT)
    }

    /// `self * other` under this kind's default alignment.
    ///
    /// # Errors
    ///
    /// Fails with [`SeriesError::Unsupported`] for padded series; see
    /// [`combine`](Self::combine) for the rest.
    pub fn multiply_series<W: SeriesNum, S2: SeriesKind>(&self, other: &Series<K, W, S2>) -> Result<Self> {
        self.combine(other, BinaryOp::Mul, S::ALIGNMENT)
    }

    /// `self / other` under this kind's default alignment.
    ///
    /// # Errors
    ///
    /// Fails with [`SeriesError::Unsupported`] for padded series; see
    /// [`combine`](Self::combine) for the rest.
    pub fn divide_series<W: SeriesNum, S2: SeriesKind>(&self, other: &Series<K, W, S2>) -> Result<Self> {
        self.combine(other, BinaryOp::Div, S::ALIGNMENT)
    }

    fn apply_scalar<N>(&self, op: BinaryOp, scalar: N) -> Result<Self>
    where
        N: ToPrimitive + Debug + Copy,
    {
        let scalar: V = convert(scalar)?;
        if op == BinaryOp::Div && scalar.is_zero() {
            return Err(SeriesError::ZeroDivisor);
        }
        self.iter()
            .map(|(key, &value)| Ok((key.clone(), op.apply(value, scalar)?)))
            .collect()
    }

    /// Add a scalar to every value.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotRepresentable`] if `scalar` does not fit `V`.
    pub fn add_scalar<N: ToPrimitive + Debug + Copy>(&self, scalar: N) -> Result<Self> {
        self.apply_scalar(BinaryOp::Add, scalar)
    }

    /// Subtract a scalar from every value.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotRepresentable`] if `scalar` does not fit `V`.
    pub fn subtract_scalar<N: ToPrimitive + Debug + Copy>(&self, scalar: N) -> Result<Self> {
        self.apply_scalar(BinaryOp::Sub, scalar)
    }

    /// Multiply every value by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotRepresentable`] if `scalar` does not fit `V`.
    pub fn multiply_scalar<N: ToPrimitive + Debug + Copy>(&self, scalar: N) -> Result<Self> {
        self.apply_scalar(BinaryOp::Mul, scalar)
    }

    /// Divide every value by a scalar.
    ///
    /// A scalar that converts to zero in `V` (e.g. `0.5` for an integer
    /// series) counts as a zero divisor.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::ZeroDivisor`] if the scalar is zero.
    /// - [`SeriesError::NotRepresentable`] if `scalar` does not fit `V`.
    pub fn divide_scalar<N: ToPrimitive + Debug + Copy>(&self, scalar: N) -> Result<Self> {
        self.apply_scalar(BinaryOp::Div, scalar)
    }

    fn zip_same_kind(&self, other: &Self, f: fn(V, V) -> V) -> Self {
        let aligned = self.zip_aligned(other, S::ALIGNMENT, |lhs, rhs| {
            Ok::<_, Infallible>(f(
                lhs.copied().unwrap_or(V::ZERO),
                rhs.copied().unwrap_or(V::ZERO),
            ))
        });
        match aligned {
            Ok(entries) => Self::from_btree(entries),
            Err(never) => match never {},
        }
    }
}

impl<K: Ord + Clone, V: SeriesNum, S: SeriesKind> Add for &Series<K, V, S> {
    type Output = Series<K, V, S>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_same_kind(rhs, <V as SeriesNum>::add)
    }
}

impl<K: Ord + Clone, V: SeriesNum, S: SeriesKind> Sub for &Series<K, V, S> {
    type Output = Series<K, V, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_same_kind(rhs, <V as SeriesNum>::sub)
    }
}

macro_rules! impl_scalar_op {
    ($($trait:ident :: $method:ident => $apply:path),* $(,)?) => {
        $(
            impl<K: Ord + Clone, V: SeriesNum, S: SeriesKind> $trait<V> for &Series<K, V, S> {
                type Output = Series<K, V, S>;

                fn $method(self, rhs: V) -> Self::Output {
                    self.map_values(|&value| $apply(value, rhs))
                }
            }

            impl<K: Ord + Clone, V: SeriesNum, S: SeriesKind> $trait<V> for Series<K, V, S> {
                type Output = Series<K, V, S>;

                fn $method(self, rhs: V) -> Self::Output {
                    (&self).$method(rhs)
                }
            }
        )*
    };
}

impl_scalar_op! {
    Add::add => SeriesNum::add,
    Sub::sub => SeriesNum::sub,
    Mul::mul => SeriesNum::mul,
}
