//! Time series data container.
//!
//! The [`Series`] type is an immutable mapping from totally-ordered keys
//! (typically calendar dates) to values, held in ascending key order. Every
//! transformation returns a fresh series; nothing mutates a built one.

use alloc::collections::{btree_map, BTreeMap};
use alloc::vec::Vec;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

use crate::builder::SeriesBuilder;
use crate::error::{Result, SeriesError};
use crate::traits::{Padded, SeriesKind, Strict};

/// An immutable, ascending-ordered key to value mapping.
///
/// `Series<K, V, S>` is the fundamental data structure of this crate. Keys are
/// unique and iterate in ascending order; position `i` refers to the `i`-th
/// smallest key. The kind parameter `S` names the series family and selects
/// the alignment policy for two-series `+` and `-` (see [`SeriesKind`]).
///
/// # Example
///
/// ```rust
/// use ts_core::TimeSeries;
///
/// let series: TimeSeries<u32, f64> = TimeSeries::of(vec![3, 1, 2], vec![30.0, 10.0, 20.0]).unwrap();
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.get(&2), Some(&20.0));
/// assert_eq!(series.key_at(0), Ok(&1));
/// assert_eq!(series.to_string(), "TimeSeries[(1, 10.0), (2, 20.0), (3, 30.0)]");
/// ```
#[derive(Clone, Debug)]
pub struct Series<K, V, S = Strict> {
    entries: BTreeMap<K, V>,
    kind: PhantomData<S>,
}

/// Series of the canonical family (intersection alignment).
pub type TimeSeries<K, V> = Series<K, V, Strict>;
/// Series of the zero-padded family (union-with-default alignment).
pub type PaddedTimeSeries<K, V> = Series<K, V, Padded>;

/// `i32` series of the canonical family.
pub type IntTimeSeries<K> = TimeSeries<K, i32>;
/// `i64` series of the canonical family.
pub type LongTimeSeries<K> = TimeSeries<K, i64>;
/// `f64` series of the canonical family.
pub type DoubleTimeSeries<K> = TimeSeries<K, f64>;
/// `i32` series of the zero-padded family.
pub type PaddedIntTimeSeries<K> = PaddedTimeSeries<K, i32>;
/// `i64` series of the zero-padded family.
pub type PaddedLongTimeSeries<K> = PaddedTimeSeries<K, i64>;
/// `f64` series of the zero-padded family.
pub type PaddedDoubleTimeSeries<K> = PaddedTimeSeries<K, f64>;

impl<K: Ord, V, S: SeriesKind> Default for Series<K, V, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: Ord, V, S: SeriesKind> Series<K, V, S> {
    /// Create an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_btree(BTreeMap::new())
    }

    /// Create a series from any collection of key/value pairs.
    ///
    /// Accepts ordered or unordered maps as well as plain pair iterators. When
    /// a key repeats, the last occurrence wins.
    #[must_use]
    pub fn from_map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_btree(entries.into_iter().collect())
    }

    /// Create a series from parallel key and value vectors.
    ///
    /// When a key repeats, the last occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the vectors differ in length.
    pub fn of(keys: Vec<K>, values: Vec<V>) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self::from_map(keys.into_iter().zip(values)))
    }

    /// Start a [`SeriesBuilder`] for this series type.
    #[must_use]
    pub fn builder() -> SeriesBuilder<K, V, S> {
        SeriesBuilder::new()
    }

    pub(crate) fn from_btree(entries: BTreeMap<K, V>) -> Self {
        Self {
            entries,
            kind: PhantomData,
        }
    }

    /// Name of this series' kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        S::NAME
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the series contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Get the value stored under `key`, or `default` when absent.
    #[must_use]
    pub fn get_or_default(&self, key: &K, default: V) -> V
    where
        V: Clone,
    {
        self.entries.get(key).cloned().unwrap_or(default)
    }

    /// Get the key at ordinal position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::IndexOutOfBounds`] if `index >= len()`.
    pub fn key_at(&self, index: usize) -> Result<&K> {
        self.entries
            .keys()
            .nth(index)
            .ok_or(SeriesError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Get the value at ordinal position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::IndexOutOfBounds`] if `index >= len()`.
    pub fn value_at(&self, index: usize) -> Result<&V> {
        self.entries
            .values()
            .nth(index)
            .ok_or(SeriesError::IndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Get the smallest key, if any.
    #[must_use]
    pub fn first_key(&self) -> Option<&K> {
        self.entries.keys().next()
    }

    /// Get the largest key, if any.
    #[must_use]
    pub fn last_key(&self) -> Option<&K> {
        self.entries.keys().next_back()
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> btree_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns the underlying ordered map.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<K, V> {
        &self.entries
    }

    /// Consumes the series and returns the underlying ordered map.
    #[must_use]
    pub fn into_entries(self) -> BTreeMap<K, V> {
        self.entries
    }

    /// Re-tag the entries as a series of another kind.
    #[must_use]
    pub fn into_kind<S2: SeriesKind>(self) -> Series<K, V, S2> {
        Series::from_btree(self.entries)
    }
}

impl<K, V, S, S2> PartialEq<Series<K, V, S2>> for Series<K, V, S>
where
    K: PartialEq,
    V: PartialEq,
    S: SeriesKind,
    S2: SeriesKind,
{
    fn eq(&self, other: &Series<K, V, S2>) -> bool {
        S::NAME == S2::NAME && self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, S: SeriesKind> Eq for Series<K, V, S> {}

// Values are left out so float series hash too; equal series still hash equal.
impl<K: Hash, V, S: SeriesKind> Hash for Series<K, V, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        S::NAME.hash(state);
        self.entries.len().hash(state);
        for key in self.entries.keys() {
            key.hash(state);
        }
    }
}

/// Renders as `Kind[(key, value), ...]`.
///
/// Values use their `Debug` form so floats keep a decimal point (`13.0`).
/// String values are therefore quoted: `TimeSeries[(1, "a")]`. The prefix
/// names the kind only; the value type is not part of the string form.
impl<K, V, S> fmt::Display for Series<K, V, S>
where
    K: fmt::Display,
    V: fmt::Debug,
    S: SeriesKind,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", S::NAME)?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({key}, {value:?})")?;
        }
        f.write_str("]")
    }
}

impl<K: Ord, V, S: SeriesKind> FromIterator<(K, V)> for Series<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter)
    }
}

impl<K: Ord, V, S: SeriesKind> From<BTreeMap<K, V>> for Series<K, V, S> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::from_btree(entries)
    }
}

impl<K, V, S> IntoIterator for Series<K, V, S> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a Series<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
