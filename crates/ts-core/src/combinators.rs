//! Functional combinators over series entries.
//!
//! All combinators visit entries in ascending key order.

use crate::series::Series;
use crate::traits::SeriesKind;

impl<K: Ord + Clone, V, S: SeriesKind> Series<K, V, S> {
    /// Apply a function to each entry, keeping the keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ts_core::DoubleTimeSeries;
    ///
    /// let s: DoubleTimeSeries<u32> = [(1, 10.1), (2, 20.2)].into_iter().collect();
    /// let doubled = s.map(|_, v| v * 2.0);
    /// assert_eq!(doubled.get(&2), Some(&40.4));
    /// ```
    #[must_use]
    pub fn map<W, F>(&self, mut f: F) -> Series<K, W, S>
    where
        F: FnMut(&K, &V) -> W,
    {
        self.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
    }

    /// Apply a function to each value, keeping the keys.
    #[must_use]
    pub fn map_values<W, F>(&self, mut f: F) -> Series<K, W, S>
    where
        F: FnMut(&V) -> W,
    {
        self.map(|_, v| f(v))
    }

    /// Keep only the entries satisfying `predicate`.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|(k, v)| predicate(*k, *v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V, S: SeriesKind> Series<K, V, S>
where
    K: Ord,
{
    /// Left fold over the values.
    pub fn fold<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.values().fold(init, f)
    }

    /// Seeded left fold over the values; identical to [`fold`](Self::fold).
    pub fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.fold(init, f)
    }

    /// Call `f` once per entry.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }

    /// Returns `true` if any entry satisfies `predicate`. Stops at the first match.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(k, v)| predicate(k, v))
    }

    /// Returns `true` if every entry satisfies `predicate`. Stops at the first failure.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().all(|(k, v)| predicate(k, v))
    }
}
