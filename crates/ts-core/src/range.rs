//! Interval and positional range queries.
//!
//! Every query returns a new series of the same kind. Windows that select
//! nothing (including inverted windows) produce an empty series.

use core::ops::Bound;

use crate::series::Series;
use crate::traits::SeriesKind;

impl<K: Ord + Clone, V: Clone, S: SeriesKind> Series<K, V, S> {
    /// Entries with `start <= key < end`.
    #[must_use]
    pub fn sub_series(&self, start: &K, end: &K) -> Self {
        self.sub_series_with(start, true, end, false)
    }

    /// Entries between `start` and `end` with independent endpoint inclusion.
    ///
    /// A key passes the start test when `key >= start` (`include_start`) or
    /// `key > start`, and the end test when `key <= end` (`include_end`) or
    /// `key < end`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ts_core::IntTimeSeries;
    ///
    /// let s: IntTimeSeries<u32> = (1..=5).map(|k| (k, k as i32)).collect();
    /// assert_eq!(s.sub_series_with(&2, false, &4, true).len(), 2);
    /// assert_eq!(s.sub_series_with(&2, true, &4, true).len(), 3);
    /// assert!(s.sub_series_with(&4, true, &2, true).is_empty());
    /// ```
    #[must_use]
    pub fn sub_series_with(&self, start: &K, include_start: bool, end: &K, include_end: bool) -> Self {
        // BTreeMap::range panics on inverted or doubly-excluded empty bounds.
        let empty_window = start > end || (start == end && !(include_start && include_end));
        if empty_window {
            return Self::empty();
        }

        let lower = if include_start {
            Bound::Included(start)
        } else {
            Bound::Excluded(start)
        };
        let upper = if include_end {
            Bound::Included(end)
        } else {
            Bound::Excluded(end)
        };

        self.entries()
            .range::<K, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// The first `n` entries in ascending key order.
    ///
    /// If `n > len()`, returns the entire series.
    #[must_use]
    pub fn head(&self, n: usize) -> Self {
        self.iter()
            .take(n)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Entries with keys strictly before `end`.
    #[must_use]
    pub fn head_until(&self, end: &K) -> Self {
        match self.first_key() {
            Some(first) => self.sub_series_with(first, true, end, false),
            None => Self::empty(),
        }
    }

    /// The last `n` entries in ascending key order.
    ///
    /// If `n > len()`, returns the entire series.
    #[must_use]
    pub fn tail(&self, n: usize) -> Self {
        let skip = self.len().saturating_sub(n);
        self.iter()
            .skip(skip)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Entries with keys at or after `start`.
    #[must_use]
    pub fn tail_from(&self, start: &K) -> Self {
        match self.last_key() {
            Some(last) => self.sub_series_with(start, true, last, true),
            None => Self::empty(),
        }
    }
}
