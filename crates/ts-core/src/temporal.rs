//! Positional shifting and key-set restriction.

use alloc::vec::Vec;

use crate::series::Series;
use crate::traits::SeriesKind;

impl<K: Ord + Clone, V: Clone, S: SeriesKind> Series<K, V, S> {
    /// Shift values by `k` ordinal positions while keys stay in place.
    ///
    /// The key at position `i` receives the value from position `i + k`.
    /// Positions whose source falls outside the series are dropped, so the
    /// result has `len() - |k|` entries, or none when `|k| >= len()`.
    ///
    /// Positive `k` pulls later values back onto earlier keys; negative `k`
    /// pushes earlier values onto later keys. Keys are never moved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ts_core::DoubleTimeSeries;
    ///
    /// let s: DoubleTimeSeries<u32> = [(1, 2.1), (2, 2.2), (3, 2.3), (4, 2.4)].into_iter().collect();
    ///
    /// let back = s.lag(1);
    /// assert_eq!(back.len(), 3);
    /// assert_eq!(back.get(&1), Some(&2.2));
    /// assert_eq!(back.get(&4), None);
    ///
    /// let forward = s.lag(-1);
    /// assert_eq!(forward.get(&2), Some(&2.1));
    /// assert_eq!(forward.get(&1), None);
    ///
    /// assert!(s.lag(4).is_empty());
    /// ```
    #[must_use]
    pub fn lag(&self, k: isize) -> Self {
        let shift = k.unsigned_abs();
        if shift >= self.len() {
            return Self::empty();
        }

        if k >= 0 {
            self.keys()
                .zip(self.values().skip(shift))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        } else {
            self.keys()
                .skip(shift)
                .zip(self.values())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        }
    }

    /// Restrict this series to keys that also appear in `other`.
    ///
    /// Values always come from `self`; only the key set of `other` matters,
    /// so `other` may hold any value type and be of any kind. A key missing
    /// from `other` is dropped, never filled with a default.
    #[must_use]
    pub fn intersect<W, S2: SeriesKind>(&self, other: &Series<K, W, S2>) -> Self {
        self.iter()
            .filter(|(key, _)| other.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Split the entries into parallel key and value vectors in key order.
    #[must_use]
    pub fn unzip(&self) -> (Vec<K>, Vec<V>) {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .unzip()
    }
}
