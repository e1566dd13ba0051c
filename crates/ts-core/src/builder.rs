//! Single-writer accumulator for [`Series`].

use alloc::collections::BTreeMap;

use crate::series::Series;
use crate::traits::{SeriesKind, Strict};

/// Accumulates entries and freezes them into an immutable [`Series`].
///
/// The builder is owned by exactly one writer. Every method takes `self` by
/// value, and [`build`](Self::build) consumes the builder, so nothing can
/// write to the entries once the series exists.
///
/// # Example
///
/// ```rust
/// use ts_core::{LongTimeSeries, SeriesBuilder};
///
/// let series: LongTimeSeries<u32> = SeriesBuilder::new()
///     .put(2, 20)
///     .put(1, 10)
///     .put(2, 200)
///     .build();
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.get(&2), Some(&200));
/// ```
#[derive(Debug, Clone)]
pub struct SeriesBuilder<K, V, S = Strict> {
    entries: BTreeMap<K, V>,
    kind: core::marker::PhantomData<S>,
}

impl<K: Ord, V, S: SeriesKind> Default for SeriesBuilder<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, S: SeriesKind> SeriesBuilder<K, V, S> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            kind: core::marker::PhantomData,
        }
    }

    /// Insert an entry, replacing any previous value for `key`.
    #[must_use]
    pub fn put(mut self, key: K, value: V) -> Self {
        self.entries.insert(key, value);
        self
    }

    /// Insert every entry of `entries`, later entries replacing earlier ones.
    #[must_use]
    pub fn put_all<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Returns the number of distinct keys accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been put yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the accumulated entries into a series.
    #[must_use]
    pub fn build(self) -> Series<K, V, S> {
        Series::from_btree(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{DoubleTimeSeries, IntTimeSeries, LongTimeSeries};
    use crate::traits::Padded;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_put_and_build() {
        let series: LongTimeSeries<NaiveDate> = SeriesBuilder::new()
            .put(date(2023, 6, 1), 10)
            .put(date(2023, 6, 2), 20)
            .build();

        let expected: LongTimeSeries<NaiveDate> =
            Series::from_map([(date(2023, 6, 1), 10), (date(2023, 6, 2), 20)]);
        assert_eq!(series, expected);
    }

    #[test]
    fn test_put_all_and_build() {
        let map = HashMap::from([(date(2023, 6, 2), 20), (date(2023, 6, 1), 10)]);
        let series: IntTimeSeries<NaiveDate> = SeriesBuilder::new().put_all(map).build();

        assert_eq!(series.key_at(0), Ok(&date(2023, 6, 1)));
        assert_eq!(series.value_at(1), Ok(&20));
    }

    #[test]
    fn test_put_overwrites() {
        let builder = SeriesBuilder::<u32, f64, Padded>::new()
            .put(1, 1.0)
            .put(1, 2.0);
        assert_eq!(builder.len(), 1);

        let series = builder.build();
        assert_eq!(series.get(&1), Some(&2.0));
        assert_eq!(series.kind_name(), "PaddedTimeSeries");
    }

    #[test]
    fn test_builders_with_same_input_build_equal_series() {
        let a: DoubleTimeSeries<NaiveDate> = SeriesBuilder::new()
            .put(date(2023, 6, 1), 10.5)
            .put(date(2023, 6, 2), 20.0)
            .build();
        let b: DoubleTimeSeries<NaiveDate> = SeriesBuilder::new()
            .put(date(2023, 6, 2), 20.0)
            .put(date(2023, 6, 1), 10.5)
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_builder() {
        let builder = SeriesBuilder::<u32, i32>::default();
        assert!(builder.is_empty());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_loop_accumulation() {
        let mut builder = SeriesBuilder::<u32, i64>::new();
        for i in 0..5u32 {
            builder = builder.put(i, i64::from(i) * 10);
        }
        let series = builder.build();
        assert_eq!(series.len(), 5);
        assert_eq!(series.value_at(4), Ok(&40));
    }
}
