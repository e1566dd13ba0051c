//! Common test utilities for tseries.
//!
//! Calendar helpers for date-keyed series and tolerant float comparison.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use tseries::{DoubleTimeSeries, Series, SeriesKind};

/// Build a date, panicking on an invalid calendar day.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `len` consecutive days starting at `start`.
pub fn days_from(start: NaiveDate, len: usize) -> Vec<NaiveDate> {
    (0..len as u64).map(|i| start + Days::new(i)).collect()
}

/// Daily series starting at `start` with the given values.
pub fn daily<S: SeriesKind>(start: NaiveDate, values: &[f64]) -> Series<NaiveDate, f64, S> {
    days_from(start, values.len())
        .into_iter()
        .zip(values.iter().copied())
        .collect()
}

/// Daily canonical series starting 2023-01-01.
pub fn daily_2023(values: &[f64]) -> DoubleTimeSeries<NaiveDate> {
    daily(date(2023, 1, 1), values)
}

/// Tiered float comparison with tolerance levels.
///
/// Uses the following tolerance levels based on magnitude:
/// - For values near zero (|expected| < 1e-10): use absolute tolerance
/// - For larger values: use relative tolerance
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: Expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: Got NaN but expected {expected}");

    if expected.abs() < 1e-10 {
        let diff = (actual - expected).abs();
        assert!(
            diff < epsilon,
            "{context}: Expected {expected} but got {actual} (diff: {diff})"
        );
        return;
    }

    let rel_diff = ((actual - expected) / expected).abs();
    assert!(
        rel_diff < epsilon,
        "{context}: Expected {expected} but got {actual} (rel diff: {rel_diff:.2e})"
    );
}

/// Assert a series' values match `expected` in key order, with tolerance.
pub fn assert_values_eq<K: Ord, S: SeriesKind>(
    actual: &Series<K, f64, S>,
    expected: &[f64],
    epsilon: f64,
    name: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{name}: Length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (&a, &e)) in actual.values().zip(expected).enumerate() {
        assert_float_eq(a, e, epsilon, &format!("{name}[{i}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_float_eq_normal() {
        assert_float_eq(1.0, 1.0, 1e-10, "test");
        assert_float_eq(100.0, 100.0000001, 1e-6, "test");
        assert_float_eq(0.0, 1e-12, 1e-10, "test");
    }

    #[test]
    #[should_panic]
    fn test_assert_float_eq_nan_mismatch() {
        assert_float_eq(1.0, f64::NAN, 1e-10, "test");
    }

    #[test]
    fn test_days_from() {
        let days = days_from(date(2023, 12, 30), 3);
        assert_eq!(days, vec![date(2023, 12, 30), date(2023, 12, 31), date(2024, 1, 1)]);
    }
}
