//! End-to-end scenarios across construction, range queries, arithmetic,
//! lags and autocorrelation.

mod common;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::{assert_float_eq, assert_values_eq, daily, daily_2023, date, days_from};
use tseries::prelude::*;

// ============================================================================
// Construction & Display
// ============================================================================

#[test]
fn construct_from_parallel_vectors() {
    let keys = days_from(date(2023, 1, 1), 10);
    let values: Vec<i32> = (0..10).collect();
    let ts: IntTimeSeries<NaiveDate> = Series::of(keys.clone(), values.clone()).unwrap();

    for (k, v) in keys.iter().zip(&values) {
        assert_eq!(ts.get(k), Some(v));
    }
    assert_eq!(ts.key_at(9), Ok(&date(2023, 1, 10)));
    assert!(ts.value_at(10).is_err());
}

#[test]
fn mismatched_vectors_are_invalid() {
    let err = DoubleTimeSeries::<NaiveDate>::of(days_from(date(2023, 1, 1), 3), vec![1.0])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn display_format() {
    let ts = daily_2023(&[13.0, 14.0, 15.0]);
    assert_eq!(
        ts.to_string(),
        "TimeSeries[(2023-01-01, 13.0), (2023-01-02, 14.0), (2023-01-03, 15.0)]"
    );

    let padded: PaddedDoubleTimeSeries<NaiveDate> = daily(date(2024, 2, 28), &[1.5, 2.5]);
    assert_eq!(
        padded.to_string(),
        "PaddedTimeSeries[(2024-02-28, 1.5), (2024-02-29, 2.5)]"
    );
}

#[test]
fn kinds_with_equal_entries_are_unequal() {
    let strict = daily_2023(&[1.0, 2.0]);
    let padded: PaddedDoubleTimeSeries<NaiveDate> = daily(date(2023, 1, 1), &[1.0, 2.0]);

    assert_ne!(strict, padded);
    assert_eq!(strict, padded.into_kind::<Strict>());
}

// ============================================================================
// Range Engine
// ============================================================================

#[test]
fn range_queries_over_ten_days() {
    let start = date(2023, 1, 1);
    let ts: IntTimeSeries<NaiveDate> =
        Series::of(days_from(start, 10), (0..10).collect()).unwrap();

    let window = ts.sub_series(&(start + Days::new(2)), &(start + Days::new(7)));
    assert_eq!(window.values().copied().collect::<Vec<_>>(), [2, 3, 4, 5, 6]);

    assert_eq!(ts.head(3).len(), 3);
    assert_eq!(ts.head_until(&(start + Days::new(5))).len(), 5);
    assert_eq!(ts.tail(3).first_key(), Some(&(start + Days::new(7))));
    assert_eq!(ts.tail_from(&(start + Days::new(6))).len(), 4);

    let inclusive = ts.sub_series_with(&(start + Days::new(2)), true, &(start + Days::new(7)), true);
    let exclusive = ts.sub_series_with(&(start + Days::new(2)), false, &(start + Days::new(7)), false);
    assert!(exclusive.keys().all(|k| window.contains(k)));
    assert!(window.keys().all(|k| inclusive.contains(k)));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn scalar_arithmetic_scenario() {
    let ts = daily_2023(&[10.0, 20.0, 30.0, 40.0, 50.0]);

    assert_eq!(&ts + 2.0, daily_2023(&[12.0, 22.0, 32.0, 42.0, 52.0]));
    assert_eq!(ts.add_scalar(2).unwrap(), daily_2023(&[12.0, 22.0, 32.0, 42.0, 52.0]));
    assert_eq!(ts.divide_scalar(2).unwrap(), daily_2023(&[5.0, 10.0, 15.0, 20.0, 25.0]));
    assert_eq!(ts.divide_scalar(0), Err(SeriesError::ZeroDivisor));
}

#[test]
fn canonical_series_add_on_shared_keys() {
    let a: DoubleTimeSeries<NaiveDate> =
        Series::from_map([(date(2023, 1, 1), 10.0), (date(2023, 1, 2), 20.0)]);
    let b: DoubleTimeSeries<NaiveDate> =
        Series::from_map([(date(2023, 1, 1), 5.0), (date(2023, 1, 2), 15.0)]);

    let expected: DoubleTimeSeries<NaiveDate> =
        Series::from_map([(date(2023, 1, 1), 15.0), (date(2023, 1, 2), 35.0)]);

    let sum = &a + &b;
    assert_eq!(sum.len(), 2);
    assert_eq!(sum, expected);
}

#[test]
fn padded_series_add_over_union() {
    let a: PaddedDoubleTimeSeries<NaiveDate> =
        Series::from_map([(date(2023, 1, 1), 10.0), (date(2023, 1, 2), 20.0)]);
    let b: PaddedDoubleTimeSeries<NaiveDate> =
        Series::from_map([(date(2023, 1, 2), 15.0), (date(2023, 1, 3), 30.0)]);

    assert_values_eq(&(&a + &b), &[10.0, 35.0, 30.0], 1e-12, "a + b");
    assert_values_eq(&(&a - &b), &[10.0, 5.0, -30.0], 1e-12, "a - b");
    assert_eq!(&a + &b, &b + &a);

    let err = a.multiply_series(&b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
}

#[test]
fn explicit_policy_on_canonical_series() {
    let a = daily_2023(&[1.0, 2.0, 3.0]);
    let b: DoubleTimeSeries<NaiveDate> = daily(date(2023, 1, 3), &[10.0, 20.0]);

    let inter = a.combine(&b, BinaryOp::Add, AlignmentPolicy::Intersection).unwrap();
    let union = a.combine(&b, BinaryOp::Add, AlignmentPolicy::UnionWithDefault).unwrap();

    assert_values_eq(&inter, &[13.0], 1e-12, "intersection");
    assert_values_eq(&union, &[1.0, 2.0, 13.0, 20.0], 1e-12, "union");
}

// ============================================================================
// Temporal & Statistics
// ============================================================================

#[test]
fn lag_scenario() {
    let ts: DoubleTimeSeries<NaiveDate> = daily(date(2024, 1, 1), &[2.1, 2.2, 2.3, 2.4]);

    let expected: DoubleTimeSeries<NaiveDate> = daily(date(2024, 1, 1), &[2.2, 2.3, 2.4]);
    assert_eq!(ts.lag(1), expected);
    assert!(ts.lag(4).is_empty());
    assert_eq!(ts.lag(0), ts);
    assert!(ts.intersect(&DoubleTimeSeries::<NaiveDate>::empty()).is_empty());
}

#[test]
fn pipeline_from_builder_to_correlogram() {
    let mut rng = StdRng::seed_from_u64(2023);
    let mut builder = SeriesBuilder::new();
    for day in days_from(date(2023, 1, 1), 150) {
        builder = builder.put(day, rng.random::<f64>());
    }
    let ts: DoubleTimeSeries<NaiveDate> = builder.build();

    let pairs = generate_autocorrelations(&ts, 75).unwrap();
    assert_eq!(pairs.len(), 76);
    assert_float_eq(pairs[0].1, 1.0, 1e-10, "lag 0");
    assert!(pairs.iter().skip(1).all(|(_, r)| r.abs() < 0.5));

    let correlogram = Correlogram::new(CorrelogramConfig::default()).calculate(&ts).unwrap();
    assert_eq!(correlogram.len(), 21);
    for (lag, r) in pairs.iter().take(21) {
        assert_eq!(correlogram.get(*lag), Some(*r));
    }
}

#[test]
fn correlation_of_scaled_series() {
    let ts = daily_2023(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0]);
    let scaled = ts.multiply_scalar(3).unwrap();
    let shifted = &ts - 7.0;

    assert_float_eq(pearson_correlation(&ts, &scaled).unwrap(), 1.0, 1e-10, "scaled");
    assert_float_eq(pearson_correlation(&ts, &shifted).unwrap(), 1.0, 1e-10, "shifted");
}
