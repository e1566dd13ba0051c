//! Pearson product-moment correlation between two series.

use statrs::statistics::Statistics;
use ts_core::{Result, Series, SeriesError, SeriesKind, SeriesNum};

/// Minimum number of entries each side needs for a correlation.
pub const MIN_ENTRIES: usize = 2;

/// Pearson correlation coefficient between the values of `x` and `y`.
///
/// Values are paired by ordinal position, each side taken in its own key
/// order; the keys themselves are not compared. Align the series first (for
/// example with [`Series::intersect`]) when they cover different keys.
///
/// A side with zero variance has no defined correlation and yields `NaN`.
///
/// # Example
///
/// ```rust
/// use ts_analysis::pearson_correlation;
/// use ts_core::DoubleTimeSeries;
///
/// let x: DoubleTimeSeries<u32> = [(1, 1.0), (2, 2.0), (3, 3.0)].into_iter().collect();
/// let y: DoubleTimeSeries<u32> = [(1, 3.0), (2, 2.0), (3, 1.0)].into_iter().collect();
///
/// let r = pearson_correlation(&x, &y).unwrap();
/// assert!((r + 1.0).abs() < 1e-10);
/// ```
///
/// # Errors
///
/// - [`SeriesError::InsufficientData`] if either series has fewer than two entries.
/// - [`SeriesError::DimensionMismatch`] if the series differ in length.
pub fn pearson_correlation<K, V, W, S, S2>(x: &Series<K, V, S>, y: &Series<K, W, S2>) -> Result<f64>
where
    K: Ord,
    V: SeriesNum,
    W: SeriesNum,
    S: SeriesKind,
    S2: SeriesKind,
{
    for actual in [x.len(), y.len()] {
        if actual < MIN_ENTRIES {
            return Err(SeriesError::InsufficientData {
                required: MIN_ENTRIES,
                actual,
            });
        }
    }
    if x.len() != y.len() {
        return Err(SeriesError::DimensionMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let xs: Vec<f64> = x.values().map(|v| v.to_f64_lossy()).collect();
    let ys: Vec<f64> = y.values().map(|v| v.to_f64_lossy()).collect();

    let covariance = xs.iter().covariance(ys.iter());
    let spread = xs.iter().std_dev() * ys.iter().std_dev();

    Ok((covariance / spread).clamp(-1.0, 1.0))
}
