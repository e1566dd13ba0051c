//! Autocorrelation and correlograms.
//!
//! The autocorrelation at lag `k` correlates a series with its own values
//! shifted `k` positions (see [`Series::lag`]), restricted to the keys the two
//! have in common.

use tracing::{debug, trace};
use ts_core::{Result, Series, SeriesError, SeriesKind, SeriesNum};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::correlation::{pearson_correlation, MIN_ENTRIES};
use crate::error::{AnalysisError, AnalysisResult};

/// Autocorrelation of `ts` at lag `k`.
///
/// Computed as the Pearson correlation between `ts.intersect(&lagged)` and
/// `lagged`, where `lagged = ts.lag(k)`. Lag `0` yields `1.0` for any series
/// with non-zero variance.
///
/// # Errors
///
/// Returns [`SeriesError::InsufficientData`] if `ts` has fewer than two
/// entries, or if fewer than two entries remain after lagging.
pub fn autocorrelation<K, V, S>(ts: &Series<K, V, S>, k: isize) -> Result<f64>
where
    K: Ord + Clone,
    V: SeriesNum,
    S: SeriesKind,
{
    if ts.len() < MIN_ENTRIES {
        return Err(SeriesError::InsufficientData {
            required: MIN_ENTRIES,
            actual: ts.len(),
        });
    }

    let lagged = ts.lag(k);
    let r = pearson_correlation(&ts.intersect(&lagged), &lagged)?;
    trace!(lag = k, r, "autocorrelation");
    Ok(r)
}

/// Autocorrelations for every lag in `0..=max_lag`, in ascending lag order.
///
/// # Errors
///
/// Propagates the first failing [`autocorrelation`] call.
#[tracing::instrument(skip_all, fields(len = ts.len(), max_lag = max_lag))]
pub fn generate_autocorrelations<K, V, S>(ts: &Series<K, V, S>, max_lag: usize) -> Result<Vec<(usize, f64)>>
where
    K: Ord + Clone,
    V: SeriesNum,
    S: SeriesKind,
{
    let pairs = (0..=max_lag)
        .map(|lag| -> Result<(usize, f64)> {
            let shift = isize::try_from(lag).map_err(|_| SeriesError::not_representable(lag))?;
            Ok((lag, autocorrelation(ts, shift)?))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(lags = pairs.len(), "generated autocorrelations");
    Ok(pairs)
}

/// Configuration for [`Correlogram`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrelogramConfig {
    /// Largest lag to compute; lags run from `0` through `max_lag`.
    pub max_lag: usize,
}

impl Default for CorrelogramConfig {
    fn default() -> Self {
        Self { max_lag: 20 }
    }
}

impl CorrelogramConfig {
    /// Create a new configuration with the given maximum lag.
    #[must_use]
    pub fn new(max_lag: usize) -> Self {
        Self { max_lag }
    }

    /// Set the maximum lag.
    #[must_use]
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Check the configuration against a series of `len` entries.
    ///
    /// Every lag must leave at least two entries to correlate.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`] if `max_lag + 2 > len`.
    pub fn validate(&self, len: usize) -> AnalysisResult<()> {
        let needed = self.max_lag.saturating_add(MIN_ENTRIES);
        if needed > len {
            return Err(AnalysisError::InvalidConfig {
                reason: format!(
                    "max_lag {} needs at least {needed} entries, series has {len}",
                    self.max_lag
                ),
            });
        }
        Ok(())
    }
}

/// Autocorrelation coefficients over a range of lags.
///
/// # Example
///
/// ```rust
/// use ts_analysis::{Correlogram, CorrelogramConfig};
/// use ts_core::DoubleTimeSeries;
///
/// let ts: DoubleTimeSeries<u32> = (0..30).map(|i| (i, f64::from(i % 5))).collect();
/// let correlogram = Correlogram::new(CorrelogramConfig::new(5)).calculate(&ts).unwrap();
///
/// assert_eq!(correlogram.len(), 6);
/// assert!((correlogram.get(0).unwrap() - 1.0).abs() < 1e-10);
/// assert!((correlogram.get(5).unwrap() - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Correlogram {
    config: CorrelogramConfig,
    coefficients: Vec<f64>,
}

impl Correlogram {
    /// Create an empty correlogram for `config`.
    #[must_use]
    pub fn new(config: CorrelogramConfig) -> Self {
        Self {
            config,
            coefficients: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &CorrelogramConfig {
        &self.config
    }

    /// Compute the coefficients for `ts`.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidConfig`] if the series is too short for the
    ///   configured lags.
    /// - [`AnalysisError::Series`] if a correlation fails.
    #[tracing::instrument(skip_all, fields(len = ts.len(), max_lag = self.config.max_lag))]
    pub fn calculate<K, V, S>(&self, ts: &Series<K, V, S>) -> AnalysisResult<Self>
    where
        K: Ord + Clone,
        V: SeriesNum,
        S: SeriesKind,
    {
        self.config.validate(ts.len())?;

        let coefficients = generate_autocorrelations(ts, self.config.max_lag)?
            .into_iter()
            .map(|(_, r)| r)
            .collect();

        Ok(Self {
            config: self.config.clone(),
            coefficients,
        })
    }

    /// Number of computed lags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns `true` if nothing has been computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The lags covered, in ascending order.
    pub fn lags(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.coefficients.len()
    }

    /// Coefficients indexed by lag.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient at `lag`, if computed.
    #[must_use]
    pub fn get(&self, lag: usize) -> Option<f64> {
        self.coefficients.get(lag).copied()
    }

    /// `(lag, coefficient)` pairs whose magnitude exceeds `threshold`, skipping lag 0.
    #[must_use]
    pub fn significant(&self, threshold: f64) -> Vec<(usize, f64)> {
        self.coefficients
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .filter(|(_, r)| r.abs() > threshold)
            .collect()
    }

    /// Approximate 95% confidence bound `1.96 / sqrt(n)` for white noise of length `n`.
    #[must_use]
    pub fn white_noise_bound(len: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = len as f64;
        1.96 / n.sqrt()
    }
}
