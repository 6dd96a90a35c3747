//! Return distribution fitted to a price history.

use quant::stats;
use types::{AnalyticsError, AnalyticsResult, PriceSeries};

/// Minimum series length that yields at least one return.
pub const MIN_FIT_POINTS: usize = 2;

/// Normal model of one-step simple returns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnModel {
    /// Mean daily simple return.
    pub mu: f64,
    /// Sample standard deviation of daily simple returns.
    pub sigma: f64,
}

impl ReturnModel {
    /// Fit the model to the full history of `series`.
    ///
    /// Returns are `(p[t] - p[t-1]) / p[t-1]` over consecutive closes.
    /// A series with a single return fits with `sigma` 0.0, since one
    /// observation carries no dispersion. Fails with
    /// [`AnalyticsError::InsufficientHistory`] when the series is too
    /// short to produce any return at all.
    pub fn fit(series: &PriceSeries) -> AnalyticsResult<Self> {
        let closes = series.closes();
        let rets = stats::returns(&closes);
        let mu = stats::mean(&rets).ok_or(AnalyticsError::InsufficientHistory {
            required: MIN_FIT_POINTS,
            actual: series.len(),
        })?;
        let sigma = stats::sample_std_dev(&rets).unwrap_or(0.0);
        Ok(Self { mu, sigma })
    }
}
