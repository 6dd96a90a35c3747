//! Simple moving average and rolling standard deviation series.

use crate::rolling::RollingStats;

/// Rolling mean over a trailing window of exactly `window` points.
///
/// The first `window - 1` entries are `None`; no partial windows, no
/// centering.
///
/// # Panics
/// Panics if window is 0.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut stats = RollingStats::new(window);
    values
        .iter()
        .map(|&v| {
            stats.push(v);
            if stats.is_full() { stats.mean() } else { None }
        })
        .collect()
}

/// Rolling sample standard deviation (N-1 denominator) over a trailing
/// window of exactly `window` points.
///
/// The first `window - 1` entries are `None`. A flat window yields
/// `Some(0.0)`; mapping that to an undefined z-score is the engine's
/// concern, not this function's.
///
/// # Panics
/// Panics if window is 0.
pub fn rolling_std_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut stats = RollingStats::new(window);
    values
        .iter()
        .map(|&v| {
            stats.push(v);
            if stats.is_full() {
                stats.sample_std_dev()
            } else {
                None
            }
        })
        .collect()
}
