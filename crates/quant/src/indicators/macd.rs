//! MACD and signal line series.

use super::ema::ema_series;

/// Fast EMA span of the standard MACD configuration.
pub const MACD_FAST: usize = 12;
/// Slow EMA span of the standard MACD configuration.
pub const MACD_SLOW: usize = 26;
/// Signal EMA span of the standard MACD configuration.
pub const MACD_SIGNAL: usize = 9;

/// MACD line and signal line with custom spans.
///
/// `macd[t] = EMA_fast(values)[t] - EMA_slow(values)[t]`;
/// `signal = EMA_signal_span(macd)`. All EMAs seed from their first
/// input, so both outputs are total over the series.
///
/// # Panics
/// Panics if any span is 0 or if fast >= slow.
pub fn macd_series_with(
    values: &[f64],
    fast: usize,
    slow: usize,
    signal_span: usize,
) -> (Vec<f64>, Vec<f64>) {
    assert!(fast < slow, "MACD fast span must be < slow span");
    let fast_ema = ema_series(values, fast);
    let slow_ema = ema_series(values, slow);
    let macd: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal = ema_series(&macd, signal_span);
    (macd, signal)
}

/// MACD with the standard (12, 26, 9) spans.
pub fn macd_series(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    macd_series_with(values, MACD_FAST, MACD_SLOW, MACD_SIGNAL)
}
