//! Exponential moving average series.

/// Exponential moving average with smoothing factor `2 / (span + 1)`,
/// seeded from the first value: `ema[0] = values[0]`,
/// `ema[t] = alpha * values[t] + (1 - alpha) * ema[t-1]`.
///
/// No bias correction is applied, so early values lean toward the seed.
/// Defined at every index; strictly order-sensitive.
///
/// # Panics
/// Panics if span is 0.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span > 0, "EMA span must be > 0");
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let ema = match prev {
            None => v,
            Some(p) => alpha * v + (1.0 - alpha) * p,
        };
        out.push(ema);
        prev = Some(ema);
    }
    out
}
