//! Relative strength index series.

/// Standard RSI lookback, independent of the rolling-window setting.
pub const RSI_PERIOD: usize = 14;

/// RSI over the trailing simple average gain and average loss of the
/// last `period` one-step changes.
///
/// `rsi[t]` is `None` for `t < period` (fewer than `period` changes
/// available). When the window holds no losses the value saturates at
/// exactly `100.0`, the standard convention, instead of dividing by
/// zero. Output is always within `[0, 100]`.
///
/// Gain/loss sums update in O(1) per step; a count of loss entries in
/// the window keeps the saturation branch exact even when the running
/// sums carry rounding dust.
///
/// # Panics
/// Panics if period is 0.
pub fn rsi_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    assert!(period > 0, "RSI period must be > 0");
    let n = values.len();
    let mut out = vec![None; n];
    if n < 2 {
        return out;
    }

    // (gain, loss) per change; change i covers values[i] -> values[i+1].
    let mut changes: Vec<(f64, f64)> = Vec::with_capacity(n - 1);
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    let mut loss_count = 0usize;

    for t in 1..n {
        let change = values[t] - values[t - 1];
        let gain = change.max(0.0);
        let loss = (-change).max(0.0);
        changes.push((gain, loss));
        gain_sum += gain;
        loss_sum += loss;
        if loss > 0.0 {
            loss_count += 1;
        }

        if changes.len() > period {
            let (old_gain, old_loss) = changes[changes.len() - 1 - period];
            gain_sum -= old_gain;
            loss_sum -= old_loss;
            if old_loss > 0.0 {
                loss_count -= 1;
            }
        }

        if t >= period {
            out[t] = Some(if loss_count == 0 {
                100.0
            } else {
                let rs = gain_sum.max(0.0) / loss_sum;
                100.0 - 100.0 / (1.0 + rs)
            });
        }
    }
    out
}
