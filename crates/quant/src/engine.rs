//! Indicator engine: one pass from a clean price series to a full
//! [`IndicatorFrame`].
//!
//! ```text
//!                 ┌──────────────┐
//!   PriceSeries ─▶│ rolling mean │─▶ sma, std_dev, zscore, bands
//!                 ├──────────────┤
//!                 │ RSI (14)     │─▶ rsi
//!                 ├──────────────┤
//!                 │ EMA 12/26/9  │─▶ macd, signal
//!                 └──────────────┘
//!                        │
//!                        ▼
//!                  IndicatorFrame
//! ```
//!
//! All columns are aligned to the input dates. Rolling columns are
//! `None` until their lookback fills; MACD columns are total because
//! the EMAs seed from the first close.

use types::{AnalyticsConfig, IndicatorFrame, PriceSeries};

use crate::indicators::{RSI_PERIOD, macd_series, rolling_std_series, rsi_series, sma_series};

/// Standard deviations below this are treated as zero dispersion.
///
/// Guards the z-score division against float dust left over from the
/// running-sum update on near-constant windows.
const MIN_STD: f64 = 1e-9;

/// Computes every indicator column for `series` in a single pass per
/// indicator.
///
/// The z-score at `t` is `(close[t] - sma[t]) / std_dev[t]` and is
/// `None` wherever the rolling window has not filled or the window is
/// flat (`std_dev <= MIN_STD`): a z-score against zero dispersion is
/// undefined, not infinite. Band columns follow the mean instead, so
/// `upper == lower == sma` on a flat window.
pub fn compute_frame(series: &PriceSeries, config: &AnalyticsConfig) -> IndicatorFrame {
    let closes = series.closes();
    let window = config.window;
    let z = config.z_threshold;

    let sma = sma_series(&closes, window);
    let std_dev = rolling_std_series(&closes, window);
    let rsi = rsi_series(&closes, RSI_PERIOD);
    let (macd, signal) = macd_series(&closes);

    let mut zscore = Vec::with_capacity(closes.len());
    let mut upper = Vec::with_capacity(closes.len());
    let mut lower = Vec::with_capacity(closes.len());
    for t in 0..closes.len() {
        match (sma[t], std_dev[t]) {
            (Some(m), Some(s)) => {
                upper.push(Some(m + z * s));
                lower.push(Some(m - z * s));
                if s > MIN_STD {
                    zscore.push(Some((closes[t] - m) / s));
                } else {
                    zscore.push(None);
                }
            }
            _ => {
                upper.push(None);
                lower.push(None);
                zscore.push(None);
            }
        }
    }

    IndicatorFrame {
        dates: series.dates(),
        close: closes,
        sma,
        std_dev,
        zscore,
        upper,
        lower,
        rsi,
        macd,
        signal,
        window,
        z_threshold: z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        PriceSeries::from_closes(start, closes)
    }

    fn make_config(window: usize) -> AnalyticsConfig {
        AnalyticsConfig::new().with_window(window)
    }

    #[test]
    fn test_columns_aligned_with_input() {
        let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64).sin()).collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        assert_eq!(frame.len(), closes.len());
        assert_eq!(frame.dates.len(), closes.len());
        assert_eq!(frame.sma.len(), closes.len());
        assert_eq!(frame.std_dev.len(), closes.len());
        assert_eq!(frame.zscore.len(), closes.len());
        assert_eq!(frame.upper.len(), closes.len());
        assert_eq!(frame.lower.len(), closes.len());
        assert_eq!(frame.rsi.len(), closes.len());
        assert_eq!(frame.macd.len(), closes.len());
        assert_eq!(frame.signal.len(), closes.len());
    }

    #[test]
    fn test_warmup_prefix_is_undefined() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        for t in 0..49 {
            assert!(frame.sma[t].is_none());
            assert!(frame.std_dev[t].is_none());
            assert!(frame.zscore[t].is_none());
            assert!(frame.upper[t].is_none());
            assert!(frame.lower[t].is_none());
        }
        for t in 49..60 {
            assert!(frame.sma[t].is_some());
            assert!(frame.std_dev[t].is_some());
            assert!(frame.upper[t].is_some());
            assert!(frame.lower[t].is_some());
        }
    }

    #[test]
    fn test_flat_series_has_no_zscore() {
        let closes = vec![100.0; 60];
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        let last = frame.latest().unwrap();
        assert_eq!(last.sma, Some(100.0));
        assert_eq!(last.std_dev, Some(0.0));
        assert_eq!(last.zscore, None);
        // Bands collapse onto the mean rather than disappearing.
        assert_eq!(last.upper, Some(100.0));
        assert_eq!(last.lower, Some(100.0));
    }

    #[test]
    fn test_linear_ramp_zscore() {
        // 100, 101, ..., 159 with window 50: the last window is
        // 110..=159, mean 134.5, sample variance 212.5.
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        let last = frame.latest().unwrap();
        let sma = last.sma.unwrap();
        let std = last.std_dev.unwrap();
        assert!((sma - 134.5).abs() < 1e-9);
        assert!((std - 212.5_f64.sqrt()).abs() < 1e-9);
        let z = last.zscore.unwrap();
        assert!((z - (159.0 - 134.5) / 212.5_f64.sqrt()).abs() < 1e-9);
        // A steady ramp sits inside two standard deviations of its own
        // recent history.
        assert!(z > 0.0 && z < 2.0);
    }

    #[test]
    fn test_spike_matches_two_pass_statistics() {
        let mut closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        closes[59] = 500.0;
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        let last = frame.latest().unwrap();

        let tail = &closes[10..60];
        let mean = stats::mean(tail).unwrap();
        let std = stats::sample_std_dev(tail).unwrap();
        assert!((last.sma.unwrap() - mean).abs() < 1e-9);
        assert!((last.std_dev.unwrap() - std).abs() < 1e-9);

        let z = last.zscore.unwrap();
        assert!((z - (500.0 - mean) / std).abs() < 1e-9);
        assert!(z > 2.0, "spike should sit far above the threshold, got {z}");
    }

    #[test]
    fn test_rolling_columns_match_two_pass_at_every_index() {
        let closes: Vec<f64> = (0..90)
            .map(|i| 120.0 + (i as f64 * 1.1).sin() * 6.0 + (i as f64 * 0.23).cos() * 2.0)
            .collect();
        let window = 50;
        let frame = compute_frame(&make_series(&closes), &make_config(window));
        for t in (window - 1)..closes.len() {
            let slice = &closes[t + 1 - window..=t];
            let mean = stats::mean(slice).unwrap();
            let std = stats::sample_std_dev(slice).unwrap();
            assert!((frame.sma[t].unwrap() - mean).abs() < 1e-9);
            assert!((frame.std_dev[t].unwrap() - std).abs() < 1e-9);
            let z = frame.zscore[t].unwrap();
            assert!((z - (closes[t] - mean) / std).abs() < 1e-9);
        }
    }

    #[test]
    fn test_bands_bracket_the_mean() {
        let closes: Vec<f64> = (0..70)
            .map(|i| 150.0 + (i as f64 * 0.7).sin() * 9.0)
            .collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        for t in 49..70 {
            let sma = frame.sma[t].unwrap();
            let upper = frame.upper[t].unwrap();
            let lower = frame.lower[t].unwrap();
            assert!(upper >= sma && sma >= lower);
            let std = frame.std_dev[t].unwrap();
            assert!((upper - sma - 2.0 * std).abs() < 1e-9);
            assert!((sma - lower - 2.0 * std).abs() < 1e-9);
        }
    }

    #[test]
    fn test_macd_columns_total() {
        let closes: Vec<f64> = (0..30).map(|i| 50.0 + i as f64 * 0.5).collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        // MACD needs no warmup even when the rolling window never fills.
        assert_eq!(frame.macd.len(), 30);
        assert_eq!(frame.macd[0], 0.0);
        assert!(frame.sma.iter().all(Option::is_none));
    }

    #[test]
    fn test_snapshot_at_exposes_row() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let frame = compute_frame(&make_series(&closes), &make_config(50));
        let snap = frame.snapshot_at(59).unwrap();
        assert_eq!(snap.close, 159.0);
        assert_eq!(snap.sma, frame.sma[59]);
        assert!(frame.snapshot_at(60).is_none());
    }
}
