//! Computed indicator outputs: the per-series frame and its latest-row view.

use crate::state::MacdSign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parallel indicator arrays aligned to one price series.
///
/// Every column has the same length as the input series. Rolling columns
/// (`sma`, `std_dev`, `zscore`, `upper`, `lower`, `rsi`) are `None` where
/// the value is undefined (window not yet full, or zero dispersion); the
/// EMA-based columns are total because the recurrence seeds from the
/// first close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    /// Session dates, copied from the input series.
    pub dates: Vec<NaiveDate>,
    /// Closing prices, copied from the input series.
    pub close: Vec<f64>,
    /// Rolling mean over the trailing window.
    pub sma: Vec<Option<f64>>,
    /// Rolling sample standard deviation over the trailing window.
    pub std_dev: Vec<Option<f64>>,
    /// (close - sma) / std_dev; `None` where std_dev is zero or absent.
    pub zscore: Vec<Option<f64>>,
    /// Upper band: sma + z_threshold * std_dev.
    pub upper: Vec<Option<f64>>,
    /// Lower band: sma - z_threshold * std_dev.
    pub lower: Vec<Option<f64>>,
    /// 14-period relative strength index in [0, 100].
    pub rsi: Vec<Option<f64>>,
    /// MACD line: EMA12(close) - EMA26(close).
    pub macd: Vec<f64>,
    /// Signal line: EMA9 of the MACD line.
    pub signal: Vec<f64>,
    /// Rolling window length the frame was computed with.
    pub window: usize,
    /// Sigma multiplier the bands were computed with.
    pub z_threshold: f64,
}

impl IndicatorFrame {
    /// Number of rows (equals the input series length).
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Check if the frame has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Single-row view at index `t`, or `None` if out of range.
    pub fn snapshot_at(&self, t: usize) -> Option<IndicatorSnapshot> {
        if t >= self.len() {
            return None;
        }
        Some(IndicatorSnapshot {
            date: self.dates[t],
            close: self.close[t],
            sma: self.sma[t],
            std_dev: self.std_dev[t],
            zscore: self.zscore[t],
            upper: self.upper[t],
            lower: self.lower[t],
            rsi: self.rsi[t],
            macd: self.macd[t],
            signal: self.signal[t],
        })
    }

    /// View of the most recent row.
    pub fn latest(&self) -> Option<IndicatorSnapshot> {
        self.snapshot_at(self.len().checked_sub(1)?)
    }

    /// Position of the close within the bands at index `t`
    /// (0 = lower band, 1 = upper band, 0.5 when the bands coincide).
    pub fn percent_b(&self, t: usize) -> Option<f64> {
        let upper = *self.upper.get(t)?;
        let lower = *self.lower.get(t)?;
        let (upper, lower) = (upper?, lower?);
        if upper == lower {
            return Some(0.5);
        }
        Some((self.close[t] - lower) / (upper - lower))
    }
}

/// The latest indicator values for one series, as consumed by the
/// classifier and the scanner row assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Session date of the row.
    pub date: NaiveDate,
    /// Closing price of the row.
    pub close: f64,
    /// Rolling mean, if the window was full.
    pub sma: Option<f64>,
    /// Rolling sample standard deviation, if the window was full.
    pub std_dev: Option<f64>,
    /// Z-score, if defined.
    pub zscore: Option<f64>,
    /// Upper band, if defined.
    pub upper: Option<f64>,
    /// Lower band, if defined.
    pub lower: Option<f64>,
    /// RSI, if defined.
    pub rsi: Option<f64>,
    /// MACD line value.
    pub macd: f64,
    /// Signal line value.
    pub signal: f64,
}

impl IndicatorSnapshot {
    /// Trend direction of the MACD histogram at this row.
    #[inline]
    pub fn macd_sign(&self) -> MacdSign {
        MacdSign::from_values(self.macd, self.signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame() -> IndicatorFrame {
        let day = |n| NaiveDate::from_ymd_opt(2024, 1, 1 + n).unwrap();
        IndicatorFrame {
            dates: vec![day(0), day(1), day(2)],
            close: vec![100.0, 102.0, 104.0],
            sma: vec![None, None, Some(102.0)],
            std_dev: vec![None, None, Some(2.0)],
            zscore: vec![None, None, Some(1.0)],
            upper: vec![None, None, Some(106.0)],
            lower: vec![None, None, Some(98.0)],
            rsi: vec![None, None, Some(70.0)],
            macd: vec![0.0, 0.1, 0.3],
            signal: vec![0.0, 0.05, 0.2],
            window: 3,
            z_threshold: 2.0,
        }
    }

    #[test]
    fn test_latest_snapshot() {
        let frame = make_frame();
        let snap = frame.latest().unwrap();
        assert_eq!(snap.close, 104.0);
        assert_eq!(snap.zscore, Some(1.0));
        assert_eq!(snap.rsi, Some(70.0));
        assert_eq!(snap.macd_sign(), MacdSign::Bullish);
    }

    #[test]
    fn test_snapshot_out_of_range() {
        let frame = make_frame();
        assert!(frame.snapshot_at(3).is_none());
    }

    #[test]
    fn test_latest_on_empty_frame() {
        let frame = IndicatorFrame {
            dates: vec![],
            close: vec![],
            sma: vec![],
            std_dev: vec![],
            zscore: vec![],
            upper: vec![],
            lower: vec![],
            rsi: vec![],
            macd: vec![],
            signal: vec![],
            window: 50,
            z_threshold: 2.0,
        };
        assert!(frame.is_empty());
        assert!(frame.latest().is_none());
    }

    #[test]
    fn test_percent_b() {
        let frame = make_frame();
        // close 104 between lower 98 and upper 106: (104-98)/8 = 0.75
        assert_eq!(frame.percent_b(2), Some(0.75));
        assert_eq!(frame.percent_b(0), None);
        assert_eq!(frame.percent_b(9), None);
    }
}
