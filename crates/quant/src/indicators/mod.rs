//! Rolling indicator series.
//!
//! Each function maps a chronological close-price slice to an output
//! aligned index-for-index with its input. Rolling-window outputs are
//! `Option<f64>` (`None` until the window fills); EMA-based outputs are
//! total because the recurrence seeds from the first value.

pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use ema::ema_series;
pub use macd::{MACD_FAST, MACD_SIGNAL, MACD_SLOW, macd_series, macd_series_with};
pub use rsi::{RSI_PERIOD, rsi_series};
pub use sma::{rolling_std_series, sma_series};
