//! Quantitative analytics: series normalization, rolling indicators,
//! and market-state classification.
//!
//! # Modules
//!
//! - [`normalize`] - Raw provider tables to clean price series
//! - [`rolling`] - O(1)-update rolling window statistics
//! - [`stats`] - Basic statistical functions over slices
//! - [`indicators`] - SMA, EMA, RSI, and MACD series
//! - [`engine`] - Full indicator-frame computation for one series
//! - [`classify`] - Threshold classification of the latest indicators
//!
//! # Design Notes
//!
//! - All functions are pure: no I/O, no retained state between calls.
//! - Rolling columns are computed in a single O(N) pass per series using
//!   running sums, so a batch scan over many symbols stays linear.
//! - Values that cannot be computed (window not yet full, zero
//!   dispersion) are `Option::None`, never NaN: downstream consumers
//!   check the marker instead of inheriting silent float poison.

pub mod classify;
pub mod engine;
pub mod indicators;
pub mod normalize;
pub mod rolling;
pub mod stats;

pub use classify::{Assessment, assess, classify_zscore, super_signal};
pub use engine::compute_frame;
pub use normalize::normalize;
pub use rolling::RollingStats;
