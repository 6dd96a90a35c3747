//! Core types for the market-analytics engine.
//!
//! This crate provides the shared data model used across the workspace:
//! price series and their raw provider form, computed indicator frames,
//! market-state labels, scanner rows, simulation bundles, configuration,
//! and the common error taxonomy.
//!
//! # Design Notes
//!
//! - All values are `f64` for statistical precision; per-point indicator
//!   values that cannot be computed are `Option<f64>` (`None` = no
//!   signal), never NaN and never silently zero.
//! - Every output-contract type derives `Serialize`/`Deserialize` so the
//!   presentation layer can ship results over any boundary.
//! - Entities are immutable snapshots computed on demand; nothing in
//!   this crate holds cross-call mutable state.

pub mod config;
pub mod error;
pub mod indicators;
pub mod scan;
pub mod series;
pub mod simulation;
pub mod state;

pub use config::{AnalyticsConfig, SimulationConfig};
pub use error::{AnalyticsError, AnalyticsResult};
pub use indicators::{IndicatorFrame, IndicatorSnapshot};
pub use scan::ScanRow;
pub use series::{PricePoint, PriceSeries, RawPoint, RawSeries, Symbol};
pub use simulation::{SimulationBundle, SimulationPath, TerminalStats};
pub use state::{MacdSign, MarketState, SuperSignal};
