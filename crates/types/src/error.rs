//! Shared error taxonomy for the analytics engine.

use crate::series::Symbol;
use thiserror::Error;

/// Errors surfaced by the analytics core.
///
/// Per-point indicator values that cannot be computed are NOT errors:
/// they travel as `None` inside the indicator frame and classify as
/// neutral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// No usable historical data for a symbol: the fetch failed in every
    /// attempted identifier variant, or the cleaned series was shorter
    /// than one rolling window plus a point. The core does not
    /// distinguish the two cases.
    #[error("no usable price data for {symbol}")]
    NotAvailable {
        /// Symbol that could not be analyzed.
        symbol: Symbol,
    },

    /// Series too short to derive a return distribution.
    #[error("insufficient history: need at least {required} points, got {actual}")]
    InsufficientHistory {
        /// Minimum points the operation needs.
        required: usize,
        /// Points actually present.
        actual: usize,
    },

    /// A recognized configuration option is outside its range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used across the workspace.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
