//! Scanner output rows.

use crate::state::{MacdSign, MarketState, SuperSignal};
use crate::series::Symbol;
use serde::{Deserialize, Serialize};

/// One row of a universe scan: the latest indicator readings and the
/// classified state for a successfully processed symbol.
///
/// Symbols whose fetch or compute failed produce no row at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRow {
    /// Scanned symbol.
    pub symbol: Symbol,
    /// Latest closing price.
    pub last_price: f64,
    /// Latest z-score, if defined.
    pub zscore: Option<f64>,
    /// Latest RSI, if defined.
    pub rsi: Option<f64>,
    /// Trend direction of the MACD histogram.
    pub macd_sign: MacdSign,
    /// Classified market state.
    pub state: MarketState,
    /// Compound label when z-score and RSI extremes co-occur.
    pub signal: Option<SuperSignal>,
}

impl ScanRow {
    /// Absolute z-score, used for extremity ranking.
    #[inline]
    pub fn extremity(&self) -> Option<f64> {
        self.zscore.map(f64::abs)
    }

    /// True when the row shows any non-neutral state.
    #[inline]
    pub fn is_opportunity(&self) -> bool {
        self.state != MarketState::Neutral
    }
}
