//! Z-score classifier and compound signal detection.
//!
//! Classification is a pure function of the latest snapshot: no state is
//! carried between evaluations. The strict threshold comes from the
//! configuration; the soft band and the RSI extremes are fixed ratios of
//! convention.

use types::{IndicatorSnapshot, MacdSign, MarketState, SuperSignal};

/// Soft warning band as a fraction of the strict threshold.
pub const SOFT_BAND_RATIO: f64 = 0.7;
/// RSI below this counts as oversold momentum.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI above this counts as overbought momentum.
pub const RSI_OVERBOUGHT: f64 = 80.0;

/// Full classifier verdict for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    /// Discrete deviation state.
    pub state: MarketState,
    /// Compound signal, when price and momentum extremes co-occur.
    pub signal: Option<SuperSignal>,
    /// Trend direction of the MACD histogram.
    pub macd_sign: MacdSign,
}

/// Maps a z-score to its discrete state.
///
/// The strict threshold is checked before the soft band, so a z-score
/// beyond both lands in the extreme state. An undefined z-score (window
/// not full, or flat window) is `Neutral`: no deviation can be asserted
/// without a dispersion to measure it against.
pub fn classify_zscore(zscore: Option<f64>, z_threshold: f64) -> MarketState {
    let Some(z) = zscore else {
        return MarketState::Neutral;
    };
    let soft = SOFT_BAND_RATIO * z_threshold;
    if z > z_threshold {
        MarketState::ExpensiveExtreme
    } else if z < -z_threshold {
        MarketState::CheapExtreme
    } else if z > soft {
        MarketState::Expensive
    } else if z < -soft {
        MarketState::Cheap
    } else {
        MarketState::Neutral
    }
}

/// Compound signal when a z-score extreme co-occurs with an RSI extreme.
///
/// Both legs are required: a missing RSI never yields a signal, and the
/// soft states never qualify regardless of momentum.
pub fn super_signal(state: MarketState, rsi: Option<f64>) -> Option<SuperSignal> {
    let rsi = rsi?;
    match state {
        MarketState::CheapExtreme if rsi < RSI_OVERSOLD => Some(SuperSignal::SuperOpportunity),
        MarketState::ExpensiveExtreme if rsi > RSI_OVERBOUGHT => Some(SuperSignal::SuperRisk),
        _ => None,
    }
}

/// Classifies one snapshot end to end.
pub fn assess(snapshot: &IndicatorSnapshot, z_threshold: f64) -> Assessment {
    let state = classify_zscore(snapshot.zscore, z_threshold);
    Assessment {
        state,
        signal: super_signal(state, snapshot.rsi),
        macd_sign: snapshot.macd_sign(),
    }
}
