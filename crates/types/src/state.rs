//! Market-state labels produced by the classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete market state relative to the rolling mean.
///
/// Derived fresh on every evaluation from the latest z-score; never
/// persisted as a stateful entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarketState {
    /// Price far below the rolling mean (beyond the strict threshold).
    CheapExtreme,
    /// Price below the rolling mean (within the soft warning band).
    Cheap,
    /// No statistically notable deviation.
    #[default]
    Neutral,
    /// Price above the rolling mean (within the soft warning band).
    Expensive,
    /// Price far above the rolling mean (beyond the strict threshold).
    ExpensiveExtreme,
}

impl MarketState {
    /// True for the two cheap-side states.
    #[inline]
    pub fn is_cheap_side(self) -> bool {
        matches!(self, MarketState::Cheap | MarketState::CheapExtreme)
    }

    /// True for the two expensive-side states.
    #[inline]
    pub fn is_expensive_side(self) -> bool {
        matches!(self, MarketState::Expensive | MarketState::ExpensiveExtreme)
    }

    /// True when the strict threshold was crossed.
    #[inline]
    pub fn is_extreme(self) -> bool {
        matches!(
            self,
            MarketState::CheapExtreme | MarketState::ExpensiveExtreme
        )
    }
}

impl fmt::Display for MarketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            MarketState::CheapExtreme => "CHEAP_EXTREME",
            MarketState::Cheap => "CHEAP",
            MarketState::Neutral => "NEUTRAL",
            MarketState::Expensive => "EXPENSIVE",
            MarketState::ExpensiveExtreme => "EXPENSIVE_EXTREME",
        };
        write!(f, "{}", token)
    }
}

/// Compound label when a z-score extreme co-occurs with an RSI extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuperSignal {
    /// Extremely cheap price with oversold momentum.
    SuperOpportunity,
    /// Extremely expensive price with overbought momentum.
    SuperRisk,
}

impl fmt::Display for SuperSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuperSignal::SuperOpportunity => write!(f, "SUPER_OPPORTUNITY"),
            SuperSignal::SuperRisk => write!(f, "SUPER_RISK"),
        }
    }
}

/// Trend direction read off the MACD histogram (macd - signal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MacdSign {
    /// MACD line above its signal line.
    Bullish,
    /// MACD line below its signal line.
    Bearish,
    /// MACD line exactly on its signal line.
    Flat,
}

impl MacdSign {
    /// Derive the sign from MACD and signal line values.
    pub fn from_values(macd: f64, signal: f64) -> Self {
        if macd > signal {
            MacdSign::Bullish
        } else if macd < signal {
            MacdSign::Bearish
        } else {
            MacdSign::Flat
        }
    }
}

impl fmt::Display for MacdSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacdSign::Bullish => write!(f, "BULLISH"),
            MacdSign::Bearish => write!(f, "BEARISH"),
            MacdSign::Flat => write!(f, "FLAT"),
        }
    }
}
