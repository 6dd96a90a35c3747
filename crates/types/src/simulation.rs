//! Monte Carlo simulation outputs.

use serde::{Deserialize, Serialize};

/// One simulated forward price path.
///
/// `prices[0]` is the last observed close; the path holds
/// `horizon_days + 1` values in step order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPath {
    /// Simulated prices, starting at the last observed close.
    pub prices: Vec<f64>,
}

impl SimulationPath {
    /// Number of prices in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if the path holds no prices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Number of simulated steps (path length minus the starting price).
    #[inline]
    pub fn horizon(&self) -> usize {
        self.prices.len().saturating_sub(1)
    }

    /// Price at the end of the horizon.
    #[inline]
    pub fn terminal(&self) -> Option<f64> {
        self.prices.last().copied()
    }
}

/// A set of independent simulated paths sharing one starting price and
/// one fitted return distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationBundle {
    /// Starting price of every path (the last observed close).
    pub start_price: f64,
    /// Fitted mean of one-step simple returns.
    pub mu: f64,
    /// Fitted standard deviation of one-step simple returns.
    pub sigma: f64,
    /// Steps simulated per path.
    pub horizon_days: usize,
    /// Independent paths.
    pub paths: Vec<SimulationPath>,
}

impl SimulationBundle {
    /// Number of paths in the bundle.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    /// Min / mean / max of the terminal prices across all paths, or
    /// `None` for a bundle with no paths.
    pub fn terminal_stats(&self) -> Option<TerminalStats> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        for path in &self.paths {
            let terminal = path.terminal()?;
            min = min.min(terminal);
            max = max.max(terminal);
            sum += terminal;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(TerminalStats {
            min,
            mean: sum / count as f64,
            max,
        })
    }
}

/// Summary of the terminal price distribution of a bundle.
///
/// A plain outcome range, not a confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalStats {
    /// Lowest terminal price.
    pub min: f64,
    /// Mean terminal price.
    pub mean: f64,
    /// Highest terminal price.
    pub max: f64,
}
