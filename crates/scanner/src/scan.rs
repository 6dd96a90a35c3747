//! The batch scan loop and result ranking.
//!
//! One scan processes symbols strictly in input order:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Scanner.scan()               │
//! │                                         │
//! │  for each symbol:                       │
//! │  1. Observer: on_symbol_start           │
//! │  2. Fetch raw history from the source   │
//! │  3. Normalize to a clean price series   │
//! │  4. Compute the indicator frame         │
//! │  5. Classify the latest snapshot        │
//! │  6. Observer: on_row / on_symbol_skipped│
//! │                                         │
//! │  Observer: on_scan_complete             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Any failure is confined to its symbol: the error is logged, observers
//! are told, and the loop moves on.

use std::sync::Arc;

use tracing::{debug, warn};

use quant::{assess, compute_frame, normalize};
use types::{AnalyticsConfig, AnalyticsError, AnalyticsResult, ScanRow, Symbol};

use crate::observer::{ScanObserver, ScanObservers};
use crate::source::MarketDataSource;

/// Batch scanner: applies the full analytics pipeline to a universe of
/// symbols and collects the surviving rows.
#[derive(Debug)]
pub struct Scanner {
    config: AnalyticsConfig,
    observers: ScanObservers,
}

impl Scanner {
    /// Create a scanner with the given analytics parameters.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            observers: ScanObservers::new(),
        }
    }

    /// Register an observer. Observers are called in registration order.
    pub fn add_observer(&mut self, observer: Arc<dyn ScanObserver>) {
        self.observers.add(observer);
    }

    /// The analytics parameters this scanner runs with.
    #[inline]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Scan `symbols` against `source`, one row per surviving symbol.
    ///
    /// Rows come back in input order. Symbols that fail anywhere in the
    /// pipeline are skipped and logged; a failure never aborts the batch.
    pub fn scan(&self, source: &dyn MarketDataSource, symbols: &[Symbol]) -> Vec<ScanRow> {
        let total = symbols.len();
        let mut rows = Vec::with_capacity(total);
        let mut skipped = 0usize;

        for (index, symbol) in symbols.iter().enumerate() {
            self.observers.on_symbol_start(index, total, symbol);
            match self.scan_symbol(source, symbol) {
                Ok(row) => {
                    debug!("{}: {} (z={:?})", symbol, row.state, row.zscore);
                    self.observers.on_row(&row);
                    rows.push(row);
                }
                Err(err) => {
                    warn!("skipping {}: {}", symbol, err);
                    self.observers.on_symbol_skipped(symbol, &err);
                    skipped += 1;
                }
            }
        }

        self.observers.on_scan_complete(&rows, skipped);
        rows
    }

    /// Run the pipeline for one symbol.
    fn scan_symbol(&self, source: &dyn MarketDataSource, symbol: &str) -> AnalyticsResult<ScanRow> {
        let raw = source.fetch(symbol)?;
        let series = normalize(&raw, self.config.window)?;
        let frame = compute_frame(&series, &self.config);
        let snapshot = frame
            .latest()
            .ok_or_else(|| AnalyticsError::NotAvailable {
                symbol: symbol.to_string(),
            })?;
        let verdict = assess(&snapshot, self.config.z_threshold);
        Ok(ScanRow {
            symbol: symbol.to_string(),
            last_price: snapshot.close,
            zscore: snapshot.zscore,
            rsi: snapshot.rsi,
            macd_sign: verdict.macd_sign,
            state: verdict.state,
            signal: verdict.signal,
        })
    }
}

/// Rows with any non-neutral state, in scan order.
pub fn opportunities(rows: &[ScanRow]) -> Vec<ScanRow> {
    rows.iter()
        .filter(|r| r.is_opportunity())
        .cloned()
        .collect()
}

/// Rows sorted by absolute z-score, most extreme first.
///
/// Rows without a defined z-score sort last; ties keep scan order.
pub fn rank_by_extremity(rows: &[ScanRow]) -> Vec<ScanRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| {
        let ea = a.extremity().unwrap_or(f64::NEG_INFINITY);
        let eb = b.extremity().unwrap_or(f64::NEG_INFINITY);
        eb.total_cmp(&ea)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{MacdSign, MarketState};

    fn make_row(symbol: &str, zscore: Option<f64>, state: MarketState) -> ScanRow {
        ScanRow {
            symbol: symbol.to_string(),
            last_price: 100.0,
            zscore,
            rsi: Some(50.0),
            macd_sign: MacdSign::Flat,
            state,
            signal: None,
        }
    }

    #[test]
    fn test_opportunities_filters_neutral() {
        let rows = vec![
            make_row("A", Some(2.5), MarketState::ExpensiveExtreme),
            make_row("B", Some(0.1), MarketState::Neutral),
            make_row("C", Some(-1.6), MarketState::Cheap),
        ];
        let picked = opportunities(&rows);
        let symbols: Vec<&str> = picked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "C"]);
    }

    #[test]
    fn test_rank_by_extremity() {
        let rows = vec![
            make_row("A", Some(1.5), MarketState::Expensive),
            make_row("B", None, MarketState::Neutral),
            make_row("C", Some(-2.8), MarketState::CheapExtreme),
            make_row("D", Some(0.3), MarketState::Neutral),
        ];
        let ranked = rank_by_extremity(&rows);
        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_rank_ties_keep_scan_order() {
        let rows = vec![
            make_row("A", Some(1.0), MarketState::Neutral),
            make_row("B", Some(-1.0), MarketState::Neutral),
        ];
        let ranked = rank_by_extremity(&rows);
        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_by_extremity(&[]).is_empty());
        assert!(opportunities(&[]).is_empty());
    }
}
