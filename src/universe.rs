//! Synthetic demo universe.
//!
//! Builds a deterministic set of raw price tables with one regime per
//! symbol, so a single scan exercises every classification band, the
//! compound signals, and the normalizer's cleaning paths without any
//! network access.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use scanner::StaticSource;
use types::{RawPoint, RawSeries};

/// Anchor date for generated histories; fixed so seeded runs never
/// drift with the wall clock.
const ANCHOR: (i32, u32, u32) = (2024, 1, 2);

/// Trading days in the shock tail of the crash and melt-up regimes.
const SHOCK_DAYS: usize = 12;

/// Price behavior of one synthetic symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Oscillates around a fixed anchor price.
    MeanReverting,
    /// Steady upward drift with daily noise.
    Bull,
    /// Steady downward drift with daily noise.
    Bear,
    /// Quiet range, then a sharp multi-day sell-off at the end.
    Crash,
    /// Quiet range, then a sharp multi-day ramp at the end.
    MeltUp,
    /// Constant price, zero dispersion.
    Flat,
    /// Mean-reverting with missing closes sprinkled in.
    Spotty,
}

/// One symbol of the demo universe.
#[derive(Debug, Clone)]
pub struct SymbolSpec {
    /// Ticker used in the scan.
    pub symbol: String,
    /// Generator regime.
    pub regime: Regime,
    /// First close of the history.
    pub start_price: f64,
}

impl SymbolSpec {
    fn new(symbol: &str, regime: Regime, start_price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            regime,
            start_price,
        }
    }
}

/// The default demo universe, one symbol per regime.
pub fn default_universe() -> Vec<SymbolSpec> {
    vec![
        SymbolSpec::new("MEANREV", Regime::MeanReverting, 100.0),
        SymbolSpec::new("BULL", Regime::Bull, 50.0),
        SymbolSpec::new("BEAR", Regime::Bear, 80.0),
        SymbolSpec::new("CRASH", Regime::Crash, 120.0),
        SymbolSpec::new("MELTUP", Regime::MeltUp, 40.0),
        SymbolSpec::new("FLAT", Regime::Flat, 100.0),
        SymbolSpec::new("SPOTTY", Regime::Spotty, 100.0),
    ]
}

/// Build an in-memory source holding `history_days` of data per symbol.
///
/// Each symbol draws from its own generator derived from `seed`, so the
/// whole universe is reproducible and adding a symbol does not disturb
/// the others.
pub fn build_source(specs: &[SymbolSpec], history_days: usize, seed: u64) -> StaticSource {
    let mut source = StaticSource::new();
    for (idx, spec) in specs.iter().enumerate() {
        let rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
        source.insert(generate_series(spec, history_days, rng));
    }
    source
}

/// Generate the raw table for one symbol.
fn generate_series(spec: &SymbolSpec, history_days: usize, mut rng: StdRng) -> RawSeries {
    let anchor = NaiveDate::from_ymd_opt(ANCHOR.0, ANCHOR.1, ANCHOR.2)
        .expect("anchor date is valid");
    let shock_start = history_days.saturating_sub(SHOCK_DAYS);

    let mut price = spec.start_price;
    let mut points = Vec::with_capacity(history_days);
    for t in 0..history_days {
        let date = anchor
            .checked_add_days(Days::new(t as u64))
            .expect("date range exhausted");
        let noise = (rng.r#gen::<f64>() - 0.5) * 0.02;

        price = match spec.regime {
            Regime::MeanReverting | Regime::Spotty => {
                price + 0.15 * (spec.start_price - price) + price * noise
            }
            Regime::Bull => price * (1.0 + 0.0012 + noise),
            Regime::Bear => price * (1.0 - 0.0012 + noise),
            Regime::Crash => {
                if t >= shock_start {
                    price * 0.97
                } else {
                    price + 0.15 * (spec.start_price - price) + price * noise * 0.5
                }
            }
            Regime::MeltUp => {
                if t >= shock_start {
                    price * 1.03
                } else {
                    price + 0.15 * (spec.start_price - price) + price * noise * 0.5
                }
            }
            Regime::Flat => price,
        };

        let close = if spec.regime == Regime::Spotty && t % 5 == 4 {
            None
        } else {
            Some(price)
        };
        points.push(RawPoint::new(date, close));
    }

    RawSeries::new(spec.symbol.clone(), points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanner::MarketDataSource;

    #[test]
    fn test_universe_is_deterministic() {
        let specs = default_universe();
        let first = build_source(&specs, 120, 7);
        let second = build_source(&specs, 120, 7);
        for spec in &specs {
            assert_eq!(
                first.fetch(&spec.symbol).unwrap(),
                second.fetch(&spec.symbol).unwrap()
            );
        }
    }

    #[test]
    fn test_series_lengths() {
        let specs = default_universe();
        let source = build_source(&specs, 200, 1);
        for spec in &specs {
            assert_eq!(source.fetch(&spec.symbol).unwrap().len(), 200);
        }
    }

    #[test]
    fn test_flat_regime_is_constant() {
        let spec = SymbolSpec::new("FLAT", Regime::Flat, 100.0);
        let source = build_source(std::slice::from_ref(&spec), 60, 3);
        let raw = source.fetch("FLAT").unwrap();
        assert!(raw.points.iter().all(|p| p.close == Some(100.0)));
    }

    #[test]
    fn test_spotty_regime_has_gaps() {
        let spec = SymbolSpec::new("SPOTTY", Regime::Spotty, 100.0);
        let source = build_source(std::slice::from_ref(&spec), 100, 3);
        let raw = source.fetch("SPOTTY").unwrap();
        let missing = raw.points.iter().filter(|p| p.close.is_none()).count();
        assert_eq!(missing, 20);
    }

    #[test]
    fn test_crash_regime_ends_low() {
        let spec = SymbolSpec::new("CRASH", Regime::Crash, 120.0);
        let source = build_source(std::slice::from_ref(&spec), 150, 3);
        let raw = source.fetch("CRASH").unwrap();
        let last = raw.points.last().unwrap().close.unwrap();
        // Twelve straight -3% days take the price well below the range.
        assert!(last < 120.0 * 0.97_f64.powi(10));
    }

    #[test]
    fn test_meltup_regime_ends_high() {
        let spec = SymbolSpec::new("MELTUP", Regime::MeltUp, 40.0);
        let source = build_source(std::slice::from_ref(&spec), 150, 3);
        let raw = source.fetch("MELTUP").unwrap();
        let last = raw.points.last().unwrap().close.unwrap();
        assert!(last > 40.0 * 1.03_f64.powi(10));
    }
}
