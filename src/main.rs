//! Quant Radar - Main binary
//!
//! Scans a universe of symbols through the analytics pipeline, prints
//! the classified table, and projects the most extreme symbol forward
//! with Monte Carlo paths.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────┐      ┌─────────────────────────────┐      ┌───────────────┐
//! │ universe │ ───► │ scan: fetch → normalize →   │ ───► │ ranked table  │
//! │ (source) │      │ indicators → classify       │      │ + projection  │
//! └──────────┘      └─────────────────────────────┘      └───────────────┘
//! ```
//!
//! The demo universe is synthetic and seeded, so runs are reproducible;
//! pass `--json` for machine-readable output on stdout.

mod universe;

use std::sync::Arc;

use clap::Parser;
use rand::Rng;

use montecarlo::simulate;
use quant::normalize;
use scanner::{
    MarketDataSource, ScanObserver, Scanner, StaticSource, opportunities, rank_by_extremity,
};
use types::config::{DEFAULT_HORIZON_DAYS, DEFAULT_NUM_PATHS, DEFAULT_WINDOW, DEFAULT_Z_THRESHOLD};
use types::{
    AnalyticsConfig, AnalyticsError, AnalyticsResult, ScanRow, SimulationBundle, SimulationConfig,
    Symbol,
};

use crate::universe::{build_source, default_universe};

/// Default scan list: every demo regime plus one unknown symbol to show
/// the skip path.
const DEFAULT_SYMBOLS: &str = "MEANREV,BULL,BEAR,CRASH,MELTUP,FLAT,SPOTTY,GHOST";

/// Quant Radar - Statistical universe scanner
#[derive(Parser, Debug)]
#[command(name = "quant-radar")]
#[command(about = "Scans a symbol universe for statistical extremes and projects outcomes")]
#[command(version)]
struct Args {
    /// Comma-separated symbols to scan (unknown symbols are skipped)
    #[arg(long, env = "RADAR_SYMBOLS", default_value = DEFAULT_SYMBOLS)]
    symbols: String,

    /// Rolling window for mean/std/z-score
    #[arg(long, env = "RADAR_WINDOW", default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// Sigma multiplier for the strict classification threshold
    #[arg(long, env = "RADAR_Z_THRESHOLD", default_value_t = DEFAULT_Z_THRESHOLD)]
    z_threshold: f64,

    /// Projection horizon in days
    #[arg(long, env = "RADAR_HORIZON", default_value_t = DEFAULT_HORIZON_DAYS)]
    horizon: usize,

    /// Number of Monte Carlo paths
    #[arg(long, env = "RADAR_PATHS", default_value_t = DEFAULT_NUM_PATHS)]
    paths: usize,

    /// Seed for the universe and the simulation (random when omitted)
    #[arg(long, env = "RADAR_SEED")]
    seed: Option<u64>,

    /// Days of history to generate per symbol
    #[arg(long, env = "RADAR_HISTORY_DAYS", default_value_t = 250)]
    history_days: usize,

    /// Show only non-neutral rows
    #[arg(long, env = "RADAR_OPPORTUNITIES")]
    opportunities: bool,

    /// Emit results as JSON on stdout
    #[arg(long, env = "RADAR_JSON")]
    json: bool,
}

/// Observer that reports scan progress on stderr.
struct ProgressObserver {
    step: usize,
}

impl ScanObserver for ProgressObserver {
    fn name(&self) -> &str {
        "Progress"
    }

    fn on_symbol_start(&self, index: usize, total: usize, _symbol: &str) {
        // Progress every 10%
        if index > 0 && index % self.step == 0 {
            let pct = (index * 100) / total;
            eprintln!("  {}% ({}/{} symbols)", pct, index, total);
        }
    }

    fn on_symbol_skipped(&self, symbol: &str, error: &AnalyticsError) {
        eprintln!("  skipped {}: {}", symbol, error);
    }

    fn on_scan_complete(&self, rows: &[ScanRow], skipped: usize) {
        eprintln!("  scan complete: {} rows, {} skipped", rows.len(), skipped);
        eprintln!();
    }
}

/// Format an optional value to fixed precision, "-" when undefined.
fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:+.*}", precision, v),
        None => "-".to_string(),
    }
}

fn print_banner(args: &Args, seed: u64, total: usize) {
    eprintln!("╔═══════════════════════════════════════════════════════════╗");
    eprintln!("║  Quant Radar - Universe Scan                              ║");
    eprintln!("╠═══════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Symbols: {:3}        │  History: {:4} days                 ║",
        total, args.history_days
    );
    eprintln!(
        "║  Window:  {:3}        │  Z threshold: {:.2}                  ║",
        args.window, args.z_threshold
    );
    eprintln!(
        "║  Horizon: {:3} days   │  Paths: {:4}                        ║",
        args.horizon, args.paths
    );
    eprintln!("║  Seed: {:<20}                               ║", seed);
    eprintln!("╚═══════════════════════════════════════════════════════════╝");
    eprintln!();
}

fn print_table(rows: &[ScanRow]) {
    println!(
        "{:<8} {:>10} {:>8} {:>6}  {:<8} {:<18} {:<18}",
        "SYMBOL", "LAST", "Z", "RSI", "MACD", "STATE", "SIGNAL"
    );
    for row in rows {
        let signal = row
            .signal
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let rsi = match row.rsi {
            Some(v) => format!("{:.1}", v),
            None => "-".to_string(),
        };
        println!(
            "{:<8} {:>10.2} {:>8} {:>6}  {:<8} {:<18} {:<18}",
            row.symbol,
            row.last_price,
            fmt_opt(row.zscore, 2),
            rsi,
            row.macd_sign.to_string(),
            row.state.to_string(),
            signal
        );
    }
    println!();
}

fn print_projection(symbol: &str, bundle: &SimulationBundle) {
    eprintln!("╔═══════════════════════════════════════════════════════════╗");
    eprintln!("║  Monte Carlo Projection                                   ║");
    eprintln!("╠═══════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Symbol: {:<8}  │  Start: ${:<10.2}                    ║",
        symbol, bundle.start_price
    );
    eprintln!(
        "║  Fitted: mu {:+.3}%/day  │  sigma {:.3}%/day                ║",
        bundle.mu * 100.0,
        bundle.sigma * 100.0
    );
    eprintln!(
        "║  Horizon: {:4} days  │  Paths: {:5}                       ║",
        bundle.horizon_days,
        bundle.num_paths()
    );
    if let Some(stats) = bundle.terminal_stats() {
        eprintln!(
            "║  Terminal: min ${:.2} │ mean ${:.2} │ max ${:.2}",
            stats.min, stats.mean, stats.max
        );
    }
    eprintln!("╚═══════════════════════════════════════════════════════════╝");
}

/// Re-run the pipeline for one symbol and simulate it forward.
fn project(
    source: &StaticSource,
    symbol: &str,
    window: usize,
    config: &SimulationConfig,
) -> AnalyticsResult<SimulationBundle> {
    let raw = source.fetch(symbol)?;
    let series = normalize(&raw, window)?;
    simulate(&series, config)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─────────────────────────────────────────────────────────────────────────
    // Configuration boundary: reject out-of-range parameters up front
    // ─────────────────────────────────────────────────────────────────────────
    let analytics = AnalyticsConfig::new()
        .with_window(args.window)
        .with_z_threshold(args.z_threshold);
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    let sim_config = SimulationConfig::new()
        .with_horizon_days(args.horizon)
        .with_num_paths(args.paths)
        .with_seed(seed);
    if let Err(e) = analytics.validate().and_then(|_| sim_config.validate()) {
        eprintln!("error: {}", e);
        std::process::exit(2);
    }

    let symbols: Vec<Symbol> = args
        .symbols
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    // ─────────────────────────────────────────────────────────────────────────
    // Build the seeded universe and scan it
    // ─────────────────────────────────────────────────────────────────────────
    let source = build_source(&default_universe(), args.history_days, seed);
    let mut scanner = Scanner::new(analytics);
    if !args.json {
        print_banner(&args, seed, symbols.len());
        scanner.add_observer(Arc::new(ProgressObserver {
            step: (symbols.len() / 10).max(1),
        }));
    }

    let rows = scanner.scan(&source, &symbols);
    let skipped = symbols.len() - rows.len();

    let display = if args.opportunities {
        opportunities(&rows)
    } else {
        rows.clone()
    };

    // ─────────────────────────────────────────────────────────────────────────
    // Project the most extreme symbol forward
    // ─────────────────────────────────────────────────────────────────────────
    let target = rank_by_extremity(&rows)
        .into_iter()
        .find(|r| r.extremity().is_some());
    let projection = target.and_then(|row| {
        match project(&source, &row.symbol, args.window, &sim_config) {
            Ok(bundle) => Some((row.symbol, bundle)),
            Err(e) => {
                eprintln!("projection failed for {}: {}", row.symbol, e);
                None
            }
        }
    });

    if args.json {
        let projection_json = match &projection {
            Some((symbol, bundle)) => serde_json::json!({
                "symbol": symbol,
                "start_price": bundle.start_price,
                "mu": bundle.mu,
                "sigma": bundle.sigma,
                "horizon_days": bundle.horizon_days,
                "num_paths": bundle.num_paths(),
                "terminal": bundle.terminal_stats(),
            }),
            None => serde_json::Value::Null,
        };
        let doc = serde_json::json!({
            "window": args.window,
            "z_threshold": args.z_threshold,
            "seed": seed,
            "skipped": skipped,
            "rows": display,
            "projection": projection_json,
        });
        match serde_json::to_string_pretty(&doc) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("error: failed to serialize output: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_table(&display);
        if let Some((symbol, bundle)) = &projection {
            print_projection(symbol, bundle);
        }
    }
}
