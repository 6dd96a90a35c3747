//! Scan observers for watching batch-scan lifecycle events.
//!
//! Observers receive snapshots of scan progress at key points. They
//! cannot modify scan results.
//!
//! # Design Principles
//!
//! - **Declarative**: Observers declare what events they care about via
//!   trait methods
//! - **Modular**: Each observer is independent; add or remove one
//!   without affecting the scan
//! - **SoC**: The scanner owns the batch; observers watch and report

use std::sync::Arc;

use types::{AnalyticsError, ScanRow};

// ─────────────────────────────────────────────────────────────────────────────
// ScanObserver Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for scan observers.
///
/// Row events hand each observer an **owned** [`ScanRow`], so observers
/// can store or forward rows without lifetime constraints. Use interior
/// mutability (`Mutex`, `AtomicU64`, channels) for observer-owned state.
///
/// # Thread Safety
///
/// Observers must be `Send + Sync` so a scanner holding them can be
/// shared or moved across threads.
///
/// # Lifecycle
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │  Scanner.scan()                   (per symbol, in order)│
/// │                                                         │
/// │  ┌───────────────────┐                                  │
/// │  │ on_symbol_start() │ ← before the fetch               │
/// │  └─────────┬─────────┘                                  │
/// │            ▼                                            │
/// │   fetch → normalize → indicators → classify             │
/// │            │                                            │
/// │       ok ──┴── err                                      │
/// │        ▼        ▼                                       │
/// │  ┌──────────┐ ┌─────────────────────┐                   │
/// │  │ on_row() │ │ on_symbol_skipped() │                   │
/// │  └──────────┘ └─────────────────────┘                   │
/// └─────────────────────────────────────────────────────────┘
/// │
/// ▼ (after all symbols)
/// ┌────────────────────┐
/// │ on_scan_complete() │ ← full result set
/// └────────────────────┘
/// ```
pub trait ScanObserver: Send + Sync {
    /// Human-readable name for logging and debugging.
    fn name(&self) -> &str;

    /// Called before each symbol is fetched.
    ///
    /// `index` is the zero-based position within the batch of `total`.
    /// Use for: progress reporting.
    #[allow(unused_variables)]
    fn on_symbol_start(&self, index: usize, total: usize, symbol: &str) {}

    /// Called when a symbol produced a classified row.
    ///
    /// Receives an owned row. Use for: live output, persistence.
    #[allow(unused_variables)]
    fn on_row(&self, row: ScanRow) {}

    /// Called when a symbol was skipped.
    ///
    /// Use for: failure reporting, retry queues.
    #[allow(unused_variables)]
    fn on_symbol_skipped(&self, symbol: &str, error: &AnalyticsError) {}

    /// Called once when the batch completes.
    ///
    /// Use for: summaries, final reports.
    #[allow(unused_variables)]
    fn on_scan_complete(&self, rows: &[ScanRow], skipped: usize) {}
}

// ─────────────────────────────────────────────────────────────────────────────
// ScanObservers
// ─────────────────────────────────────────────────────────────────────────────

/// Manages observer registration and sequential invocation.
///
/// Observers are called in registration order. Each call is synchronous;
/// for async behavior, observers should use interior channels/queues.
#[derive(Default)]
pub struct ScanObservers {
    observers: Vec<Arc<dyn ScanObserver>>,
}

impl ScanObservers {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are called in registration order.
    pub fn add(&mut self, observer: Arc<dyn ScanObserver>) {
        self.observers.push(observer);
    }

    /// Get the number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Get observer names for debugging.
    pub fn observer_names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Invoke `on_symbol_start` on all observers.
    pub fn on_symbol_start(&self, index: usize, total: usize, symbol: &str) {
        for observer in &self.observers {
            observer.on_symbol_start(index, total, symbol);
        }
    }

    /// Invoke `on_row` on all observers.
    ///
    /// Clones the row for each observer to maintain the owned-data
    /// contract.
    pub fn on_row(&self, row: &ScanRow) {
        if self.observers.is_empty() {
            return;
        }
        for observer in &self.observers {
            observer.on_row(row.clone());
        }
    }

    /// Invoke `on_symbol_skipped` on all observers.
    pub fn on_symbol_skipped(&self, symbol: &str, error: &AnalyticsError) {
        for observer in &self.observers {
            observer.on_symbol_skipped(symbol, error);
        }
    }

    /// Invoke `on_scan_complete` on all observers.
    pub fn on_scan_complete(&self, rows: &[ScanRow], skipped: usize) {
        for observer in &self.observers {
            observer.on_scan_complete(rows, skipped);
        }
    }
}

impl std::fmt::Debug for ScanObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanObservers")
            .field("observers", &self.observer_names())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in Observers
// ─────────────────────────────────────────────────────────────────────────────

/// A no-op observer useful for testing.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl ScanObserver for NoOpObserver {
    fn name(&self) -> &str {
        "NoOp"
    }
}
