//! Universe scanner: runs the analytics pipeline over many symbols and
//! collects one classified row per symbol that survives.
//!
//! # Modules
//!
//! - [`source`] - The market-data boundary the scanner pulls from
//! - [`observer`] - Lifecycle observers for progress and reporting
//! - [`scan`] - The batch scan loop and result ranking
//!
//! A failed symbol never aborts a scan: the row is skipped, observers
//! are told, and the batch continues in input order.

pub mod observer;
pub mod scan;
pub mod source;

pub use observer::{NoOpObserver, ScanObserver, ScanObservers};
pub use scan::{Scanner, opportunities, rank_by_extremity};
pub use source::{MarketDataSource, StaticSource};
