//! Market-data boundary.
//!
//! The scanner is written against [`MarketDataSource`] so the same loop
//! runs over a live provider, a cached store, or fixture data in tests.

use std::collections::HashMap;

use types::{AnalyticsError, AnalyticsResult, RawSeries, Symbol};

/// Provider of raw historical price tables.
///
/// Implementations resolve provider-specific concerns (identifier
/// variants, retries, caching) behind this call; the scanner only sees
/// a raw table or a failure.
///
/// # Thread Safety
///
/// Sources must be `Send + Sync` so one source can back concurrent
/// scans.
pub trait MarketDataSource: Send + Sync {
    /// Fetch the raw history for `symbol`.
    ///
    /// A symbol with no usable data fails with
    /// [`AnalyticsError::NotAvailable`].
    fn fetch(&self, symbol: &str) -> AnalyticsResult<RawSeries>;
}

/// In-memory source backed by a fixed map of series.
///
/// Used by the demo binary for synthetic universes and by tests as a
/// fixture. Unknown symbols fail with [`AnalyticsError::NotAvailable`].
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    series: HashMap<Symbol, RawSeries>,
}

impl StaticSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, replacing any previous entry for its symbol.
    pub fn insert(&mut self, series: RawSeries) {
        self.series.insert(series.symbol.clone(), series);
    }

    /// Builder-style [`StaticSource::insert`].
    pub fn with_series(mut self, series: RawSeries) -> Self {
        self.insert(series);
        self
    }

    /// Number of stored series.
    #[inline]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if the source holds no series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl MarketDataSource for StaticSource {
    fn fetch(&self, symbol: &str) -> AnalyticsResult<RawSeries> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| AnalyticsError::NotAvailable {
                symbol: symbol.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use types::RawPoint;

    fn make_series(symbol: &str) -> RawSeries {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        RawSeries::new(symbol, vec![RawPoint::new(date, Some(100.0))])
    }

    #[test]
    fn test_fetch_known_symbol() {
        let source = StaticSource::new().with_series(make_series("ACME"));
        let raw = source.fetch("ACME").unwrap();
        assert_eq!(raw.symbol, "ACME");
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn test_fetch_unknown_symbol() {
        let source = StaticSource::new();
        let err = source.fetch("VOID").unwrap_err();
        assert_eq!(
            err,
            AnalyticsError::NotAvailable {
                symbol: "VOID".to_string()
            }
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut source = StaticSource::new();
        source.insert(make_series("ACME"));
        source.insert(make_series("ACME"));
        assert_eq!(source.len(), 1);
    }
}
