//! Price series types: raw provider rows and the cleaned series.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Instrument ticker symbol (e.g., "AAPL", "BTC-USD").
pub type Symbol = String;

// =============================================================================
// Raw provider form
// =============================================================================

/// One row as delivered by a data provider. The close may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    /// Trading session date.
    pub date: NaiveDate,
    /// Closing price, if the provider reported one.
    pub close: Option<f64>,
}

impl RawPoint {
    /// Create a new raw row.
    #[inline]
    pub fn new(date: NaiveDate, close: Option<f64>) -> Self {
        Self { date, close }
    }
}

/// A possibly irregular price table for one symbol, as fetched.
///
/// Rows may hold missing values, duplicate dates, or out-of-order dates;
/// the series normalizer turns this into a [`PriceSeries`] or rejects it.
/// Provider-specific quirks (ticker casing, multi-level column labels)
/// are resolved by the fetch collaborator before this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Symbol the rows belong to.
    pub symbol: Symbol,
    /// Rows in provider order.
    pub points: Vec<RawPoint>,
}

impl RawSeries {
    /// Create a new raw series.
    pub fn new(symbol: impl Into<Symbol>, points: Vec<RawPoint>) -> Self {
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// =============================================================================
// Cleaned series
// =============================================================================

/// One clean observation: a session date and its closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading session date.
    pub date: NaiveDate,
    /// Closing price; finite and positive.
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[inline]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Ordered close-price series for one symbol.
///
/// Invariant: dates strictly increase and every close is a finite
/// positive value. The constructor asserts this; the normalizer is the
/// production path that guarantees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series from clean points.
    ///
    /// # Panics
    /// Panics if any close is non-finite or non-positive, or if dates
    /// are not strictly increasing.
    pub fn new(points: Vec<PricePoint>) -> Self {
        for pair in points.windows(2) {
            assert!(
                pair[0].date < pair[1].date,
                "series dates must be strictly increasing"
            );
        }
        for p in &points {
            assert!(
                p.close.is_finite() && p.close > 0.0,
                "close must be a finite positive value"
            );
        }
        Self { points }
    }

    /// Build a series from consecutive daily closes starting at `start`.
    ///
    /// # Panics
    /// Panics on invalid closes (see [`PriceSeries::new`]) or if the
    /// date range overflows the calendar.
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Self {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                let date = start
                    .checked_add_days(Days::new(i as u64))
                    .expect("date range exhausted");
                PricePoint { date, close }
            })
            .collect();
        Self::new(points)
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations, oldest first.
    #[inline]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Session dates in chronological order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// First observation.
    #[inline]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest observation.
    #[inline]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Latest closing price.
    #[inline]
    pub fn last_close(&self) -> Option<f64> {
        self.points.last().map(|p| p.close)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(n))
            .unwrap()
    }

    #[test]
    fn test_from_closes_sequential_dates() {
        let series = PriceSeries::from_closes(day(0), &[100.0, 101.0, 102.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[0].date, day(0));
        assert_eq!(series.points()[2].date, day(2));
        assert_eq!(series.last_close(), Some(102.0));
    }

    #[test]
    fn test_closes_and_dates_aligned() {
        let series = PriceSeries::from_closes(day(0), &[10.0, 20.0]);
        assert_eq!(series.closes(), vec![10.0, 20.0]);
        assert_eq!(series.dates(), vec![day(0), day(1)]);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_duplicate_dates_rejected() {
        PriceSeries::new(vec![
            PricePoint::new(day(0), 100.0),
            PricePoint::new(day(0), 101.0),
        ]);
    }

    #[test]
    #[should_panic(expected = "finite positive")]
    fn test_non_positive_close_rejected() {
        PriceSeries::new(vec![PricePoint::new(day(0), 0.0)]);
    }

    #[test]
    #[should_panic(expected = "finite positive")]
    fn test_nan_close_rejected() {
        PriceSeries::new(vec![PricePoint::new(day(0), f64::NAN)]);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new(vec![]);
        assert!(series.is_empty());
        assert_eq!(series.last_close(), None);
        assert_eq!(series.first(), None);
    }

    #[test]
    fn test_raw_series() {
        let raw = RawSeries::new(
            "ACME",
            vec![
                RawPoint::new(day(0), Some(100.0)),
                RawPoint::new(day(1), None),
            ],
        );
        assert_eq!(raw.symbol, "ACME");
        assert_eq!(raw.len(), 2);
        assert!(!raw.is_empty());
    }
}
