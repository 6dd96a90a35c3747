//! Series normalization: raw provider tables to clean price series.

use types::{AnalyticsError, AnalyticsResult, PricePoint, PriceSeries, RawSeries};

/// Clean a raw provider table into an ordered close-price series.
///
/// Rows are dropped, never imputed:
/// - rows with a missing, non-finite, or non-positive close;
/// - rows whose date is not strictly after the last kept date (the first
///   row at any date wins). Input order is preserved, never sorted.
///
/// Fails with [`AnalyticsError::NotAvailable`] when fewer than
/// `window + 1` points survive cleaning, the minimum for one full
/// rolling window plus a comparison point. The indicator engine may
/// assume this precondition from any series produced here.
pub fn normalize(raw: &RawSeries, window: usize) -> AnalyticsResult<PriceSeries> {
    let mut points = Vec::with_capacity(raw.len());
    let mut last_date = None;

    for row in &raw.points {
        let Some(close) = row.close else { continue };
        if !close.is_finite() || close <= 0.0 {
            continue;
        }
        if let Some(prev) = last_date
            && row.date <= prev
        {
            continue;
        }
        last_date = Some(row.date);
        points.push(PricePoint::new(row.date, close));
    }

    if points.len() < window + 1 {
        return Err(AnalyticsError::NotAvailable {
            symbol: raw.symbol.clone(),
        });
    }
    Ok(PriceSeries::new(points))
}
