//! Basic statistical functions over f64 slices.
//!
//! All functions return `Option` rather than panicking or producing NaN
//! on degenerate input.

/// Arithmetic mean of a slice. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (N-1 denominator). Requires at least 2 values.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (N-1 denominator). Requires at least 2 values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// One-step simple returns: (p[t] - p[t-1]) / p[t-1].
///
/// Pairs with a zero base price are skipped rather than dividing by
/// zero; a series of N prices yields at most N-1 returns.
pub fn returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[5.0]), Some(5.0));
    }

    #[test]
    fn test_sample_variance() {
        // Known sample: variance of {2, 4, 4, 4, 5, 5, 7, 9} is 32/7.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let var = sample_variance(&values).unwrap();
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_needs_two() {
        assert_eq!(sample_variance(&[]), None);
        assert_eq!(sample_variance(&[1.0]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        // Sample variance of 1..5 is 2.5.
        assert!((sample_std_dev(&values).unwrap() - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_returns() {
        let prices = [100.0, 110.0, 99.0];
        let r = returns(&prices);
        assert_eq!(r.len(), 2);
        assert!((r[0] - 0.10).abs() < 1e-12);
        assert!((r[1] - (-0.10)).abs() < 1e-12);
    }

    #[test]
    fn test_returns_skips_zero_base() {
        let prices = [0.0, 10.0, 20.0];
        let r = returns(&prices);
        assert_eq!(r.len(), 1);
        assert!((r[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_returns_short_input() {
        assert!(returns(&[]).is_empty());
        assert!(returns(&[42.0]).is_empty());
    }
}
