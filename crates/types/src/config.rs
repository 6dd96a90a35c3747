//! Analytics and simulation configuration.

use crate::error::{AnalyticsError, AnalyticsResult};
use serde::{Deserialize, Serialize};

// =============================================================================
// Recognized option ranges
// =============================================================================

/// Smallest accepted rolling window.
pub const WINDOW_MIN: usize = 10;
/// Largest accepted rolling window.
pub const WINDOW_MAX: usize = 200;
/// Default rolling window.
pub const DEFAULT_WINDOW: usize = 50;

/// Smallest accepted sigma multiplier.
pub const Z_THRESHOLD_MIN: f64 = 1.0;
/// Largest accepted sigma multiplier.
pub const Z_THRESHOLD_MAX: f64 = 3.0;
/// Default sigma multiplier.
pub const DEFAULT_Z_THRESHOLD: f64 = 2.0;

/// Shortest accepted simulation horizon in days.
pub const HORIZON_MIN: usize = 30;
/// Longest accepted simulation horizon in days.
pub const HORIZON_MAX: usize = 365;
/// Default simulation horizon in days.
pub const DEFAULT_HORIZON_DAYS: usize = 180;

/// Default number of simulated paths.
pub const DEFAULT_NUM_PATHS: usize = 200;

// =============================================================================
// Analytics configuration
// =============================================================================

/// Parameters for the indicator engine and classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Trailing rolling-window length for mean/std/z-score/bands.
    pub window: usize,
    /// Sigma multiplier for the strict classification threshold and the
    /// bands.
    pub z_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl AnalyticsConfig {
    /// Create a configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rolling window length.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the sigma multiplier.
    pub fn with_z_threshold(mut self, z_threshold: f64) -> Self {
        self.z_threshold = z_threshold;
        self
    }

    /// Check the recognized option ranges.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(WINDOW_MIN..=WINDOW_MAX).contains(&self.window) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "window must be within {}..={}, got {}",
                WINDOW_MIN, WINDOW_MAX, self.window
            )));
        }
        if !self.z_threshold.is_finite()
            || !(Z_THRESHOLD_MIN..=Z_THRESHOLD_MAX).contains(&self.z_threshold)
        {
            return Err(AnalyticsError::InvalidConfig(format!(
                "z_threshold must be within {}..={}, got {}",
                Z_THRESHOLD_MIN, Z_THRESHOLD_MAX, self.z_threshold
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Simulation configuration
// =============================================================================

/// Parameters for the Monte Carlo simulator.
///
/// `validate()` is the external configuration boundary; the simulate
/// operation itself accepts any `horizon_days >= 0` so callers can
/// exercise the zero-horizon identity directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Days to project forward.
    pub horizon_days: usize,
    /// Number of independent paths to draw.
    pub num_paths: usize,
    /// Seed for reproducible runs; `None` draws from the process-wide
    /// generator.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            num_paths: DEFAULT_NUM_PATHS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the projection horizon in days.
    pub fn with_horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Set the number of paths.
    pub fn with_num_paths(mut self, num_paths: usize) -> Self {
        self.num_paths = num_paths;
        self
    }

    /// Set the seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the recognized option ranges.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !(HORIZON_MIN..=HORIZON_MAX).contains(&self.horizon_days) {
            return Err(AnalyticsError::InvalidConfig(format!(
                "horizon_days must be within {}..={}, got {}",
                HORIZON_MIN, HORIZON_MAX, self.horizon_days
            )));
        }
        if self.num_paths == 0 {
            return Err(AnalyticsError::InvalidConfig(
                "num_paths must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.window, 50);
        assert_eq!(config.z_threshold, 2.0);
        let sim = SimulationConfig::default();
        assert_eq!(sim.horizon_days, 180);
        assert_eq!(sim.num_paths, 200);
        assert_eq!(sim.seed, None);
    }

    #[test]
    fn test_window_range() {
        assert!(AnalyticsConfig::new().with_window(10).validate().is_ok());
        assert!(AnalyticsConfig::new().with_window(200).validate().is_ok());
        assert!(AnalyticsConfig::new().with_window(9).validate().is_err());
        assert!(AnalyticsConfig::new().with_window(201).validate().is_err());
    }

    #[test]
    fn test_z_threshold_range() {
        assert!(AnalyticsConfig::new().with_z_threshold(1.0).validate().is_ok());
        assert!(AnalyticsConfig::new().with_z_threshold(3.0).validate().is_ok());
        assert!(AnalyticsConfig::new().with_z_threshold(0.9).validate().is_err());
        assert!(AnalyticsConfig::new().with_z_threshold(3.1).validate().is_err());
        assert!(AnalyticsConfig::new().with_z_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_simulation_ranges() {
        assert!(SimulationConfig::new().with_horizon_days(30).validate().is_ok());
        assert!(SimulationConfig::new().with_horizon_days(365).validate().is_ok());
        assert!(SimulationConfig::new().with_horizon_days(29).validate().is_err());
        assert!(SimulationConfig::new().with_horizon_days(366).validate().is_err());
        assert!(SimulationConfig::new().with_num_paths(0).validate().is_err());
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AnalyticsConfig::new().with_window(5).validate().unwrap_err();
        assert!(err.to_string().contains("window must be within 10..=200"));
    }
}
