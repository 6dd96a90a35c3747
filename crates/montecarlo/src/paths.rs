//! Forward path generation.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use types::{
    AnalyticsError, AnalyticsResult, PriceSeries, SimulationBundle, SimulationConfig,
    SimulationPath,
};

use crate::model::{MIN_FIT_POINTS, ReturnModel};

/// Draws `num_paths` forward paths from the distribution fitted to
/// `series`, using the caller's generator.
///
/// Each path starts at the last observed close and compounds one drawn
/// return per day: `price[t] = price[t-1] * (1 + shock)`. A zero
/// horizon yields single-price paths, the identity projection.
///
/// The horizon is unconstrained here; range limits apply at the
/// configuration boundary via [`SimulationConfig::validate`].
pub fn simulate_with_rng<R: Rng + ?Sized>(
    series: &PriceSeries,
    horizon_days: usize,
    num_paths: usize,
    rng: &mut R,
) -> AnalyticsResult<SimulationBundle> {
    let model = ReturnModel::fit(series)?;
    let start_price = series
        .last_close()
        .ok_or(AnalyticsError::InsufficientHistory {
            required: MIN_FIT_POINTS,
            actual: series.len(),
        })?;
    let normal = Normal::new(model.mu, model.sigma)
        .map_err(|e| AnalyticsError::InvalidConfig(format!("return distribution: {}", e)))?;

    let mut paths = Vec::with_capacity(num_paths);
    for _ in 0..num_paths {
        let mut prices = Vec::with_capacity(horizon_days + 1);
        let mut price = start_price;
        prices.push(price);
        for _ in 0..horizon_days {
            let shock = normal.sample(rng);
            price *= 1.0 + shock;
            prices.push(price);
        }
        paths.push(SimulationPath { prices });
    }

    Ok(SimulationBundle {
        start_price,
        mu: model.mu,
        sigma: model.sigma,
        horizon_days,
        paths,
    })
}

/// Runs a simulation per `config`.
///
/// A set seed makes the run byte-reproducible: the same series,
/// parameters, and seed produce an identical bundle every time. Without
/// a seed the draw comes from the thread-local generator.
pub fn simulate(
    series: &PriceSeries,
    config: &SimulationConfig,
) -> AnalyticsResult<SimulationBundle> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            simulate_with_rng(series, config.horizon_days, config.num_paths, &mut rng)
        }
        None => simulate_with_rng(
            series,
            config.horizon_days,
            config.num_paths,
            &mut rand::thread_rng(),
        ),
    }
}
