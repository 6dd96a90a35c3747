//! Monte Carlo price projection.
//!
//! # Modules
//!
//! - [`model`] - Fitting a normal return distribution to history
//! - [`paths`] - Drawing independent forward paths from the fit
//!
//! Paths compound daily simple returns drawn i.i.d. from the fitted
//! normal. That ignores volatility clustering and fat tails on purpose:
//! the output is a plausible outcome range, not a price prediction.
//!
//! Seeded runs are byte-reproducible: the same series, parameters, and
//! seed produce identical bundles on every run.

pub mod model;
pub mod paths;

pub use model::ReturnModel;
pub use paths::{simulate, simulate_with_rng};
