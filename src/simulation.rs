// src/simulation.rs
//! Seeded price-path generation for driving an asset's history
//!
//! # Model
//!
//! Geometric Brownian motion, stepped with its exact solution:
//! ```text
//! S_{t+Δt} = S_t * exp((μ - σ²/2)Δt + σ√Δt * Z),   Z ~ N(0,1)
//! ```
//!
//! Draws come from a `StdRng` seeded with `SimulationConfig::seed`, so the same
//! configuration always yields the same path.

use crate::error::{validation::*, LatticeError, LatticeResult};
use crate::market::AssetHandle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub steps: usize,
    pub step_size: f64, // Year fraction per step
    pub drift: f64,
    pub volatility: f64,
    pub seed: u64,
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> LatticeResult<()> {
        if self.steps == 0 {
            return Err(LatticeError::invalid("steps", "must be greater than 0"));
        }
        validate_positive("step_size", self.step_size)?;
        validate_finite("drift", self.drift)?;
        validate_non_negative("volatility", self.volatility)?;
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            steps: 30,
            step_size: 1.0 / 252.0,
            drift: 0.0,
            volatility: 0.2,
            seed: 12345,
        }
    }
}

fn normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Exact GBM step from `spot` given a standard normal draw
pub fn gbm_step(spot: f64, drift: f64, volatility: f64, dt: f64, z: f64) -> f64 {
    spot * ((drift - 0.5 * volatility * volatility) * dt + volatility * dt.sqrt() * z).exp()
}

/// Simulate `config.steps` moves from `spot`; the returned path starts at `spot`
pub fn simulate_path(spot: f64, config: &SimulationConfig) -> LatticeResult<Vec<f64>> {
    validate_positive("spot", spot)?;
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut path = Vec::with_capacity(config.steps + 1);
    path.push(spot);

    let mut current = spot;
    for _ in 0..config.steps {
        let z = normal_draw(&mut rng);
        current = gbm_step(current, config.drift, config.volatility, config.step_size, z);
        path.push(current);
    }

    Ok(path)
}

/// Push every simulated price after the first through the checked update.
///
/// Returns the number of updates applied. Stops at the first rejected price,
/// leaving the updates made so far in place.
pub fn apply_path(asset: &mut AssetHandle, path: &[f64]) -> LatticeResult<usize> {
    let mut applied = 0;
    for &price in path.iter().skip(1) {
        asset.set_price(price)?;
        applied += 1;
    }
    tracing::debug!(updates = applied, spot = asset.current_price(), "simulated path applied");
    Ok(applied)
}

/// Simulate from the asset's current price and record the path in its history
pub fn simulate_into(asset: &mut AssetHandle, config: &SimulationConfig) -> LatticeResult<usize> {
    let path = simulate_path(asset.current_price(), config)?;
    apply_path(asset, &path)
}
