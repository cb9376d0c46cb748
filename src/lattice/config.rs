// src/lattice/config.rs
use crate::error::{validation::*, LatticeResult};

/// What the pricer does when asked to value a barrier or lookback option.
///
/// The lattice cannot track per-path running extremes, so terminal values for
/// these kinds fall back to the vanilla call/put formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathDependencePolicy {
    /// Price with the vanilla fallback and raise a warning flag
    #[default]
    Flag,
    /// Refuse with `LatticeError::ModelingLimitation`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig {
    pub risk_free_rate: f64,
    pub volatility: f64,
    pub steps: usize,
    pub step_size: f64, // Year fraction per step (0.25 = one quarter)
    pub path_dependence: PathDependencePolicy,
}

impl LatticeConfig {
    /// Validate the lattice configuration
    pub fn validate(&self) -> LatticeResult<()> {
        validate_steps(self.steps)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_positive("volatility", self.volatility)?;
        validate_positive("step_size", self.step_size)?;
        Ok(())
    }

    /// Total time covered by the lattice, in years
    pub fn horizon(&self) -> f64 {
        self.steps as f64 * self.step_size
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        LatticeConfig {
            risk_free_rate: 0.0,
            volatility: 0.2,
            steps: 2,
            step_size: 0.5,
            path_dependence: PathDependencePolicy::Flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = LatticeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.horizon(), 1.0);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let cases = [
            LatticeConfig { steps: 0, ..Default::default() },
            LatticeConfig { volatility: 0.0, ..Default::default() },
            LatticeConfig { volatility: -0.2, ..Default::default() },
            LatticeConfig { step_size: 0.0, ..Default::default() },
            LatticeConfig { risk_free_rate: f64::NAN, ..Default::default() },
        ];

        for config in cases {
            let err = config.validate().unwrap_err();
            assert!(err.is_invalid_argument(), "{:?} gave {}", config, err);
        }
    }
}
