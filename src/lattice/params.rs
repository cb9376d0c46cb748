// src/lattice/params.rs
//! Cox-Ross-Rubinstein lattice parameters
//!
//! # Formulas
//!
//! ```text
//! u = exp(σ √Δt)
//! d = 1 / u
//! p = (exp(r Δt) - d) / (u - d)
//! ```
//!
//! `p` is the risk-neutral probability of an up-move. It is only a probability
//! when `d ≤ exp(r Δt) ≤ u`; outside that band (large rates against small
//! volatility) the lattice admits arbitrage and is rejected.

use crate::error::{validation::*, LatticeError, LatticeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParameters {
    pub up: f64,
    pub down: f64,
    pub probability: f64,
    /// One-step risk-free growth factor exp(r Δt)
    pub growth: f64,
}

impl CrrParameters {
    pub fn new(risk_free_rate: f64, volatility: f64, step_size: f64) -> LatticeResult<Self> {
        validate_finite("risk_free_rate", risk_free_rate)?;
        validate_positive("volatility", volatility)?;
        validate_positive("step_size", step_size)?;

        let up = (volatility * step_size.sqrt()).exp();
        let down = 1.0 / up;
        let spread = up - down;
        if spread <= 0.0 || !spread.is_finite() {
            return Err(LatticeError::NumericDegenerate {
                quantity: "u - d".to_string(),
                value: spread,
                reason: "up and down factors collapse; volatility × √step_size is too small or too large"
                    .to_string(),
            });
        }

        let growth = (risk_free_rate * step_size).exp();
        let probability = (growth - down) / spread;
        validate_probability("p", probability)?;

        tracing::debug!(u = up, d = down, p = probability, growth, "CRR parameters");

        Ok(CrrParameters {
            up,
            down,
            probability,
            growth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_parameters() {
        let params = CrrParameters::new(0.0, 0.2, 0.5).unwrap();

        assert_relative_eq!(params.up, 1.151909910168909, epsilon = 1e-12);
        assert_relative_eq!(params.down, 0.8681234453945849, epsilon = 1e-12);
        assert_relative_eq!(params.probability, 0.4647034688926673, epsilon = 1e-12);
        assert_relative_eq!(params.growth, 1.0);
        assert_relative_eq!(params.up * params.down, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_positive_rate() {
        let params = CrrParameters::new(0.05, 0.3, 0.25).unwrap();
        assert_relative_eq!(params.probability, 0.504341507567618, epsilon = 1e-12);
    }

    #[test]
    fn test_probability_above_one_rejected() {
        // exp(0.5) far exceeds u = exp(0.01)
        let err = CrrParameters::new(0.5, 0.01, 1.0).unwrap_err();
        match err {
            LatticeError::NumericDegenerate { quantity, value, .. } => {
                assert_eq!(quantity, "p");
                assert!(value > 1.0);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_probability_rejected() {
        let err = CrrParameters::new(-0.5, 0.01, 1.0).unwrap_err();
        assert!(matches!(err, LatticeError::NumericDegenerate { .. }));
    }

    #[test]
    fn test_vanishing_spread_rejected() {
        let err = CrrParameters::new(0.0, 1e-300, 1e-300).unwrap_err();
        assert!(matches!(err, LatticeError::NumericDegenerate { ref quantity, .. } if quantity == "u - d"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(CrrParameters::new(0.0, 0.0, 0.5).unwrap_err().is_invalid_argument());
        assert!(CrrParameters::new(0.0, 0.2, -1.0).unwrap_err().is_invalid_argument());
        assert!(CrrParameters::new(f64::INFINITY, 0.2, 0.5).unwrap_err().is_invalid_argument());
    }
}
