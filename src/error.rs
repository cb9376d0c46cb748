// src/error.rs
use thiserror::Error;

/// Errors raised by asset, option and lattice operations.
///
/// Every failure is reported to the immediate caller; nothing is retried or
/// recovered inside the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// Mistyped or out-of-domain input at construction or call time
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    /// The lattice cannot represent the option's path dependence
    #[error("Modeling limitation for {option_kind}: {reason}")]
    ModelingLimitation { option_kind: String, reason: String },

    /// Lattice parameters that would yield NaN or a non-probability
    #[error("Numerically degenerate lattice ({quantity} = {value}): {reason}")]
    NumericDegenerate {
        quantity: String,
        value: f64,
        reason: String,
    },
}

impl LatticeError {
    pub(crate) fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        LatticeError::InvalidArgument {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// True for `InvalidArgument`, the only variant a caller can fix by re-prompting.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LatticeError::InvalidArgument { .. })
    }
}

/// Result type alias for option-lattice operations
pub type LatticeResult<T> = Result<T, LatticeError>;

/// Validation utilities
pub mod validation {
    use super::{LatticeError, LatticeResult};

    /// Upper bound on lattice depth; construction is O(N²) in time and memory.
    pub const MAX_LATTICE_STEPS: usize = 5_000;

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> LatticeResult<()> {
        if !value.is_finite() {
            Err(LatticeError::invalid(
                name,
                format!("{} must be finite (not NaN or infinite)", value),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and positive
    pub fn validate_positive(name: &str, value: f64) -> LatticeResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(LatticeError::invalid(
                name,
                format!("{} must be positive (> 0)", value),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is finite and non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> LatticeResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(LatticeError::invalid(
                name,
                format!("{} must be non-negative (≥ 0)", value),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate lattice step count
    pub fn validate_steps(steps: usize) -> LatticeResult<()> {
        if steps == 0 {
            Err(LatticeError::invalid("steps", "must be greater than 0"))
        } else if steps > MAX_LATTICE_STEPS {
            Err(LatticeError::invalid(
                "steps",
                format!(
                    "{} exceeds maximum allowed ({})",
                    steps, MAX_LATTICE_STEPS
                ),
            ))
        } else {
            Ok(())
        }
    }

    /// Validate that a derived quantity is a probability in [0, 1]
    pub fn validate_probability(name: &str, value: f64) -> LatticeResult<()> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            Err(LatticeError::NumericDegenerate {
                quantity: name.to_string(),
                value,
                reason: "risk-neutral probability must lie in [0, 1]".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
