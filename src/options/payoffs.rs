//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! Payoffs are split along two independent axes so that each concrete kind is
//! a combination rather than a separate implementation.
//!
//! ## Flavor (intrinsic value)
//! - **Call**: max(S - K, 0)
//! - **Put**: max(K - S, 0)
//!
//! ## Lookback
//! - **Call**: max(M_t - K, 0), M_t = running maximum of the history
//! - **Put**: max(K - m_t, 0), m_t = running minimum of the history
//!
//! ## Barrier gate
//! The intrinsic value is kept only while the gate holds, else it is 0:
//!
//! | Kind     | Gate        |
//! |----------|-------------|
//! | Up-In    | M_t ≥ H     |
//! | Up-Out   | M_t ≤ H     |
//! | Down-In  | m_t ≤ H     |
//! | Down-Out | m_t ≥ H     |
//!
//! Gates are evaluated over the history observed so far, never a forecast.

use super::kind::{BarrierDirection, BarrierSpec, Flavor, KnockType};

/// Intrinsic value of a vanilla call or put at `spot`
pub fn intrinsic(flavor: Flavor, spot: f64, strike: f64) -> f64 {
    match flavor {
        Flavor::Call => (spot - strike).max(0.0),
        Flavor::Put => (strike - spot).max(0.0),
    }
}

/// Lookback payoff: the strike is compared with the favourable running extreme
pub fn lookback_payoff(flavor: Flavor, running_max: f64, running_min: f64, strike: f64) -> f64 {
    match flavor {
        Flavor::Call => intrinsic(Flavor::Call, running_max, strike),
        Flavor::Put => intrinsic(Flavor::Put, running_min, strike),
    }
}

/// Knock condition for a barrier, given the path extremes so far
pub fn barrier_gate(spec: BarrierSpec, running_max: f64, running_min: f64, level: f64) -> bool {
    match (spec.direction, spec.knock) {
        (BarrierDirection::Up, KnockType::In) => running_max >= level,
        (BarrierDirection::Up, KnockType::Out) => running_max <= level,
        (BarrierDirection::Down, KnockType::In) => running_min <= level,
        (BarrierDirection::Down, KnockType::Out) => running_min >= level,
    }
}

/// Barrier payoff: intrinsic value at `spot`, zeroed when the gate is closed
pub fn barrier_payoff(
    flavor: Flavor,
    spec: BarrierSpec,
    spot: f64,
    strike: f64,
    running_max: f64,
    running_min: f64,
    level: f64,
) -> f64 {
    if barrier_gate(spec, running_max, running_min, level) {
        intrinsic(flavor, spot, strike)
    } else {
        0.0
    }
}

/// Vanilla payoffs across a row of lattice prices
pub fn terminal_payoffs(flavor: Flavor, strike: f64, prices: &[f64]) -> Vec<f64> {
    prices
        .iter()
        .map(|&spot| intrinsic(flavor, spot, strike))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP_IN: BarrierSpec = BarrierSpec {
        direction: BarrierDirection::Up,
        knock: KnockType::In,
    };
    const UP_OUT: BarrierSpec = BarrierSpec {
        direction: BarrierDirection::Up,
        knock: KnockType::Out,
    };
    const DOWN_IN: BarrierSpec = BarrierSpec {
        direction: BarrierDirection::Down,
        knock: KnockType::In,
    };
    const DOWN_OUT: BarrierSpec = BarrierSpec {
        direction: BarrierDirection::Down,
        knock: KnockType::Out,
    };

    #[test]
    fn test_intrinsic() {
        assert_eq!(intrinsic(Flavor::Call, 110.0, 100.0), 10.0);
        assert_eq!(intrinsic(Flavor::Call, 90.0, 100.0), 0.0);
        assert_eq!(intrinsic(Flavor::Put, 90.0, 100.0), 10.0);
        assert_eq!(intrinsic(Flavor::Put, 110.0, 100.0), 0.0);
    }

    #[test]
    fn test_lookback_uses_extremes() {
        assert_eq!(lookback_payoff(Flavor::Call, 130.0, 70.0, 100.0), 30.0);
        assert_eq!(lookback_payoff(Flavor::Put, 130.0, 70.0, 100.0), 30.0);
        assert_eq!(lookback_payoff(Flavor::Call, 95.0, 70.0, 100.0), 0.0);
    }

    #[test]
    fn test_gates() {
        // Mt = 120, mt = 80
        assert!(barrier_gate(UP_IN, 120.0, 80.0, 110.0));
        assert!(!barrier_gate(UP_OUT, 120.0, 80.0, 110.0));
        assert!(barrier_gate(DOWN_IN, 120.0, 80.0, 85.0));
        assert!(!barrier_gate(DOWN_OUT, 120.0, 80.0, 85.0));

        assert!(!barrier_gate(UP_IN, 120.0, 80.0, 150.0));
        assert!(barrier_gate(UP_OUT, 120.0, 80.0, 150.0));
        assert!(!barrier_gate(DOWN_IN, 120.0, 80.0, 50.0));
        assert!(barrier_gate(DOWN_OUT, 120.0, 80.0, 50.0));
    }

    #[test]
    fn test_gates_at_boundary_both_hold() {
        assert!(barrier_gate(UP_IN, 100.0, 90.0, 100.0));
        assert!(barrier_gate(UP_OUT, 100.0, 90.0, 100.0));
        assert!(barrier_gate(DOWN_IN, 100.0, 90.0, 90.0));
        assert!(barrier_gate(DOWN_OUT, 100.0, 90.0, 90.0));
    }

    #[test]
    fn test_knocked_out_barrier_pays_nothing() {
        // Up-and-out call, barrier 90, history touched 95
        let payoff = barrier_payoff(Flavor::Call, UP_OUT, 150.0, 100.0, 95.0, 80.0, 90.0);
        assert_eq!(payoff, 0.0);

        let payoff = barrier_payoff(Flavor::Call, UP_IN, 150.0, 100.0, 95.0, 80.0, 90.0);
        assert_eq!(payoff, 50.0);
    }

    #[test]
    fn test_terminal_payoffs() {
        let prices = [132.5, 100.0, 75.0];
        assert_eq!(terminal_payoffs(Flavor::Call, 100.0, &prices), vec![32.5, 0.0, 0.0]);
        assert_eq!(terminal_payoffs(Flavor::Put, 100.0, &prices), vec![0.0, 0.0, 25.0]);
    }
}
