// src/lattice/tree.rs
//! Recombining binomial price lattice
//!
//! # Layout
//!
//! The lattice has `N + 1` rows; row `i` holds `i + 1` nodes. Node `[i][j]` is
//! the price after `i - j` up-moves and `j` down-moves, so index 0 of every row
//! is the highest price:
//! ```text
//! S[i][j] = S0 * u^(i-j) * d^j
//! ```
//!
//! # Construction
//!
//! Row `i` is row `i - 1` with every node moved up, plus one extra node: the
//! last node of row `i - 1` moved down. This walks the same recombining
//! points as the closed form above without any `powi` calls.

use crate::error::{validation::*, LatticeResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceLattice {
    rows: Vec<Vec<f64>>,
}

impl PriceLattice {
    /// Build a `steps`-deep lattice rooted at `spot`.
    ///
    /// `steps` is bounded by [`MAX_LATTICE_STEPS`] since storage grows as N².
    pub fn build(spot: f64, up: f64, down: f64, steps: usize) -> LatticeResult<Self> {
        validate_steps(steps)?;
        validate_positive("spot", spot)?;
        validate_positive("up", up)?;
        validate_positive("down", down)?;

        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(steps + 1);
        rows.push(vec![spot]);

        for i in 1..=steps {
            let previous = &rows[i - 1];
            let mut row = Vec::with_capacity(i + 1);
            row.extend(previous.iter().map(|&price| price * up));
            row.push(previous[i - 1] * down);
            rows.push(row);
        }

        Ok(PriceLattice { rows })
    }

    /// Number of time steps `N`
    pub fn steps(&self) -> usize {
        self.rows.len() - 1
    }

    /// Root node, the spot price the lattice was seeded with
    pub fn spot(&self) -> f64 {
        self.rows[0][0]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Node `[i][j]`; `None` when `j > i` or `i > N`
    pub fn node(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Prices at maturity (row `N`), highest first
    pub fn terminal(&self) -> &[f64] {
        &self.rows[self.rows.len() - 1]
    }

    /// Largest relative deviation from the closed form `S0 u^(i-j) d^j`
    pub fn max_closed_form_error(&self, up: f64, down: f64) -> f64 {
        let spot = self.spot();
        let mut worst: f64 = 0.0;
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &price) in row.iter().enumerate() {
                let exact = spot * up.powi((i - j) as i32) * down.powi(j as i32);
                if exact != 0.0 {
                    worst = worst.max(((price - exact) / exact).abs());
                }
            }
        }
        worst
    }
}

impl fmt::Display for PriceLattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let nodes: Vec<String> = row.iter().map(|price| format!("{:.4}", price)).collect();
            writeln!(f, "    step {:>3}: [{}]", i, nodes.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape() {
        let lattice = PriceLattice::build(100.0, 1.1, 1.0 / 1.1, 5).unwrap();

        assert_eq!(lattice.steps(), 5);
        assert_eq!(lattice.rows().len(), 6);
        for (i, row) in lattice.rows().iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
        assert_eq!(lattice.spot(), 100.0);
        assert_eq!(lattice.node(2, 3), None);
        assert_eq!(lattice.node(6, 0), None);
    }

    #[test]
    fn test_build_rejects_bad_inputs() {
        let u = 1.2;
        for err in [
            PriceLattice::build(42.0, u, 1.0 / u, 0).unwrap_err(),
            PriceLattice::build(42.0, u, 1.0 / u, MAX_LATTICE_STEPS + 1).unwrap_err(),
            PriceLattice::build(0.0, u, 1.0 / u, 3).unwrap_err(),
            PriceLattice::build(f64::NAN, u, 1.0 / u, 3).unwrap_err(),
            PriceLattice::build(42.0, -u, 1.0 / u, 3).unwrap_err(),
        ] {
            assert!(err.is_invalid_argument(), "{}", err);
        }
    }

    #[test]
    fn test_two_step_reference() {
        let u = (0.2f64 * 0.5f64.sqrt()).exp();
        let d = 1.0 / u;
        let lattice = PriceLattice::build(100.0, u, d, 2).unwrap();
        let terminal = lattice.terminal();

        assert_relative_eq!(terminal[0], 132.68964411453442, epsilon = 1e-9);
        assert_relative_eq!(terminal[1], 100.0, epsilon = 1e-9);
        assert_relative_eq!(terminal[2], 75.36383164437648, epsilon = 1e-9);
    }

    #[test]
    fn test_recurrence_matches_closed_form() {
        let u = (0.35f64 * (1.0f64 / 252.0).sqrt()).exp();
        let lattice = PriceLattice::build(57.3, u, 1.0 / u, 250).unwrap();

        assert!(lattice.max_closed_form_error(u, 1.0 / u) < 1e-12);
    }

    #[test]
    fn test_rows_are_descending() {
        let lattice = PriceLattice::build(100.0, 1.05, 1.0 / 1.05, 20).unwrap();
        for row in lattice.rows() {
            assert!(row.windows(2).all(|w| w[0] > w[1]));
        }
    }
}
