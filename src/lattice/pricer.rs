// src/lattice/pricer.rs
use super::config::{LatticeConfig, PathDependencePolicy};
use super::params::CrrParameters;
use super::tree::PriceLattice;
use crate::error::{validation::*, LatticeError, LatticeResult};
use crate::options::payoffs::terminal_payoffs;
use crate::options::{OptionContract, OptionKind};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Modeling shortcuts taken while valuing an option
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LatticeWarnings: u32 {
        /// Barrier/lookback option valued with the vanilla call/put terminal payoff
        const PATH_DEPENDENT_FALLBACK = 1 << 0;
        /// Barrier gate is already closed on the observed history
        const LIVE_GATE_CLOSED        = 1 << 1;
    }
}

/// Result of one lattice pricing call.
///
/// Only the terminal row of `value_tree` is populated; earlier rows are
/// zero placeholders and no discounted present value is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeValuation {
    pub kind: OptionKind,
    pub strike: f64,
    pub parameters: CrrParameters,
    pub price_lattice: PriceLattice,
    pub value_tree: Vec<Vec<f64>>,
    pub terminal_payoffs: Vec<f64>,
    pub warnings: LatticeWarnings,
}

impl LatticeValuation {
    /// `(price lattice, terminal payoff row)`
    pub fn into_parts(self) -> (PriceLattice, Vec<f64>) {
        (self.price_lattice, self.terminal_payoffs)
    }

    /// True when the terminal payoffs are exact for the option's own kind
    pub fn is_exact(&self) -> bool {
        !self
            .warnings
            .contains(LatticeWarnings::PATH_DEPENDENT_FALLBACK)
    }
}

impl fmt::Display for LatticeValuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} option, strike {}: n={}, u={:.6}, d={:.6}, p={:.6}",
            self.kind,
            self.strike,
            self.price_lattice.steps(),
            self.parameters.up,
            self.parameters.down,
            self.parameters.probability
        )?;
        write!(f, "{}", self.price_lattice)?;
        let payoffs: Vec<String> = self
            .terminal_payoffs
            .iter()
            .map(|v| format!("{:.4}", v))
            .collect();
        write!(f, "    terminal payoffs: [{}]", payoffs.join(", "))?;
        if !self.is_exact() {
            write!(f, "\n    note: vanilla {:?} payoff used at maturity", self.kind.flavor())?;
        }
        Ok(())
    }
}

/// Cox-Ross-Rubinstein lattice pricer with a validated configuration
#[derive(Debug, Clone)]
pub struct BinomialPricer {
    config: LatticeConfig,
    parameters: CrrParameters,
}

impl BinomialPricer {
    pub fn new(config: LatticeConfig) -> LatticeResult<Self> {
        config.validate()?;
        let parameters =
            CrrParameters::new(config.risk_free_rate, config.volatility, config.step_size)?;
        Ok(BinomialPricer { config, parameters })
    }

    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    pub fn parameters(&self) -> &CrrParameters {
        &self.parameters
    }

    /// Build the lattice from the asset's current price and compute the
    /// terminal payoff row for `option`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the asset's current price is not finite and positive
    /// - `ModelingLimitation` for path-dependent kinds under [`PathDependencePolicy::Reject`]
    pub fn price(&self, option: &OptionContract) -> LatticeResult<LatticeValuation> {
        let kind = option.kind();
        let mut warnings = LatticeWarnings::empty();

        if kind.is_path_dependent() {
            if self.config.path_dependence == PathDependencePolicy::Reject {
                return Err(LatticeError::ModelingLimitation {
                    option_kind: kind.to_string(),
                    reason: "the lattice does not track running extremes; only a vanilla terminal payoff is available"
                        .to_string(),
                });
            }
            warnings |= LatticeWarnings::PATH_DEPENDENT_FALLBACK;
            if !option.gate_open() {
                warnings |= LatticeWarnings::LIVE_GATE_CLOSED;
            }
            tracing::warn!(
                kind = %kind,
                gate_open = option.gate_open(),
                "path-dependent option valued with vanilla terminal payoff"
            );
        }

        let spot = option.asset().current_price();
        validate_positive("spot", spot)?;

        let steps = self.config.steps;
        let price_lattice =
            PriceLattice::build(spot, self.parameters.up, self.parameters.down, steps)?;
        let payoffs = terminal_payoffs(kind.flavor(), option.strike(), price_lattice.terminal());

        let mut value_tree: Vec<Vec<f64>> = (0..steps).map(|i| vec![0.0; i + 1]).collect();
        value_tree.push(payoffs.clone());

        tracing::debug!(
            kind = %kind,
            spot,
            steps,
            strike = option.strike(),
            "lattice built"
        );

        Ok(LatticeValuation {
            kind,
            strike: option.strike(),
            parameters: self.parameters,
            price_lattice,
            value_tree,
            terminal_payoffs: payoffs,
            warnings,
        })
    }
}

/// Price `option` on a `step_count`-step lattice, flagging (not rejecting)
/// path-dependent kinds.
pub fn price(
    option: &OptionContract,
    risk_free_rate: f64,
    volatility: f64,
    step_count: usize,
    step_size: f64,
) -> LatticeResult<LatticeValuation> {
    BinomialPricer::new(LatticeConfig {
        risk_free_rate,
        volatility,
        steps: step_count,
        step_size,
        path_dependence: PathDependencePolicy::Flag,
    })?
    .price(option)
}
