// src/options/contract.rs
use super::kind::{Flavor, OptionKind};
use super::payoffs::{barrier_gate, barrier_payoff, intrinsic, lookback_payoff};
use crate::error::{validation::*, LatticeError, LatticeResult};
use crate::market::AssetView;
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Numeric terms of an option, validated when the contract is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionTerms {
    pub kind: OptionKind,
    pub strike: f64,
    pub days_to_maturity: u32,
    /// Required for the eight barrier kinds, ignored otherwise
    pub barrier: Option<f64>,
}

impl OptionTerms {
    pub fn new(kind: OptionKind, strike: f64, days_to_maturity: u32) -> Self {
        OptionTerms {
            kind,
            strike,
            days_to_maturity,
            barrier: None,
        }
    }

    pub fn with_barrier(mut self, level: f64) -> Self {
        self.barrier = Some(level);
        self
    }

    /// Validate the terms, returning the barrier level to store
    pub fn validate(&self) -> LatticeResult<Option<f64>> {
        validate_positive("strike", self.strike)?;

        if !self.kind.is_barrier() {
            if let Some(level) = self.barrier {
                tracing::debug!(kind = %self.kind, level, "barrier level ignored for non-barrier kind");
            }
            return Ok(None);
        }

        let level = self.barrier.ok_or_else(|| {
            LatticeError::invalid(
                "barrier",
                format!("a barrier level is required for {}", self.kind),
            )
        })?;
        validate_non_negative("barrier", level)?;
        Ok(Some(level))
    }
}

/// An option written on a shared asset.
///
/// The contract never changes after construction; its live [`payoff`](Self::payoff)
/// moves only because the asset's price history does.
#[derive(Debug, Clone)]
pub struct OptionContract {
    kind: OptionKind,
    strike: f64,
    days_to_maturity: u32,
    maturity: DateTime<Utc>,
    barrier: Option<f64>,
    asset: AssetView,
}

impl OptionContract {
    /// Build a contract issued now
    pub fn new(asset: &AssetView, terms: OptionTerms) -> LatticeResult<Self> {
        Self::issued_at(asset, terms, Utc::now())
    }

    /// Build a contract whose maturity is counted from `issued_at`
    pub fn issued_at(
        asset: &AssetView,
        terms: OptionTerms,
        issued_at: DateTime<Utc>,
    ) -> LatticeResult<Self> {
        let barrier = terms.validate()?;

        let maturity = Duration::try_days(i64::from(terms.days_to_maturity))
            .and_then(|delta| issued_at.checked_add_signed(delta))
            .ok_or_else(|| {
                LatticeError::invalid(
                    "days_to_maturity",
                    format!(
                        "{} days from {} is outside the supported calendar",
                        terms.days_to_maturity, issued_at
                    ),
                )
            })?;

        tracing::debug!(
            kind = %terms.kind,
            strike = terms.strike,
            days = terms.days_to_maturity,
            barrier = ?barrier,
            "option created"
        );

        Ok(OptionContract {
            kind: terms.kind,
            strike: terms.strike,
            days_to_maturity: terms.days_to_maturity,
            maturity,
            barrier,
            asset: asset.clone(),
        })
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn flavor(&self) -> Flavor {
        self.kind.flavor()
    }

    pub fn strike(&self) -> f64 {
        self.strike
    }

    pub fn days_to_maturity(&self) -> u32 {
        self.days_to_maturity
    }

    pub fn maturity(&self) -> DateTime<Utc> {
        self.maturity
    }

    pub fn barrier(&self) -> Option<f64> {
        self.barrier
    }

    pub fn asset(&self) -> &AssetView {
        &self.asset
    }

    /// Running historical high `Mt` of the underlying
    pub fn running_max(&self) -> f64 {
        self.asset.running_max()
    }

    /// Running historical low `mt` of the underlying
    pub fn running_min(&self) -> f64 {
        self.asset.running_min()
    }

    /// Vanilla intrinsic value at the asset's current price
    pub fn base_payoff(&self) -> f64 {
        intrinsic(self.flavor(), self.asset.current_price(), self.strike)
    }

    /// Whether the knock condition currently holds; always true without a barrier
    pub fn gate_open(&self) -> bool {
        match (self.kind.barrier(), self.barrier) {
            (Some(spec), Some(level)) => barrier_gate(
                spec,
                self.running_max(),
                self.running_min(),
                level,
            ),
            _ => true,
        }
    }

    /// Live payoff given the asset's price history so far
    pub fn payoff(&self) -> f64 {
        let asset = self.asset.borrow();
        let spot = asset.current_price();

        if self.kind.is_lookback() {
            return lookback_payoff(
                self.flavor(),
                asset.running_max(),
                asset.running_min(),
                self.strike,
            );
        }

        match (self.kind.barrier(), self.barrier) {
            (Some(spec), Some(level)) => barrier_payoff(
                self.flavor(),
                spec,
                spot,
                self.strike,
                asset.running_max(),
                asset.running_min(),
                level,
            ),
            _ => intrinsic(self.flavor(), spot, self.strike),
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} option", self.kind)?;
        writeln!(f, "    Strike: {}", self.strike)?;
        writeln!(
            f,
            "    Maturity: {} days ({})",
            self.days_to_maturity,
            self.maturity.format("%Y-%m-%d %H:%M:%S")
        )?;
        if let Some(level) = self.barrier {
            writeln!(f, "    Barrier: {}", level)?;
            writeln!(f, "    Mt: {}", self.running_max())?;
            writeln!(f, "    mt: {}", self.running_min())?;
        }
        writeln!(f, "    Payoff: {}", self.payoff())?;
        write!(f, "    Underlying {}", self.asset)
    }
}
