//! Option taxonomy: kinds, payoff helpers and contracts

pub mod contract;
pub mod kind;
pub mod payoffs;

pub use contract::{OptionContract, OptionTerms};
pub use kind::{BarrierDirection, BarrierSpec, Flavor, KnockType, OptionKind};

use crate::error::LatticeResult;
use crate::market::AssetView;

/// Build an option of any kind; `barrier` is required for the eight barrier kinds
pub fn create_option(
    kind: OptionKind,
    asset: &AssetView,
    strike: f64,
    maturity_days: u32,
    barrier: Option<f64>,
) -> LatticeResult<OptionContract> {
    OptionContract::new(
        asset,
        OptionTerms {
            kind,
            strike,
            days_to_maturity: maturity_days,
            barrier,
        },
    )
}
