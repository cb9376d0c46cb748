//! Binomial lattice construction and terminal valuation

pub mod config;
pub mod params;
pub mod pricer;
pub mod tree;

pub use config::{LatticeConfig, PathDependencePolicy};
pub use params::CrrParameters;
pub use pricer::{price, BinomialPricer, LatticeValuation, LatticeWarnings};
pub use tree::PriceLattice;
