//! # option-lattice: Path-Dependent Option Payoffs and Binomial Lattices
//!
//! A Rust library for modelling options on a shared underlying asset and
//! building Cox-Ross-Rubinstein binomial lattices for them.
//!
//! ## Key Features
//!
//! - **Shared Asset State**: one owner mutates prices, options observe the full history
//! - **Twelve Option Kinds**: vanilla, lookback and {Up,Down}×{In,Out} barriers on calls and puts
//! - **Flat Taxonomy**: flavor and barrier axes combine orthogonally, no inheritance chains
//! - **Binomial Lattice**: exact CRR recurrences with typed errors for degenerate inputs
//! - **Seeded Simulation**: reproducible GBM paths to drive an asset's history
//!
//! ## Quick Start
//!
//! ```rust
//! use option_lattice::lattice;
//! use option_lattice::market::create_asset;
//! use option_lattice::options::{create_option, OptionKind};
//!
//! let mut asset = create_asset("ACME", 100.0).expect("finite price");
//! asset.set_price(104.0).expect("positive price");
//!
//! let call = create_option(OptionKind::Call, &asset.view(), 100.0, 30, None)
//!     .expect("valid terms");
//! assert_eq!(call.payoff(), 4.0);
//!
//! // r = 0, σ = 20%, two half-year steps
//! let valuation = lattice::price(&call, 0.0, 0.2, 2, 0.5).expect("valid lattice");
//! assert_eq!(valuation.price_lattice.steps(), 2);
//! assert_eq!(valuation.terminal_payoffs.len(), 3);
//! ```
//!
//! ## Modeling Limitation
//!
//! Lattice terminal values use the vanilla call/put payoff of the option's
//! flavor, even for barrier and lookback kinds, and no backward induction is
//! performed. Such valuations carry
//! [`LatticeWarnings::PATH_DEPENDENT_FALLBACK`](lattice::LatticeWarnings), or
//! fail outright under [`PathDependencePolicy::Reject`](lattice::PathDependencePolicy).

// Module declarations
pub mod error;
pub mod lattice;
pub mod market;
pub mod math_utils;
pub mod options;
pub mod simulation;

// Re-export commonly used types for convenience
pub use error::{LatticeError, LatticeResult};
pub use lattice::{price, BinomialPricer, LatticeConfig, LatticeValuation};
pub use market::{create_asset, set_price, Asset, AssetHandle, AssetView};
pub use options::{create_option, OptionContract, OptionKind, OptionTerms};
