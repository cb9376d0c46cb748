// src/market/asset.rs
//! Underlying asset with an append-only, timestamped price history
//!
//! # History Model
//!
//! Prices are stored as an ordered sequence of `(timestamp, price)` pairs
//! rather than a timestamp-keyed map: insertion order is authoritative, so two
//! updates inside the same clock tick are both kept. Timestamps are clamped so
//! they never decrease, even if the wall clock steps backwards.
//!
//! # Path Statistics
//!
//! Barrier and lookback payoffs read the running extremes of the full history:
//! ```text
//! Mt = max(S_0, S_1, ..., S_t)
//! mt = min(S_0, S_1, ..., S_t)
//! ```

use crate::error::{validation::*, LatticeResult};
use chrono::{DateTime, Utc};
use statrs::statistics::Statistics;
use std::fmt;

/// One observed price of the underlying
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Underlying asset: name, initial price, current price and full history.
///
/// The history is never empty and its last entry always equals
/// [`Asset::current_price`].
#[derive(Debug, Clone)]
pub struct Asset {
    name: String,
    initial_price: f64,
    current_price: f64,
    history: Vec<PricePoint>,
}

impl Asset {
    /// Create an asset whose history is seeded with `initial_price` at the current time
    pub fn new(name: impl Into<String>, initial_price: f64) -> LatticeResult<Self> {
        Self::new_at(name, initial_price, Utc::now())
    }

    /// Create an asset with an explicit clock reading for the first history entry.
    ///
    /// Only finiteness is checked: zero or negative seeds are accepted, unlike
    /// [`crate::market::set_price`], and surface later as an `InvalidArgument`
    /// for `spot` when a lattice is built.
    pub fn new_at(
        name: impl Into<String>,
        initial_price: f64,
        timestamp: DateTime<Utc>,
    ) -> LatticeResult<Self> {
        validate_finite("initial_price", initial_price)?;

        let name = name.into();
        tracing::debug!(asset = %name, initial_price, "asset created");

        Ok(Asset {
            name,
            initial_price,
            current_price: initial_price,
            history: vec![PricePoint {
                timestamp,
                price: initial_price,
            }],
        })
    }

    /// Record a new current price at the current time. No validation happens here;
    /// see [`crate::market::set_price`] for the checked endpoint.
    pub fn set_current_price(&mut self, value: f64) {
        self.set_current_price_at(value, Utc::now());
    }

    /// Record a new current price with an explicit clock reading
    pub fn set_current_price_at(&mut self, value: f64, timestamp: DateTime<Utc>) {
        let timestamp = match self.history.last() {
            Some(last) if timestamp < last.timestamp => last.timestamp,
            _ => timestamp,
        };

        self.current_price = value;
        self.history.push(PricePoint {
            timestamp,
            price: value,
        });
        tracing::trace!(asset = %self.name, price = value, len = self.history.len(), "price recorded");
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Read-only view of the full history, oldest first
    pub fn price_history(&self) -> &[PricePoint] {
        &self.history
    }

    /// Prices of the history, oldest first
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().map(|point| point.price)
    }

    /// Running historical high `Mt`
    pub fn running_max(&self) -> f64 {
        Statistics::max(self.prices())
    }

    /// Running historical low `mt`
    pub fn running_min(&self) -> f64 {
        Statistics::min(self.prices())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Asset: {}", self.name)?;
        writeln!(f, "    Initial price: {}", self.initial_price)?;
        writeln!(f, "    Current price: {}", self.current_price)?;
        write!(f, "    Price history:")?;
        for point in &self.history {
            write!(
                f,
                "\n        {}: {}",
                point.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
                point.price
            )?;
        }
        Ok(())
    }
}
