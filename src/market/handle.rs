// src/market/handle.rs
//! Shared ownership of an [`Asset`]
//!
//! One [`AssetHandle`] owns each asset and is the only way to mutate it.
//! Options hold an [`AssetView`], a cloneable read-only capability that sees
//! every price update made through the handle. Both are `!Send`: the crate is
//! single-threaded and needs no locking.

use super::asset::Asset;
use crate::error::{validation::*, LatticeError, LatticeResult};
use chrono::{DateTime, Utc};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Owning, mutating handle to an asset
#[derive(Debug)]
pub struct AssetHandle {
    inner: Rc<RefCell<Asset>>,
}

impl AssetHandle {
    pub fn new(asset: Asset) -> Self {
        AssetHandle {
            inner: Rc::new(RefCell::new(asset)),
        }
    }

    /// Read-only view to hand to options
    pub fn view(&self) -> AssetView {
        AssetView {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn borrow(&self) -> Ref<'_, Asset> {
        self.inner.borrow()
    }

    pub fn current_price(&self) -> f64 {
        self.inner.borrow().current_price()
    }

    /// Record a new price after checking it is finite and strictly positive
    pub fn set_price(&mut self, value: f64) -> LatticeResult<()> {
        validate_positive("price", value)?;
        self.set_price_unchecked(value)
    }

    /// Checked update with an explicit clock reading
    pub fn set_price_at(&mut self, value: f64, timestamp: DateTime<Utc>) -> LatticeResult<()> {
        validate_positive("price", value)?;
        self.asset_mut()?.set_current_price_at(value, timestamp);
        Ok(())
    }

    /// Record a new price with no value validation.
    ///
    /// Still fails if a [`Ref`] obtained from this handle or one of its views
    /// is alive, since the history cannot change under a reader.
    pub fn set_price_unchecked(&mut self, value: f64) -> LatticeResult<()> {
        self.asset_mut()?.set_current_price(value);
        Ok(())
    }

    fn asset_mut(&self) -> LatticeResult<RefMut<'_, Asset>> {
        self.inner.try_borrow_mut().map_err(|_| {
            LatticeError::invalid(
                "asset",
                "price history is borrowed by a reader; drop outstanding borrows before updating",
            )
        })
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.borrow(), f)
    }
}

/// Non-owning, read-only reference to an asset
#[derive(Debug, Clone)]
pub struct AssetView {
    inner: Rc<RefCell<Asset>>,
}

impl AssetView {
    pub fn borrow(&self) -> Ref<'_, Asset> {
        self.inner.borrow()
    }

    pub fn current_price(&self) -> f64 {
        self.inner.borrow().current_price()
    }

    pub fn running_max(&self) -> f64 {
        self.inner.borrow().running_max()
    }

    pub fn running_min(&self) -> f64 {
        self.inner.borrow().running_min()
    }

    pub fn history_len(&self) -> usize {
        self.inner.borrow().price_history().len()
    }

    /// True if both views refer to the same underlying asset
    pub fn same_asset(&self, other: &AssetView) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for AssetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.borrow(), f)
    }
}
