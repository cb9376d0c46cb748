//! Underlying assets and their price histories

pub mod asset;
pub mod handle;

pub use asset::{Asset, PricePoint};
pub use handle::{AssetHandle, AssetView};

use crate::error::LatticeResult;

/// Create an asset and wrap it in its owning handle
pub fn create_asset(name: impl Into<String>, initial_price: f64) -> LatticeResult<AssetHandle> {
    Asset::new(name, initial_price).map(AssetHandle::new)
}

/// Checked price update: `value` must be finite and strictly positive
pub fn set_price(asset: &mut AssetHandle, value: f64) -> LatticeResult<()> {
    asset.set_price(value)
}
