//! Validated pool construction parameters.

use serde::{Deserialize, Serialize};

use crate::domain::{Asset, AssetPair, FeeRate};
use crate::error::{PoolError, Result};

/// Immutable parameters for one [`ReservePool`](crate::pool::ReservePool).
///
/// Bundles the asset pair, the display symbols the receipt-token
/// metadata is derived from, and the swap fee. A successfully
/// constructed config is guaranteed internally consistent.
///
/// # Validation
///
/// - The two assets must have distinct identities (checked by
///   [`AssetPair`]).
/// - Both symbols must be non-empty — they feed the derived receipt
///   naming convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pair: AssetPair,
    symbol_a: String,
    symbol_b: String,
    fee: FeeRate,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the assets share an
    /// identity or a symbol is empty.
    pub fn new(
        asset_a: Asset,
        asset_b: Asset,
        symbol_a: impl Into<String>,
        symbol_b: impl Into<String>,
        fee: FeeRate,
    ) -> Result<Self> {
        let config = Self {
            pair: AssetPair::new(asset_a, asset_b)?,
            symbol_a: symbol_a.into(),
            symbol_b: symbol_b.into(),
            fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if a symbol is empty.
    pub fn validate(&self) -> Result<()> {
        if self.symbol_a.is_empty() || self.symbol_b.is_empty() {
            return Err(PoolError::InvalidConfig("asset symbols must be non-empty"));
        }
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the display symbol of asset A.
    #[must_use]
    pub fn symbol_a(&self) -> &str {
        &self.symbol_a
    }

    /// Returns the display symbol of asset B.
    #[must_use]
    pub fn symbol_b(&self) -> &str {
        &self.symbol_b
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }
}
