//! The two asset roles of a pool.

use serde::{Deserialize, Serialize};

use super::Asset;
use crate::error::{PoolError, Result};

/// Which of the pair's two roles an asset occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The pair's first role.
    A,
    /// The pair's second role.
    B,
}

impl Side {
    /// Returns the opposite role.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The ordered pair of distinct assets a pool tracks.
///
/// "A" and "B" are roles fixed at construction, not interchangeable
/// labels: reserves, symbols, and deposit arguments all follow this
/// order, so the pair is kept exactly as given rather than canonically
/// sorted.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Asset, AssetId, AssetPair, Decimals, Side};
///
/// let a = Asset::new(AssetId::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let b = Asset::new(AssetId::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
/// let pair = AssetPair::new(a, b).expect("distinct assets");
///
/// assert_eq!(pair.side_of(&a), Ok(Side::A));
/// assert_eq!(pair.get(Side::B), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset_a: Asset,
    asset_b: Asset,
}

impl AssetPair {
    /// Creates a new `AssetPair`, preserving the given role order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if both assets share the same
    /// identity.
    pub fn new(asset_a: Asset, asset_b: Asset) -> Result<Self> {
        if asset_a.id() == asset_b.id() {
            return Err(PoolError::InvalidConfig(
                "pool requires two distinct assets",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the asset occupying the given role.
    #[must_use]
    pub const fn get(&self, side: Side) -> Asset {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Returns the asset in role A.
    #[must_use]
    pub const fn asset_a(&self) -> Asset {
        self.asset_a
    }

    /// Returns the asset in role B.
    #[must_use]
    pub const fn asset_b(&self) -> Asset {
        self.asset_b
    }

    /// Resolves an asset to the role it occupies.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAsset`] if the asset is not part of
    /// this pair.
    pub fn side_of(&self, asset: &Asset) -> Result<Side> {
        if *asset == self.asset_a {
            Ok(Side::A)
        } else if *asset == self.asset_b {
            Ok(Side::B)
        } else {
            Err(PoolError::InvalidAsset("asset is not part of this pool"))
        }
    }
}
