//! Tracked asset identity.

use serde::{Deserialize, Serialize};

use super::{AssetId, Decimals};

/// One of the two fungible assets tracked by a pool.
///
/// Combines an [`AssetId`] with its native [`Decimals`]. Two assets are
/// equal only if both identity and precision match — a mismatched
/// precision for the same id would make normalization ambiguous, so it is
/// treated as a different asset.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Asset, AssetId, Decimals};
///
/// let usdc = Asset::new(
///     AssetId::from_bytes([1u8; 32]),
///     Decimals::new(6).expect("valid"),
/// );
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    id: AssetId,
    decimals: Decimals,
}

impl Asset {
    /// Creates a new `Asset`.
    ///
    /// Infallible: both components are validated at their own
    /// construction sites.
    #[must_use]
    pub const fn new(id: AssetId, decimals: Decimals) -> Self {
        Self { id, decimals }
    }

    /// Returns the asset identity.
    #[must_use]
    pub const fn id(&self) -> AssetId {
        self.id
    }

    /// Returns the asset's native precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
