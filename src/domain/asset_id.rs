//! Opaque asset identity.

use serde::{Deserialize, Serialize};

/// A chain-agnostic identifier for a fungible asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid identifiers, so construction is infallible; equality is the only
/// meaning the pool attaches to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}
