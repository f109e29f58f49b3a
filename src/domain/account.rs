//! Opaque account identity.

use serde::{Deserialize, Serialize};

/// Identity of a party interacting with the pool — a depositor, a swap
/// initiator or recipient, or a withdrawer.
///
/// The pool attaches no meaning beyond equality: authorization is the
/// hosting runtime's concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    /// Creates an `AccountId` from raw bytes.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let bytes = [7u8; 32];
        assert_eq!(AccountId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn distinct_accounts_differ() {
        assert_ne!(
            AccountId::from_bytes([1u8; 32]),
            AccountId::from_bytes([2u8; 32])
        );
    }
}
