//! Asset custody seam between the pool and its hosting environment.
//!
//! The reserve ledger never touches asset balances directly — it issues
//! [`AssetBank`] calls in native precision and treats any refusal as a
//! reason to abort the whole operation. [`InMemoryBank`] is the
//! crate-provided implementation backing tests and standalone use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Asset, AssetId};
use crate::error::TransferError;

/// Custody operations the pool requires from its host.
///
/// All amounts are in the asset's native precision. Implementations must
/// be atomic per call: a returned `Err` means no balance moved.
pub trait AssetBank {
    /// Returns the native-precision balance `account` holds of `asset`.
    fn balance_of(&self, asset: &Asset, account: &AccountId) -> u128;

    /// Pulls `amount` of `asset` from `account` into pool custody.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientBalance`] if the account cannot cover
    /// the amount, [`TransferError::BalanceOverflow`] if custody would
    /// wrap.
    fn transfer_in(
        &mut self,
        asset: &Asset,
        account: AccountId,
        amount: u128,
    ) -> Result<(), TransferError>;

    /// Pays `amount` of `asset` out of pool custody to `account`.
    ///
    /// # Errors
    ///
    /// [`TransferError::InsufficientCustody`] if custody cannot cover the
    /// amount, [`TransferError::BalanceOverflow`] if the destination
    /// balance would wrap.
    fn transfer_out(
        &mut self,
        asset: &Asset,
        account: AccountId,
        amount: u128,
    ) -> Result<(), TransferError>;
}

/// A self-contained balance ledger implementing [`AssetBank`].
///
/// Holds per-(asset, account) balances plus one custody balance per
/// asset. Seed balances with [`credit`](Self::credit) before driving
/// pool operations.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{AccountId, Asset, AssetId, Decimals};
/// use pair_pool::transfer::{AssetBank, InMemoryBank};
///
/// let usdc = Asset::new(AssetId::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let alice = AccountId::from_bytes([7u8; 32]);
///
/// let mut bank = InMemoryBank::default();
/// bank.credit(&usdc, alice, 1_000_000);
/// assert_eq!(bank.balance_of(&usdc, &alice), 1_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryBank {
    balances: BTreeMap<(AssetId, AccountId), u128>,
    custody: BTreeMap<AssetId, u128>,
}

impl InMemoryBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account`, saturating at `u128::MAX`.
    pub fn credit(&mut self, asset: &Asset, account: AccountId, amount: u128) {
        let entry = self.balances.entry((asset.id(), account)).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Returns the pool-custody balance held for `asset`.
    #[must_use]
    pub fn custody_of(&self, asset: &Asset) -> u128 {
        self.custody.get(&asset.id()).copied().unwrap_or(0)
    }
}

impl AssetBank for InMemoryBank {
    fn balance_of(&self, asset: &Asset, account: &AccountId) -> u128 {
        self.balances
            .get(&(asset.id(), *account))
            .copied()
            .unwrap_or(0)
    }

    fn transfer_in(
        &mut self,
        asset: &Asset,
        account: AccountId,
        amount: u128,
    ) -> Result<(), TransferError> {
        let balance = self.balance_of(asset, &account);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientBalance)?;
        let custody = self
            .custody_of(asset)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        self.balances.insert((asset.id(), account), remaining);
        self.custody.insert(asset.id(), custody);
        Ok(())
    }

    fn transfer_out(
        &mut self,
        asset: &Asset,
        account: AccountId,
        amount: u128,
    ) -> Result<(), TransferError> {
        let custody = self
            .custody_of(asset)
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientCustody)?;
        let balance = self
            .balance_of(asset, &account)
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow)?;
        self.custody.insert(asset.id(), custody);
        self.balances.insert((asset.id(), account), balance);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn asset(byte: u8) -> Asset {
        let Ok(d) = Decimals::new(6) else {
            panic!("valid decimals");
        };
        Asset::new(AssetId::from_bytes([byte; 32]), d)
    }

    fn acct(byte: u8) -> AccountId {
        AccountId::from_bytes([byte; 32])
    }

    #[test]
    fn credit_and_balance() {
        let mut bank = InMemoryBank::new();
        bank.credit(&asset(1), acct(1), 500);
        bank.credit(&asset(1), acct(1), 250);
        assert_eq!(bank.balance_of(&asset(1), &acct(1)), 750);
        assert_eq!(bank.balance_of(&asset(2), &acct(1)), 0);
    }

    #[test]
    fn transfer_in_moves_to_custody() {
        let mut bank = InMemoryBank::new();
        bank.credit(&asset(1), acct(1), 500);
        let Ok(()) = bank.transfer_in(&asset(1), acct(1), 300) else {
            panic!("expected Ok");
        };
        assert_eq!(bank.balance_of(&asset(1), &acct(1)), 200);
        assert_eq!(bank.custody_of(&asset(1)), 300);
    }

    #[test]
    fn transfer_in_insufficient_balance() {
        let mut bank = InMemoryBank::new();
        bank.credit(&asset(1), acct(1), 100);
        assert_eq!(
            bank.transfer_in(&asset(1), acct(1), 101),
            Err(TransferError::InsufficientBalance)
        );
        // refused transfer moved nothing
        assert_eq!(bank.balance_of(&asset(1), &acct(1)), 100);
        assert_eq!(bank.custody_of(&asset(1)), 0);
    }

    #[test]
    fn transfer_out_pays_from_custody() {
        let mut bank = InMemoryBank::new();
        bank.credit(&asset(1), acct(1), 500);
        let Ok(()) = bank.transfer_in(&asset(1), acct(1), 500) else {
            panic!("expected Ok");
        };
        let Ok(()) = bank.transfer_out(&asset(1), acct(2), 200) else {
            panic!("expected Ok");
        };
        assert_eq!(bank.custody_of(&asset(1)), 300);
        assert_eq!(bank.balance_of(&asset(1), &acct(2)), 200);
    }

    #[test]
    fn transfer_out_insufficient_custody() {
        let mut bank = InMemoryBank::new();
        assert_eq!(
            bank.transfer_out(&asset(1), acct(1), 1),
            Err(TransferError::InsufficientCustody)
        );
    }

    #[test]
    fn assets_are_isolated() {
        let mut bank = InMemoryBank::new();
        bank.credit(&asset(1), acct(1), 100);
        bank.credit(&asset(2), acct(1), 900);
        let Ok(()) = bank.transfer_in(&asset(2), acct(1), 900) else {
            panic!("expected Ok");
        };
        assert_eq!(bank.balance_of(&asset(1), &acct(1)), 100);
        assert_eq!(bank.custody_of(&asset(1)), 0);
        assert_eq!(bank.custody_of(&asset(2)), 900);
    }
}
