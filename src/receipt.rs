//! Pool-owned receipt-token ledger.
//!
//! A [`ReceiptToken`] tracks the supply and per-account balances of the
//! shares a pool issues against deposits. Mint and burn are
//! crate-private: the owning [`ReservePool`](crate::pool::ReservePool)
//! is the only party that can move supply, which is what makes the
//! "empty pool has no outstanding shares" invariant enforceable at all.
//!
//! Transfer and approval bookkeeping between holders is standard
//! fungible-token behavior and lives outside this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Shares};
use crate::error::{PoolError, Result};

/// Supply-tracked share ledger created by and owned by one pool.
///
/// Name and symbol are derived from the pool's asset symbols at
/// construction — `"{A}/{B}-LP"` and `"{A}/{B} Liquidity Pool Token"` —
/// a fixed convention consumed by indexing and display tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptToken {
    name: String,
    symbol: String,
    total_supply: Shares,
    balances: BTreeMap<AccountId, Shares>,
}

impl ReceiptToken {
    /// Creates an empty ledger with the derived metadata for the given
    /// asset symbols.
    pub(crate) fn new(symbol_a: &str, symbol_b: &str) -> Self {
        Self {
            name: format!("{symbol_a}/{symbol_b} Liquidity Pool Token"),
            symbol: format!("{symbol_a}/{symbol_b}-LP"),
            total_supply: Shares::ZERO,
            balances: BTreeMap::new(),
        }
    }

    /// Returns the derived display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the derived symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.total_supply
    }

    /// Returns the share balance of `account` (zero if unknown).
    #[must_use]
    pub fn balance_of(&self, account: &AccountId) -> Shares {
        self.balances.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Credits `amount` to `account` and grows the supply.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if balance or supply would wrap.
    pub(crate) fn mint(&mut self, account: AccountId, amount: Shares) -> Result<()> {
        let balance = self
            .balance_of(&account)
            .checked_add(amount)
            .ok_or(PoolError::Overflow("receipt balance overflow"))?;
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(PoolError::Overflow("receipt supply overflow"))?;
        self.balances.insert(account, balance);
        self.total_supply = supply;
        Ok(())
    }

    /// Debits `amount` from `account` and shrinks the supply.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InsufficientShares`] if the account holds
    /// less than `amount`.
    pub(crate) fn burn(&mut self, account: AccountId, amount: Shares) -> Result<()> {
        let balance = self
            .balance_of(&account)
            .checked_sub(amount)
            .ok_or(PoolError::InsufficientShares)?;
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(PoolError::Overflow("receipt supply underflow"))?;
        if balance.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, balance);
        }
        self.total_supply = supply;
        Ok(())
    }
}
