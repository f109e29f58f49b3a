//! The reserve ledger.
//!
//! [`ReservePool`] owns the normalized reserve balances of one asset
//! pair and orchestrates every deposit, swap, and withdrawal against its
//! collaborators: the injected [`PricingCurve`], the pool-owned
//! [`ReceiptToken`], and the host's [`AssetBank`].
//!
//! # Invariants
//!
//! After every successful operation:
//!
//! 1. `reserve_a == 0 && reserve_b == 0` exactly when the receipt
//!    supply is zero — an empty pool has no outstanding shares.
//! 2. Reserves change only through the three operations: deposit adds
//!    to both, a swap adds the full pre-fee input and subtracts the
//!    output, a withdrawal subtracts from both. They are a derived
//!    ledger, never a live read of asset balances, so fee-on-transfer
//!    or rebasing assets cannot corrupt the accounting.
//! 3. Receipt supply moves only through the pool's own mint and burn.
//! 4. Value leaving the pool is floored; fractional remainders stay in
//!    the reserves.
//!
//! # Exclusive access
//!
//! Every mutating operation takes `&mut self`, so two operations can
//! never interleave their read-modify-write sequences on one pool. A
//! host sharing a pool across threads holds its own lock for the whole
//! operation, bank calls included.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PoolConfig;
use crate::curve::PricingCurve;
use crate::domain::{AccountId, Amount, Asset, AssetPair, FeeRate, Rounding, Shares, Side};
use crate::error::{PoolError, Result};
use crate::receipt::ReceiptToken;
use crate::transfer::AssetBank;

#[cfg(test)]
mod proptest_properties;

/// Serializable snapshot of a pool's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    /// Normalized reserve of asset A.
    pub reserve_a: Amount,
    /// Normalized reserve of asset B.
    pub reserve_b: Amount,
    /// Outstanding receipt-token supply.
    pub total_supply: Shares,
    /// The pool's swap fee.
    pub fee: FeeRate,
}

/// Everything a swap will do, computed before any balance moves.
struct SwapPlan {
    side_in: Side,
    norm_in: Amount,
    output: Amount,
    native_out: u128,
}

/// A two-asset liquidity pool ledger with a pluggable pricing curve.
///
/// Created once per pair via [`ReservePool::new`]; the curve and the
/// fee are immutable afterwards. Reserve fields are private — the three
/// operations are the only mutation paths.
///
/// # Examples
///
/// ```
/// use pair_pool::config::PoolConfig;
/// use pair_pool::curve::ConstantProductCurve;
/// use pair_pool::domain::{AccountId, Asset, AssetId, Decimals, FeeRate};
/// use pair_pool::pool::ReservePool;
/// use pair_pool::transfer::InMemoryBank;
///
/// let usdc = Asset::new(AssetId::from_bytes([1u8; 32]), Decimals::new(6).expect("valid"));
/// let weth = Asset::new(AssetId::from_bytes([2u8; 32]), Decimals::new(18).expect("valid"));
/// let config = PoolConfig::new(usdc, weth, "USDC", "WETH", FeeRate::new(3).expect("valid"))
///     .expect("valid config");
///
/// let mut pool = ReservePool::new(config, ConstantProductCurve).expect("pool created");
/// assert_eq!(pool.receipt().symbol(), "USDC/WETH-LP");
///
/// let alice = AccountId::from_bytes([7u8; 32]);
/// let mut bank = InMemoryBank::new();
/// bank.credit(&usdc, alice, 5_000_000_000);
/// bank.credit(&weth, alice, 2_000_000_000_000_000_000);
///
/// let minted = pool
///     .deposit(&mut bank, alice, 5_000_000_000, 2_000_000_000_000_000_000)
///     .expect("first deposit");
/// assert_eq!(pool.total_supply(), minted);
/// ```
#[derive(Debug, Clone)]
pub struct ReservePool<C> {
    pair: AssetPair,
    fee: FeeRate,
    reserve_a: Amount,
    reserve_b: Amount,
    receipt: ReceiptToken,
    curve: C,
}

impl<C: PricingCurve> ReservePool<C> {
    /// Creates an empty pool and its receipt token.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `config` fails
    /// validation.
    pub fn new(config: PoolConfig, curve: C) -> Result<Self> {
        config.validate()?;
        let receipt = ReceiptToken::new(config.symbol_a(), config.symbol_b());
        Ok(Self {
            pair: *config.pair(),
            fee: config.fee(),
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            receipt,
            curve,
        })
    }

    // -- reads --------------------------------------------------------------

    /// Returns the normalized reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the normalized reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding receipt-token supply.
    #[must_use]
    pub const fn total_supply(&self) -> Shares {
        self.receipt.total_supply()
    }

    /// Returns the pool's receipt-token ledger.
    #[must_use]
    pub const fn receipt(&self) -> &ReceiptToken {
        &self.receipt
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee(&self) -> FeeRate {
        self.fee
    }

    /// Returns a snapshot of the observable ledger state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        PoolState {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_supply: self.receipt.total_supply(),
            fee: self.fee,
        }
    }

    /// Previews a swap without moving any balance.
    ///
    /// Returns the native-precision output the identical [`swap`]
    /// against the current reserves would pay.
    ///
    /// # Errors
    ///
    /// The same kinds as [`swap`](Self::swap), minus transfer failures.
    pub fn quote_swap(&self, asset_in: &Asset, amount: u128) -> Result<u128> {
        self.plan_swap(asset_in, amount).map(|plan| plan.native_out)
    }

    // -- operations ---------------------------------------------------------

    /// Deposits both assets and mints receipt shares to `caller`.
    ///
    /// Amounts are in each asset's native precision. The curve values
    /// the deposit: the first one mints the geometric-mean baseline,
    /// later ones credit the scarcer side of the contributed ratio — an
    /// off-ratio surplus is absorbed into the reserves without credit.
    /// Both pulls complete before anything is minted; a failed second
    /// pull returns the first.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if either amount is zero, or the
    ///   deposit is too small to mint a single share.
    /// - [`PoolError::TransferFailed`] if a pull is refused; no state
    ///   changes.
    /// - [`PoolError::Overflow`] if a reserve would wrap.
    pub fn deposit<B: AssetBank>(
        &mut self,
        bank: &mut B,
        caller: AccountId,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<Shares> {
        if amount_a == 0 || amount_b == 0 {
            return Err(PoolError::InvalidAmount("deposit amounts must be positive"));
        }

        let asset_a = self.pair.asset_a();
        let asset_b = self.pair.asset_b();
        let norm_a = asset_a.decimals().normalize(amount_a)?;
        let norm_b = asset_b.decimals().normalize(amount_b)?;

        let minted = self.curve.shares_for_deposit(
            norm_a,
            norm_b,
            self.receipt.total_supply(),
            self.reserve_a,
            self.reserve_b,
        )?;
        if minted.is_zero() {
            return Err(PoolError::InvalidAmount("deposit too small to mint shares"));
        }

        let new_reserve_a = self
            .reserve_a
            .checked_add(norm_a)
            .ok_or(PoolError::Overflow("reserve A overflow on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(norm_b)
            .ok_or(PoolError::Overflow("reserve B overflow on deposit"))?;

        bank.transfer_in(&asset_a, caller, amount_a)?;
        if let Err(err) = bank.transfer_in(&asset_b, caller, amount_b) {
            Self::give_back(bank, &asset_a, caller, amount_a);
            return Err(err.into());
        }

        if let Err(err) = self.receipt.mint(caller, minted) {
            Self::give_back(bank, &asset_a, caller, amount_a);
            Self::give_back(bank, &asset_b, caller, amount_b);
            return Err(err);
        }
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;

        debug!(
            minted = %minted,
            reserve_a = %self.reserve_a,
            reserve_b = %self.reserve_b,
            "deposit committed"
        );
        Ok(minted)
    }

    /// Swaps `amount` of `asset_in` for the other asset.
    ///
    /// `recipient` defaults to `caller`. The full pre-fee input is
    /// pulled **from the recipient**, who also receives the output; the
    /// caller is only the initiator. This lets a relayer submit swaps
    /// that settle entirely against another account.
    ///
    /// The fee share of the input is withheld from the tradable amount
    /// and stays in the reserves, raising the value of outstanding
    /// shares; the input reserve is credited with the full pre-fee
    /// amount.
    ///
    /// Returns the native-precision output paid to the recipient.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - [`PoolError::InvalidAmount`] if `amount` is zero.
    /// - [`PoolError::InsufficientOutput`] if the curve output is zero.
    /// - [`PoolError::TransferFailed`] if the pull is refused, or the
    ///   payout is refused (the pull is then returned); no state
    ///   changes either way.
    /// - [`PoolError::Overflow`] if a reserve would wrap.
    pub fn swap<B: AssetBank>(
        &mut self,
        bank: &mut B,
        caller: AccountId,
        asset_in: &Asset,
        amount: u128,
        recipient: Option<AccountId>,
    ) -> Result<u128> {
        let plan = self.plan_swap(asset_in, amount)?;
        let recipient = recipient.unwrap_or(caller);

        let side_out = plan.side_in.other();
        let asset_out = self.pair.get(side_out);

        let new_reserve_in = self
            .reserve(plan.side_in)
            .checked_add(plan.norm_in)
            .ok_or(PoolError::Overflow("input reserve overflow on swap"))?;
        let new_reserve_out = self
            .reserve(side_out)
            .checked_sub(plan.output)
            .ok_or(PoolError::Overflow("output reserve underflow on swap"))?;

        bank.transfer_in(asset_in, recipient, amount)?;
        if let Err(err) = bank.transfer_out(&asset_out, recipient, plan.native_out) {
            Self::give_back(bank, asset_in, recipient, amount);
            return Err(err.into());
        }

        self.set_reserve(plan.side_in, new_reserve_in);
        self.set_reserve(side_out, new_reserve_out);

        debug!(
            side_in = ?plan.side_in,
            amount_in = amount,
            amount_out = plan.native_out,
            reserve_a = %self.reserve_a,
            reserve_b = %self.reserve_b,
            "swap committed"
        );
        Ok(plan.native_out)
    }

    /// Burns `shares` from `caller` and pays out the proportional slice
    /// of both reserves.
    ///
    /// Payout amounts are `floor(reserve * shares / supply)`, then
    /// floored again onto each asset's native grid — both remainders
    /// stay in the pool. Burning the entire supply drains the reserves
    /// exactly, returning the pool to its empty state.
    ///
    /// Returns the native-precision amounts of `(asset_a, asset_b)`
    /// paid to the caller.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `shares` is zero.
    /// - [`PoolError::InsufficientShares`] if the supply is zero (the
    ///   division-by-zero guard) or the caller holds fewer than
    ///   `shares`.
    /// - [`PoolError::TransferFailed`] if a payout is refused; burn and
    ///   reserves are restored.
    pub fn withdraw<B: AssetBank>(
        &mut self,
        bank: &mut B,
        caller: AccountId,
        shares: Shares,
    ) -> Result<(u128, u128)> {
        if shares.is_zero() {
            return Err(PoolError::InvalidAmount(
                "withdrawal must burn a positive share amount",
            ));
        }
        let supply = self.receipt.total_supply();
        if supply.is_zero() {
            // division-by-zero guard: an empty pool has no holders
            return Err(PoolError::InsufficientShares);
        }
        if self.receipt.balance_of(&caller) < shares {
            return Err(PoolError::InsufficientShares);
        }

        let share_amount = Amount::new(shares.get());
        let supply_amount = Amount::new(supply.get());
        let amount_a = self
            .reserve_a
            .mul_div(share_amount, supply_amount, Rounding::Down)?;
        let amount_b = self
            .reserve_b
            .mul_div(share_amount, supply_amount, Rounding::Down)?;

        let prev_a = self.reserve_a;
        let prev_b = self.reserve_b;
        let new_reserve_a = self
            .reserve_a
            .checked_sub(amount_a)
            .ok_or(PoolError::Overflow("reserve A underflow on withdraw"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(amount_b)
            .ok_or(PoolError::Overflow("reserve B underflow on withdraw"))?;

        let asset_a = self.pair.asset_a();
        let asset_b = self.pair.asset_b();
        let native_a = asset_a.decimals().denormalize(amount_a);
        let native_b = asset_b.decimals().denormalize(amount_b);

        self.receipt.burn(caller, shares)?;
        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;

        if let Err(err) = bank.transfer_out(&asset_a, caller, native_a) {
            self.restore_withdraw(caller, shares, prev_a, prev_b);
            return Err(err.into());
        }
        if let Err(err) = bank.transfer_out(&asset_b, caller, native_b) {
            Self::take_back(bank, &asset_a, caller, native_a);
            self.restore_withdraw(caller, shares, prev_a, prev_b);
            return Err(err.into());
        }

        debug!(
            burned = %shares,
            amount_a = native_a,
            amount_b = native_b,
            reserve_a = %self.reserve_a,
            reserve_b = %self.reserve_b,
            "withdrawal committed"
        );
        Ok((native_a, native_b))
    }

    // -- internals ----------------------------------------------------------

    /// Resolves and prices a swap against the current reserves.
    fn plan_swap(&self, asset_in: &Asset, amount: u128) -> Result<SwapPlan> {
        let side_in = self.pair.side_of(asset_in)?;
        if amount == 0 {
            return Err(PoolError::InvalidAmount("swap amount must be positive"));
        }
        let side_out = side_in.other();

        let norm_in = asset_in.decimals().normalize(amount)?;
        let tradable = self.fee.after_fee(norm_in)?;
        let output = self.curve.output_for_swap(
            tradable,
            self.reserve(side_in),
            self.reserve(side_out),
            self.fee,
        )?;
        if output.is_zero() {
            return Err(PoolError::InsufficientOutput);
        }
        let native_out = self.pair.get(side_out).decimals().denormalize(output);

        Ok(SwapPlan {
            side_in,
            norm_in,
            output,
            native_out,
        })
    }

    const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    fn set_reserve(&mut self, side: Side, value: Amount) {
        match side {
            Side::A => self.reserve_a = value,
            Side::B => self.reserve_b = value,
        }
    }

    /// Restores burned shares and reserve balances while unwinding a
    /// failed withdrawal.
    fn restore_withdraw(&mut self, caller: AccountId, shares: Shares, prev_a: Amount, prev_b: Amount) {
        if let Err(err) = self.receipt.mint(caller, shares) {
            warn!(%err, "failed to restore burned shares while unwinding withdrawal");
        }
        self.reserve_a = prev_a;
        self.reserve_b = prev_b;
    }

    /// Returns a pulled amount to its source while unwinding.
    fn give_back<B: AssetBank>(bank: &mut B, asset: &Asset, account: AccountId, amount: u128) {
        if let Err(err) = bank.transfer_out(asset, account, amount) {
            warn!(%err, "failed to return pulled funds while unwinding operation");
        }
    }

    /// Pulls a paid-out amount back into custody while unwinding.
    fn take_back<B: AssetBank>(bank: &mut B, asset: &Asset, account: AccountId, amount: u128) {
        if let Err(err) = bank.transfer_in(asset, account, amount) {
            warn!(%err, "failed to reclaim paid funds while unwinding operation");
        }
    }
}
