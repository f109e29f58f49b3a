//! Pluggable pricing curves.
//!
//! [`PricingCurve`] is the seam between the reserve ledger and the
//! economics of the pool. The ledger never computes prices inline: it
//! consults the curve injected at construction, so a different pricing
//! rule (stable-swap, concentrated liquidity, ...) substitutes without
//! touching the accounting code.
//!
//! # Contract
//!
//! Both methods are pure: deterministic in their arguments, no shared
//! state, no side effects. A single curve value may in principle serve
//! several pools; within an operation it is only ever invoked
//! synchronously.

mod constant_product;

pub use constant_product::ConstantProductCurve;

use crate::domain::{Amount, FeeRate, Shares};
use crate::error::Result;

/// A pricing rule consulted by the reserve ledger.
///
/// # Implementors
///
/// [`ConstantProductCurve`] is the default. Alternative rules implement
/// the same two functions; the ledger's accounting (normalization, fee
/// withholding, reserve updates, mint/burn) is identical for all of
/// them.
pub trait PricingCurve {
    /// Values a deposit in receipt-token units.
    ///
    /// For the first deposit (`total_supply` is zero) the curve defines
    /// the pool's initial share count from the two amounts alone,
    /// establishing the exchange-rate baseline. For later deposits it
    /// credits the scarcer side of the contributed ratio; surplus of the
    /// other asset is absorbed into reserves without credit.
    ///
    /// # Errors
    ///
    /// Implementations surface arithmetic failures
    /// ([`PoolError::Overflow`](crate::error::PoolError::Overflow),
    /// [`PoolError::DivisionByZero`](crate::error::PoolError::DivisionByZero));
    /// they do not validate amounts — the ledger has already done so.
    fn shares_for_deposit(
        &self,
        amount_a: Amount,
        amount_b: Amount,
        total_supply: Shares,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<Shares>;

    /// Computes the output of a swap whose fee has already been
    /// withheld from `amount_in`.
    ///
    /// The returned amount must satisfy `output < reserve_out` — a swap
    /// can never fully drain one side of the pool. The fee rate is
    /// provided for curves whose formula depends on it; the
    /// constant-product rule does not use it.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientOutput`](crate::error::PoolError::InsufficientOutput)
    ///   if a reserve is empty.
    /// - Arithmetic failures as for
    ///   [`shares_for_deposit`](Self::shares_for_deposit).
    fn output_for_swap(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        fee: FeeRate,
    ) -> Result<Amount>;
}
