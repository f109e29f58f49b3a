//! Constant-product pricing (`x · y = k`).
//!
//! The swap rule holds the product of the two reserves constant:
//!
//! ```text
//! reserve_in * reserve_out == (reserve_in + amount_in) * (reserve_out - output)
//! output = reserve_out * amount_in / (reserve_in + amount_in)
//! ```
//!
//! Because the ledger withholds the fee before calling the curve and
//! credits the full pre-fee input to reserves, the product grows on
//! every fee-bearing swap and is preserved (within rounding) at zero
//! fee.

use crate::domain::{Amount, FeeRate, Rounding, Shares};
use crate::error::{PoolError, Result};
use crate::math;

/// The default pricing rule: Uniswap-V2-style constant product.
///
/// Stateless; a single value can serve any number of pools.
///
/// # Examples
///
/// ```
/// use pair_pool::curve::{ConstantProductCurve, PricingCurve};
/// use pair_pool::domain::{Amount, FeeRate, Shares};
///
/// let curve = ConstantProductCurve;
/// let minted = curve
///     .shares_for_deposit(
///         Amount::new(400),
///         Amount::new(900),
///         Shares::ZERO,
///         Amount::ZERO,
///         Amount::ZERO,
///     )
///     .expect("first deposit");
/// assert_eq!(minted, Shares::new(600)); // sqrt(400 * 900)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProductCurve;

impl super::PricingCurve for ConstantProductCurve {
    /// First deposit: `floor(sqrt(amount_a * amount_b))` — the geometric
    /// mean makes the initial share count independent of which asset is
    /// "A". Later deposits: `min(amount_a * supply / reserve_a,
    /// amount_b * supply / reserve_b)`, floored, so an off-ratio deposit
    /// is credited only for its scarcer side.
    fn shares_for_deposit(
        &self,
        amount_a: Amount,
        amount_b: Amount,
        total_supply: Shares,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<Shares> {
        if total_supply.is_zero() {
            return math::sqrt_product(amount_a.get(), amount_b.get()).map(Shares::new);
        }

        let by_a = math::mul_div(
            amount_a.get(),
            total_supply.get(),
            reserve_a.get(),
            Rounding::Down,
        )?;
        let by_b = math::mul_div(
            amount_b.get(),
            total_supply.get(),
            reserve_b.get(),
            Rounding::Down,
        )?;
        Ok(Shares::new(by_a.min(by_b)))
    }

    /// `output = reserve_out * amount_in / (reserve_in + amount_in)`,
    /// floored. The quotient is strictly below `reserve_out` whenever
    /// `reserve_in` is positive, so the non-draining guarantee holds
    /// structurally; empty reserves are rejected up front.
    fn output_for_swap(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
        _fee: FeeRate,
    ) -> Result<Amount> {
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientOutput);
        }

        let denominator = reserve_in
            .checked_add(amount_in)
            .ok_or(PoolError::Overflow("swap denominator overflow"))?;
        reserve_out.mul_div(amount_in, denominator, Rounding::Down)
    }
}
