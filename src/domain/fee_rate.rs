//! Per-swap fee expressed in thousandths of the input amount.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Denominator of the fee fraction (1 000 = 100%).
const FEE_DENOMINATOR: u128 = 1_000;

/// The swap fee as a fraction with denominator 1 000 (1 unit = 0.1%).
///
/// The fee is withheld from the tradable amount before the pricing curve
/// runs — it is never separately accounted or distributed, it simply
/// stays in the reserves and raises the value of outstanding shares.
/// Deposits and withdrawals are never charged.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Amount, FeeRate};
///
/// let fee = FeeRate::new(3).expect("0.3%");
/// let tradable = fee.after_fee(Amount::new(1_000)).expect("no overflow");
/// assert_eq!(tradable, Amount::new(997));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FeeRate(u16);

impl FeeRate {
    /// No fee.
    pub const ZERO: Self = Self(0);

    /// Creates a new `FeeRate` from thousandths of the input amount.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] for 100% or more — such a fee
    /// leaves nothing to trade.
    pub const fn new(thousandths: u16) -> Result<Self> {
        if thousandths as u128 >= FEE_DENOMINATOR {
            return Err(PoolError::InvalidConfig(
                "swap fee must be below 1000 thousandths",
            ));
        }
        Ok(Self(thousandths))
    }

    /// Returns the raw fee in thousandths.
    #[must_use]
    pub const fn thousandths(&self) -> u16 {
        self.0
    }

    /// Returns the tradable remainder of `amount` after withholding the
    /// fee: `amount * (1000 - fee) / 1000`, floored.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the widened quotient exceeds
    /// `u128` (unreachable for fee complements below the denominator).
    pub fn after_fee(&self, amount: Amount) -> Result<Amount> {
        let complement = FEE_DENOMINATOR - self.0 as u128;
        amount.mul_div(
            Amount::new(complement),
            Amount::new(FEE_DENOMINATOR),
            Rounding::Down,
        )
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/1000", self.0)
    }
}
