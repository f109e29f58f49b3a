//! Normalized amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Rounding;
use crate::error::Result;
use crate::math;

/// A quantity denominated in the pool's internal precision of 18
/// fractional digits.
///
/// `Amount` never interprets an asset's native precision — that
/// responsibility lies with [`Decimals`](super::Decimals), which converts
/// between native and internal units. All `u128` values are valid
/// amounts.
///
/// Arithmetic is checked: addition and subtraction return `None` on
/// overflow/underflow, and [`mul_div`](Self::mul_div) widens through a
/// 256-bit intermediate so products of two 18-digit quantities cannot
/// silently wrap.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(b), Some(Amount::new(300)));
/// assert_eq!(a.mul_div(b, Amount::new(3), Rounding::Down), Ok(Amount::new(6_666)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self * multiplier / divisor` with a 256-bit intermediate
    /// and the given rounding direction.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DivisionByZero`](crate::error::PoolError::DivisionByZero)
    ///   if `divisor` is zero.
    /// - [`PoolError::Overflow`](crate::error::PoolError::Overflow) if
    ///   the quotient exceeds `u128`.
    pub fn mul_div(self, multiplier: Self, divisor: Self, rounding: Rounding) -> Result<Self> {
        math::mul_div(self.0, multiplier.0, divisor.0, rounding).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::PoolError;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
    }

    // -- checked_add / checked_sub ------------------------------------------

    #[test]
    fn add_normal() {
        assert_eq!(
            Amount::new(100).checked_add(Amount::new(200)),
            Some(Amount::new(300))
        );
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(Amount::new(1)), None);
    }

    #[test]
    fn sub_normal() {
        assert_eq!(
            Amount::new(300).checked_sub(Amount::new(100)),
            Some(Amount::new(200))
        );
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(Amount::new(2)), None);
    }

    // -- mul_div ------------------------------------------------------------

    #[test]
    fn mul_div_exact() {
        let Ok(v) = Amount::new(100).mul_div(Amount::new(30), Amount::new(10), Rounding::Down)
        else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::new(300));
    }

    #[test]
    fn mul_div_floor_vs_ceil() {
        let a = Amount::new(10);
        let Ok(down) = a.mul_div(Amount::new(1), Amount::new(3), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = a.mul_div(Amount::new(1), Amount::new(3), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(down, Amount::new(3));
        assert_eq!(up, Amount::new(4));
    }

    #[test]
    fn mul_div_widens_past_u128() {
        // 1e18 * 3000e18 overflows u128; the quotient fits comfortably.
        let e18 = 1_000_000_000_000_000_000u128;
        let Ok(v) = Amount::new(e18).mul_div(
            Amount::new(3_000 * e18),
            Amount::new(e18),
            Rounding::Down,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(v, Amount::new(3_000 * e18));
    }

    #[test]
    fn mul_div_by_zero() {
        assert_eq!(
            Amount::new(1).mul_div(Amount::new(1), Amount::ZERO, Rounding::Down),
            Err(PoolError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_overflowing_quotient() {
        let r = Amount::MAX.mul_div(Amount::MAX, Amount::new(1), Rounding::Down);
        assert!(matches!(r, Err(PoolError::Overflow(_))));
    }

    // -- serde --------------------------------------------------------------

    #[test]
    fn serde_round_trip() {
        let a = Amount::new(12_345);
        let Ok(json) = serde_json::to_string(&a) else {
            panic!("serialize");
        };
        let Ok(back) = serde_json::from_str::<Amount>(&json) else {
            panic!("deserialize");
        };
        assert_eq!(a, back);
    }
}
