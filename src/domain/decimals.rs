//! Native asset precision and normalization to internal precision.

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::{PoolError, Result};

/// Fractional digits of the pool's internal precision.
pub const POOL_DECIMALS: u8 = 18;

/// The number of fractional digits in an asset's native representation.
///
/// Valid range is `0..=18`: no tracked asset may be more precise than the
/// pool's internal precision, so construction rejects larger values and
/// inbound normalization is always loss-free.
///
/// # Examples
///
/// ```
/// use pair_pool::domain::{Amount, Decimals};
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(
///     d.normalize(1_000_000),
///     Ok(Amount::new(1_000_000_000_000_000_000)),
/// );
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero fractional digits.
    pub const ZERO: Self = Self(0);

    /// The internal precision itself (18).
    pub const MAX: Self = Self(POOL_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::PrecisionError`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > POOL_DECIMALS {
            return Err(PoolError::PrecisionError("asset decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Scales a native-precision amount up to the pool's internal
    /// precision: `amount * 10^(18 - decimals)`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the scaled amount exceeds
    /// `u128`.
    pub const fn normalize(&self, amount: u128) -> Result<Amount> {
        match amount.checked_mul(self.factor()) {
            Some(v) => Ok(Amount::new(v)),
            None => Err(PoolError::Overflow("normalized amount exceeds u128")),
        }
    }

    /// Scales an internal-precision amount back down to native
    /// precision, truncating toward zero.
    ///
    /// Truncation is deliberate: the pool retains any fractional
    /// remainder rather than paying out more than the native unit grid
    /// can represent.
    #[must_use]
    pub const fn denormalize(&self, amount: Amount) -> u128 {
        amount.get() / self.factor()
    }

    /// Returns `10^(18 - decimals)` as `u128`.
    #[must_use]
    const fn factor(&self) -> u128 {
        10u128.pow((POOL_DECIMALS - self.0) as u32)
    }
}
