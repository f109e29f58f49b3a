//! Widening arithmetic for ledger quantities.
//!
//! Products of two internal-precision amounts (18 fractional digits each)
//! routinely exceed `u128`, so every multiply-then-divide and the
//! first-deposit square root run over an arbitrary-precision
//! intermediate and only narrow back at the end.

use num::{BigUint, ToPrimitive};

use crate::domain::Rounding;
use crate::error::{PoolError, Result};

/// Computes `a * b / denominator` without intermediate overflow,
/// rounding in the given direction.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `denominator` is zero.
/// - [`PoolError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: u128, b: u128, denominator: u128, rounding: Rounding) -> Result<u128> {
    if denominator == 0 {
        return Err(PoolError::DivisionByZero);
    }
    let numerator = BigUint::from(a) * BigUint::from(b);
    let denominator = BigUint::from(denominator);
    let quotient = match rounding {
        Rounding::Down => numerator / &denominator,
        Rounding::Up => (numerator + (&denominator - 1u32)) / &denominator,
    };
    quotient
        .to_u128()
        .ok_or(PoolError::Overflow("mul_div quotient exceeds u128"))
}

/// Computes `floor(sqrt(a * b))`.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if the root exceeds `u128`, which is
/// unreachable for `u128` inputs (the root of a 256-bit product fits in
/// 128 bits).
pub fn sqrt_product(a: u128, b: u128) -> Result<u128> {
    let root = (BigUint::from(a) * BigUint::from(b)).sqrt();
    root.to_u128()
        .ok_or(PoolError::Overflow("integer sqrt exceeds u128"))
}
