//! Property-based tests for the ledger invariants.
//!
//! Covers the accounting properties that must hold for every input, not
//! just the curated unit-test values:
//!
//! 1. **First-deposit pricing** — minted shares equal the integer square
//!    root of the deposit product.
//! 2. **Swap conservation** — the input reserve grows by exactly the
//!    pre-fee input, the output reserve shrinks by exactly the output,
//!    and the reserve product never decreases.
//! 3. **Withdrawal proportionality** — payouts are the floored
//!    proportional slice and reserves shrink by exactly that slice.
//! 4. **Full-exit conservation** — withdrawing the whole supply returns
//!    the reserves exactly and leaves the pool empty.
//! 5. **Normalization round-trip** — native amounts survive the
//!    internal-precision round trip unchanged.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::curve::ConstantProductCurve;
use crate::domain::{AccountId, Asset, AssetId, Decimals, FeeRate, Shares};
use crate::error::PoolError;
use crate::math;
use crate::pool::ReservePool;
use crate::transfer::InMemoryBank;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn asset(id_byte: u8) -> Asset {
    let Ok(d) = Decimals::new(18) else {
        panic!("valid decimals");
    };
    Asset::new(AssetId::from_bytes([id_byte; 32]), d)
}

fn lp() -> AccountId {
    AccountId::from_bytes([1u8; 32])
}

/// Fresh pool over two 18-decimal assets, so native units equal
/// normalized units and deltas can be asserted exactly.
fn make_pool() -> ReservePool<ConstantProductCurve> {
    let Ok(fee) = FeeRate::new(3) else {
        panic!("valid fee");
    };
    let Ok(cfg) = PoolConfig::new(asset(1), asset(2), "ONE", "TWO", fee) else {
        panic!("valid config");
    };
    let Ok(pool) = ReservePool::new(cfg, ConstantProductCurve) else {
        panic!("valid pool");
    };
    pool
}

fn funded_bank(amount_a: u128, amount_b: u128) -> InMemoryBank {
    let mut bank = InMemoryBank::new();
    bank.credit(&asset(1), lp(), amount_a);
    bank.credit(&asset(2), lp(), amount_b);
    bank
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn first_deposit_mints_integer_sqrt(
        a in 1u128..1_000_000_000_000,
        b in 1u128..1_000_000_000_000,
    ) {
        let mut pool = make_pool();
        let mut bank = funded_bank(a, b);
        let Ok(minted) = pool.deposit(&mut bank, lp(), a, b) else {
            // sqrt(a * b) >= 1 for positive inputs, so this cannot fail
            return Err(TestCaseError::fail("first deposit failed"));
        };
        let Ok(expected) = math::sqrt_product(a, b) else {
            return Err(TestCaseError::fail("sqrt_product failed"));
        };
        prop_assert_eq!(minted.get(), expected);
        prop_assert_eq!(pool.total_supply(), minted);
        prop_assert_eq!(pool.reserve_a().get(), a);
        prop_assert_eq!(pool.reserve_b().get(), b);
    }

    #[test]
    fn swap_deltas_are_exact_and_product_grows(
        ra in 1_000u128..1_000_000_000_000,
        rb in 1_000u128..1_000_000_000_000,
        amount in 1u128..1_000_000_000,
    ) {
        let mut pool = make_pool();
        let mut bank = funded_bank(ra + amount, rb);
        let Ok(_) = pool.deposit(&mut bank, lp(), ra, rb) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };
        let k_before = pool.reserve_a().get() * pool.reserve_b().get();

        match pool.swap(&mut bank, lp(), &asset(1), amount, None) {
            Ok(out) => {
                // input side gains the full pre-fee amount, output side
                // loses exactly what was paid out
                prop_assert_eq!(pool.reserve_a().get(), ra + amount);
                prop_assert_eq!(pool.reserve_b().get(), rb - out);
                let k_after = pool.reserve_a().get() * pool.reserve_b().get();
                prop_assert!(k_after >= k_before);
            }
            Err(PoolError::InsufficientOutput) => {
                // dust input: nothing moved
                prop_assert_eq!(pool.reserve_a().get(), ra);
                prop_assert_eq!(pool.reserve_b().get(), rb);
            }
            Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {e}"))),
        }
    }

    #[test]
    fn withdrawal_is_proportional_and_floored(
        ra in 1_000u128..1_000_000_000_000,
        rb in 1_000u128..1_000_000_000_000,
        pct in 1u128..=100,
    ) {
        let mut pool = make_pool();
        let mut bank = funded_bank(ra, rb);
        let Ok(minted) = pool.deposit(&mut bank, lp(), ra, rb) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };
        let shares = (minted.get() * pct / 100).max(1);
        let supply = pool.total_supply().get();

        let Ok(expected_a) =
            math::mul_div(ra, shares, supply, crate::domain::Rounding::Down)
        else {
            return Err(TestCaseError::fail("mul_div failed"));
        };
        let Ok(expected_b) =
            math::mul_div(rb, shares, supply, crate::domain::Rounding::Down)
        else {
            return Err(TestCaseError::fail("mul_div failed"));
        };

        let Ok((out_a, out_b)) = pool.withdraw(&mut bank, lp(), Shares::new(shares)) else {
            return Err(TestCaseError::fail("withdraw failed"));
        };
        prop_assert_eq!(out_a, expected_a);
        prop_assert_eq!(out_b, expected_b);
        prop_assert_eq!(pool.reserve_a().get(), ra - expected_a);
        prop_assert_eq!(pool.reserve_b().get(), rb - expected_b);
        prop_assert_eq!(pool.total_supply().get(), supply - shares);
    }

    #[test]
    fn full_exit_returns_reserves_exactly(
        ra in 1u128..1_000_000_000_000,
        rb in 1u128..1_000_000_000_000,
    ) {
        let mut pool = make_pool();
        let mut bank = funded_bank(ra, rb);
        let Ok(minted) = pool.deposit(&mut bank, lp(), ra, rb) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };

        let Ok((out_a, out_b)) = pool.withdraw(&mut bank, lp(), minted) else {
            return Err(TestCaseError::fail("withdraw failed"));
        };
        prop_assert_eq!(out_a, ra);
        prop_assert_eq!(out_b, rb);
        prop_assert!(pool.reserve_a().is_zero());
        prop_assert!(pool.reserve_b().is_zero());
        prop_assert!(pool.total_supply().is_zero());
    }

    #[test]
    fn normalization_round_trip(
        d in 0u8..=18,
        native in 0u128..1_000_000_000_000_000_000,
    ) {
        let Ok(decimals) = Decimals::new(d) else {
            return Err(TestCaseError::fail("valid decimals"));
        };
        let Ok(norm) = decimals.normalize(native) else {
            return Err(TestCaseError::fail("normalize overflowed"));
        };
        prop_assert_eq!(decimals.denormalize(norm), native);
    }
}
