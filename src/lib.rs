//! # pair-pool
//!
//! A two-asset liquidity pool accounting engine: reserves of two
//! fungible assets, a proportional-share receipt token for liquidity
//! providers, and swaps priced by a pluggable curve.
//!
//! The crate is the *ledger*, not the venue: asset custody is consumed
//! through the [`AssetBank`](transfer::AssetBank) trait, pricing through
//! [`PricingCurve`](curve::PricingCurve), and the receipt token's
//! holder-to-holder transfers are out of scope. What the crate owns is
//! the accounting — the invariants that keep reserve balances, receipt
//! supply, and swap outputs mutually consistent across deposits, swaps,
//! and withdrawals, with per-asset native precision normalized to a
//! fixed 18-digit internal precision and a per-swap fee retained in the
//! reserves.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_pool::prelude::*;
//!
//! // 1. Define the two tracked assets
//! let usdc = Asset::new(
//!     AssetId::from_bytes([1u8; 32]),
//!     Decimals::new(6).expect("valid decimals"),
//! );
//! let weth = Asset::new(
//!     AssetId::from_bytes([2u8; 32]),
//!     Decimals::new(18).expect("valid decimals"),
//! );
//!
//! // 2. Build the pool with the default constant-product curve
//! let config = PoolConfig::new(usdc, weth, "USDC", "WETH", FeeRate::new(3).expect("0.3%"))
//!     .expect("valid config");
//! let mut pool = ReservePool::new(config, ConstantProductCurve).expect("pool created");
//!
//! // 3. Fund an account and provide liquidity
//! let alice = AccountId::from_bytes([7u8; 32]);
//! let mut bank = InMemoryBank::new();
//! bank.credit(&usdc, alice, 10_100_000_000);            // 10 000 USDC + 100 for the swap below
//! bank.credit(&weth, alice, 4_000_000_000_000_000_000); // 4 WETH
//!
//! let minted = pool
//!     .deposit(&mut bank, alice, 10_000_000_000, 4_000_000_000_000_000_000)
//!     .expect("first deposit");
//! assert_eq!(pool.total_supply(), minted);
//!
//! // 4. Swap 100 USDC for WETH
//! let out = pool
//!     .swap(&mut bank, alice, &usdc, 100_000_000, None)
//!     .expect("swap succeeded");
//! assert!(out > 0);
//!
//! // 5. Exit the position
//! let (a, b) = pool.withdraw(&mut bank, alice, minted).expect("withdraw");
//! assert!(a > 0 && b > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  PoolConfig + ReservePool::new(config, curve)
//! └──────┬───────┘
//!        │ deposit / swap / withdraw (&mut self, &mut impl AssetBank)
//!        ▼
//! ┌──────────────┐   shares_for_deposit / output_for_swap
//! │  ReservePool  │ ────────────────────────────▶  PricingCurve
//! │  (ledger)     │   mint / burn
//! │               │ ────────────────────────────▶  ReceiptToken
//! │               │   transfer_in / transfer_out
//! └──────────────┘ ────────────────────────────▶  AssetBank
//! ```
//!
//! Every operation runs in a fixed shape: validate, normalize, consult
//! the curve, move custody, then commit the ledger. A collaborator
//! failure at any point aborts the whole operation with the pre-image
//! state restored — atomicity is a hard requirement, not best-effort.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated newtypes: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Decimals`](domain::Decimals), [`FeeRate`](domain::FeeRate), [`AssetPair`](domain::AssetPair), ... |
//! | [`curve`] | [`PricingCurve`](curve::PricingCurve) trait and the default [`ConstantProductCurve`](curve::ConstantProductCurve) |
//! | [`pool`] | [`ReservePool`](pool::ReservePool) — the reserve ledger and its three operations |
//! | [`receipt`] | [`ReceiptToken`](receipt::ReceiptToken) — pool-owned share ledger with derived metadata |
//! | [`transfer`] | [`AssetBank`](transfer::AssetBank) custody seam and [`InMemoryBank`](transfer::InMemoryBank) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) validated construction parameters |
//! | [`math`] | Widening `mul_div` and integer square root |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod curve;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod receipt;
pub mod transfer;
