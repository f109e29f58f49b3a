//! Fundamental domain value types used throughout the pool ledger.
//!
//! All types are newtypes with validated constructors so that a value in
//! scope is already known to satisfy its invariants: a [`Decimals`] is
//! within the internal precision, a [`FeeRate`] leaves something to
//! trade, an [`AssetPair`] holds two distinct assets.

mod account;
mod amount;
mod asset;
mod asset_id;
mod decimals;
mod fee_rate;
mod pair;
mod rounding;
mod shares;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::Asset;
pub use asset_id::AssetId;
pub use decimals::{Decimals, POOL_DECIMALS};
pub use fee_rate::FeeRate;
pub use pair::{AssetPair, Side};
pub use rounding::Rounding;
pub use shares::Shares;
