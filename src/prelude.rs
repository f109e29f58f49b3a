//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use pair_pool::prelude::*;
//! ```

// Domain value types
pub use crate::domain::{
    AccountId, Amount, Asset, AssetId, AssetPair, Decimals, FeeRate, Rounding, Shares, Side,
};

// Curve abstraction and the default implementation
pub use crate::curve::{ConstantProductCurve, PricingCurve};

// Ledger, configuration, and collaborators
pub use crate::config::PoolConfig;
pub use crate::pool::{PoolState, ReservePool};
pub use crate::receipt::ReceiptToken;
pub use crate::transfer::{AssetBank, InMemoryBank};

// Error types
pub use crate::error::{PoolError, Result, TransferError};
