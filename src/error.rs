//! Unified error types for the pool accounting engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type, ensuring a consistent error handling experience for
//! consumers. Every failure is local, synchronous, and non-retryable:
//! an operation either completes fully or aborts with no partial state
//! change.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Failure reported by an [`AssetBank`](crate::transfer::AssetBank)
/// collaborator when a custody transfer cannot complete.
///
/// The pool never inspects these beyond wrapping them into
/// [`PoolError::TransferFailed`]; they exist so a bank implementation can
/// report *why* a transfer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The source account holds less than the requested amount.
    #[error("account balance below requested amount")]
    InsufficientBalance,
    /// Pool custody holds less than the requested payout.
    #[error("pool custody below requested amount")]
    InsufficientCustody,
    /// Crediting the destination would overflow its balance.
    #[error("destination balance overflow")]
    BalanceOverflow,
}

/// Unified error enum for all pool operations.
///
/// Variants carry a `&'static str` describing the specific condition so
/// call sites stay allocation-free and the message is stable for matching
/// in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// A quantity was zero (or too small to be creditable) where a
    /// positive amount is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// An asset reference does not belong to the pool's pair.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Construction parameters are malformed.
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(&'static str),

    /// A collaborator transfer did not complete; the operation was
    /// aborted and any already-committed pulls were returned.
    #[error("asset transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// The pricing curve produced a zero swap output, typically from
    /// near-empty reserves or dust-sized input.
    #[error("swap produced no output")]
    InsufficientOutput,

    /// A burn request exceeds the caller's receipt-token holding.
    #[error("share amount exceeds caller holding")]
    InsufficientShares,

    /// An asset declares more fractional digits than the pool's internal
    /// precision supports.
    #[error("unsupported precision: {0}")]
    PrecisionError(&'static str),

    /// Checked arithmetic overflowed the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}
