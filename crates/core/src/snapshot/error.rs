//! Snapshot validation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced while normalizing raw records into typed entities.
///
/// These are rejected once at the snapshot boundary; entities inside a
/// constructed [`super::LedgerSnapshot`] are always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Unrecognized transaction kind token.
    #[error("Unrecognized transaction kind: {0:?}")]
    InvalidKind(String),

    /// Unrecognized recurrence frequency token.
    #[error("Unrecognized frequency: {0:?}")]
    InvalidFrequency(String),

    /// Amount field could not be parsed as a decimal.
    #[error("Unparseable amount: {0:?}")]
    InvalidAmount(String),

    /// Transaction amounts must be non-negative.
    #[error("Amount must be non-negative, got {0}")]
    NegativeAmount(Decimal),

    /// Subscription amounts must be strictly positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Date field could not be parsed as an ISO calendar date.
    #[error("Unparseable date: {0:?}")]
    InvalidDate(String),
}
