//! Status engine error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from budget/goal status classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    /// Budget limits must be strictly positive.
    #[error("Budget limit must be positive, got {0}")]
    InvalidBudget(Decimal),
}
