//! Ledger snapshot entities and the parse-time validation boundary.
//!
//! This module implements the immutable engine input:
//! - Entity types (transactions, categories, budgets, goals, subscriptions)
//! - Error types for malformed records
//! - One-shot normalization of raw (stringly-typed) records into typed entities
//!
//! The snapshot is created once by the persistence collaborator and handed to
//! the engine; the engine never mutates it and never performs storage I/O.

pub mod error;
pub mod types;
pub mod validation;

pub use error::SnapshotError;
pub use types::{
    Budget, Category, Frequency, Goal, LedgerSnapshot, Subscription, Transaction, TransactionKind,
};
pub use validation::{RawSubscription, RawTransaction, validate_subscription, validate_transaction};
