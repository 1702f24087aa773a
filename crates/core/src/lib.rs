//! Ledger analytics engine for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It consumes an immutable [`snapshot::LedgerSnapshot`] of ledger entities and
//! produces derived, read-only views: time-bucketed series, category breakdowns,
//! peer comparisons, recurring-cost normalization, and budget/goal status.
//!
//! Every operation is a pure function of its inputs. The reference "now" used by
//! date-relative calculations is always an explicit parameter, never a system
//! clock, so results are deterministic and testable.
//!
//! # Modules
//!
//! - `snapshot` - Ledger entities and the parse-time validation boundary
//! - `period` - Day/week/month time bucketing
//! - `category` - Per-category aggregation and ranked breakdowns
//! - `percentile` - Peer percentile comparison
//! - `recurring` - Recurring cost normalization and occurrence schedules
//! - `status` - Budget and goal status classification
//! - `engine` - Read-only query facade composing the above

pub mod category;
pub mod engine;
pub mod percentile;
pub mod period;
pub mod recurring;
pub mod snapshot;
pub mod status;
