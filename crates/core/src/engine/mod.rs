//! Read-only query facade over the analytics components.
//!
//! Presentation collaborators consume this surface instead of re-deriving
//! balance and percentage math per screen; every query is a pure function of
//! a snapshot plus an explicit reference date.

pub mod service;
pub mod types;

pub use service::AnalyticsEngine;
pub use types::{BudgetHealthEntry, DashboardOverview};
