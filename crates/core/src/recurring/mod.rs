//! Recurring cost normalization and occurrence schedules.

pub mod service;
pub mod types;


pub use service::RecurringService;
pub use types::{PausedSubscriptionSummary, SubscriptionCostTotals};
