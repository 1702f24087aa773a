//! Budget and goal status classification.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::StatusError;
pub use service::StatusService;
pub use types::{BudgetHealth, BudgetStatus, GoalProgress};
