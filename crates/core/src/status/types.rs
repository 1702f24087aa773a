//! Status engine data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a budget's spent/limit ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Under 80% of the limit spent.
    Good,
    /// At or above 80% of the limit spent.
    Warning,
    /// At or above the limit.
    Exceeded,
}

/// A budget's status together with its utilization percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetHealth {
    /// Status classification.
    pub status: BudgetStatus,
    /// Spent as a percentage of the limit (may exceed 100).
    pub percentage: Decimal,
}

/// Derived progress view of a savings goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Goal ID.
    pub goal_id: Uuid,
    /// Goal title.
    pub title: String,
    /// Current amount as a percentage of the target (overshoot exceeds 100).
    pub percent_complete: Decimal,
    /// Whole calendar months until the target date. Zero or negative when the
    /// goal is due within the current month or overdue.
    pub months_remaining: i32,
    /// Required contribution per remaining month, or the outstanding lump sum
    /// when no whole months remain.
    pub monthly_contribution: Decimal,
}
