//! Facade data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryBreakdownEntry;
use crate::period::PeriodBucket;
use crate::recurring::{PausedSubscriptionSummary, SubscriptionCostTotals};
use crate::status::{BudgetHealth, GoalProgress};

/// One budget's health within the dashboard overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetHealthEntry {
    /// Budget ID.
    pub budget_id: Uuid,
    /// Category the budget covers.
    pub category_name: String,
    /// Running spent total.
    pub spent: Decimal,
    /// Spending limit.
    pub limit: Decimal,
    /// Status and utilization.
    pub health: BudgetHealth,
}

/// Composed dashboard view over one snapshot.
///
/// Single shared derivation of the figures every presentation surface needs,
/// so the same balance math is never re-implemented per screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Sum of all income transaction amounts.
    pub total_income: Decimal,
    /// Sum of all expense transaction amounts.
    pub total_expense: Decimal,
    /// Net balance (income minus expense).
    pub net_balance: Decimal,
    /// Naive end-of-period projection from the reference month's activity.
    pub projected_balance: Decimal,
    /// Month-bucketed series over all transactions, oldest first.
    pub monthly_series: Vec<PeriodBucket>,
    /// Ranked expense breakdown by category.
    pub expense_breakdown: Vec<CategoryBreakdownEntry>,
    /// Normalized cost of active subscriptions.
    pub subscription_costs: SubscriptionCostTotals,
    /// Paused subscription summary.
    pub paused_subscriptions: PausedSubscriptionSummary,
    /// Health of each budget with a valid (positive) limit.
    pub budget_health: Vec<BudgetHealthEntry>,
    /// Progress of every goal.
    pub goals: Vec<GoalProgress>,
}
