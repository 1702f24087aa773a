//! Recurring cost data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized cost totals over active subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionCostTotals {
    /// Number of active subscriptions counted.
    pub active_count: usize,
    /// Sum of monthly-equivalent costs.
    pub monthly_total: Decimal,
    /// Sum of annual-equivalent costs.
    pub annual_total: Decimal,
}

/// Count and cost of paused (inactive) subscriptions.
///
/// Paused subscriptions stay in the snapshot but are excluded from the cost
/// totals above; this summary exists for "paused" reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PausedSubscriptionSummary {
    /// Number of inactive subscriptions.
    pub count: usize,
    /// Monthly-equivalent total these would cost if resumed.
    pub monthly_total: Decimal,
}
