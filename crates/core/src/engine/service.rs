//! Analytics query facade.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::category::{CategoryBreakdownEntry, CategoryService};
use crate::percentile::PercentileService;
use crate::period::{Granularity, PeriodBucket, PeriodKey, PeriodService};
use crate::recurring::{PausedSubscriptionSummary, RecurringService, SubscriptionCostTotals};
use crate::snapshot::{
    Category, Frequency, LedgerSnapshot, Transaction, TransactionKind,
};
use crate::status::{BudgetHealth, StatusError, StatusService};

use super::types::{BudgetHealthEntry, DashboardOverview};

/// Read-only query surface composing every analytics component.
///
/// All operations are synchronous, allocation-bounded passes over the inputs;
/// nothing here mutates a snapshot, reads a clock, or performs I/O.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Groups transactions into period buckets. See [`PeriodService::bucket`].
    #[must_use]
    pub fn time_series(
        transactions: &[Transaction],
        granularity: Granularity,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<PeriodBucket> {
        debug!(?granularity, count = transactions.len(), "bucketing time series");
        PeriodService::bucket(transactions, granularity, window)
    }

    /// Ranked per-category breakdown. See [`CategoryService::breakdown`].
    #[must_use]
    pub fn breakdown(
        transactions: &[Transaction],
        kind_filter: TransactionKind,
        categories: &[Category],
    ) -> Vec<CategoryBreakdownEntry> {
        debug!(?kind_filter, count = transactions.len(), "computing category breakdown");
        CategoryService::breakdown(transactions, kind_filter, categories)
    }

    /// Peer percentile rank in `[5, 95]`. See [`PercentileService::rank`].
    #[must_use]
    pub fn percentile(peer_average: Decimal, user_value: Decimal) -> u8 {
        PercentileService::rank(peer_average, user_value)
    }

    /// Average monthly cost of a recurring charge.
    #[must_use]
    pub fn monthly_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
        RecurringService::monthly_equivalent(amount, frequency)
    }

    /// Annual cost of a recurring charge.
    #[must_use]
    pub fn annual_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
        RecurringService::annual_equivalent(amount, frequency)
    }

    /// Calendar-aware next occurrence of a recurring charge.
    #[must_use]
    pub fn next_occurrence(date: NaiveDate, frequency: Frequency) -> NaiveDate {
        RecurringService::next_occurrence(date, frequency)
    }

    /// Next `n` occurrences of a recurring charge, oldest first.
    #[must_use]
    pub fn upcoming_occurrences(
        anchor: NaiveDate,
        frequency: Frequency,
        n: usize,
    ) -> Vec<NaiveDate> {
        RecurringService::upcoming_occurrences(anchor, frequency, n)
    }

    /// Budget status classification.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidBudget`] when the limit is not positive.
    pub fn budget_status(spent: Decimal, limit: Decimal) -> Result<BudgetHealth, StatusError> {
        StatusService::budget_status(spent, limit)
    }

    /// Required monthly contribution toward a goal.
    #[must_use]
    pub fn goal_monthly_contribution(
        target: Decimal,
        current: Decimal,
        target_date: NaiveDate,
        now: NaiveDate,
    ) -> Decimal {
        StatusService::goal_monthly_contribution(target, current, target_date, now)
    }

    /// Naive end-of-period balance projection.
    #[must_use]
    pub fn projected_end_of_period_balance(
        current_balance: Decimal,
        period_income: Decimal,
        period_expense: Decimal,
    ) -> Decimal {
        StatusService::projected_balance(current_balance, period_income, period_expense)
    }

    /// Composes the full dashboard view over one snapshot.
    ///
    /// `now` fixes the reference month for the balance projection and the
    /// reference date for goal math. Budgets with a non-positive limit are
    /// skipped with a debug event rather than failing the whole overview.
    #[must_use]
    pub fn dashboard_overview(snapshot: &LedgerSnapshot, now: NaiveDate) -> DashboardOverview {
        debug!(
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            goals = snapshot.goals.len(),
            %now,
            "composing dashboard overview"
        );

        let total_income: Decimal = snapshot
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let total_expense: Decimal = snapshot
            .transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();
        let net_balance = total_income - total_expense;

        let monthly_series =
            PeriodService::bucket(&snapshot.transactions, Granularity::Month, None);

        // Project forward from the reference month's activity.
        let current_period = PeriodKey::for_date(now, Granularity::Month);
        let (period_income, period_expense) = monthly_series
            .iter()
            .find(|b| b.period == current_period)
            .map_or((Decimal::ZERO, Decimal::ZERO), |b| (b.income, b.expense));
        let projected_balance =
            StatusService::projected_balance(net_balance, period_income, period_expense);

        let budget_health = snapshot
            .budgets
            .iter()
            .filter_map(|budget| match StatusService::budget_status(budget.spent, budget.limit) {
                Ok(health) => Some(BudgetHealthEntry {
                    budget_id: budget.id,
                    category_name: budget.category_name.clone(),
                    spent: budget.spent,
                    limit: budget.limit,
                    health,
                }),
                Err(err) => {
                    debug!(budget_id = %budget.id, %err, "skipping invalid budget");
                    None
                }
            })
            .collect();

        DashboardOverview {
            total_income,
            total_expense,
            net_balance,
            projected_balance,
            monthly_series,
            expense_breakdown: CategoryService::breakdown(
                &snapshot.transactions,
                TransactionKind::Expense,
                &snapshot.categories,
            ),
            subscription_costs: RecurringService::active_cost_totals(&snapshot.subscriptions),
            paused_subscriptions: RecurringService::paused_summary(&snapshot.subscriptions),
            budget_health,
            goals: snapshot
                .goals
                .iter()
                .map(|goal| StatusService::goal_progress(goal, now))
                .collect(),
        }
    }

    /// Normalized cost totals of active subscriptions in a snapshot.
    #[must_use]
    pub fn subscription_costs(snapshot: &LedgerSnapshot) -> SubscriptionCostTotals {
        RecurringService::active_cost_totals(&snapshot.subscriptions)
    }

    /// Paused subscription summary for a snapshot.
    #[must_use]
    pub fn paused_subscriptions(snapshot: &LedgerSnapshot) -> PausedSubscriptionSummary {
        RecurringService::paused_summary(&snapshot.subscriptions)
    }
}
