//! Budget and goal status service.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::snapshot::Goal;

use super::error::StatusError;
use super::types::{BudgetHealth, BudgetStatus, GoalProgress};

/// Utilization percentage at which a budget turns to [`BudgetStatus::Warning`].
const WARNING_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Service for budget and goal status classification.
pub struct StatusService;

impl StatusService {
    /// Classifies a budget's spent/limit ratio.
    ///
    /// `percentage = spent / limit * 100`; at or above 100 is `Exceeded`, at
    /// or above 80 is `Warning`, otherwise `Good`. Classification happens on
    /// the exact ratio; the returned percentage is rounded to two decimal
    /// places for display.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::InvalidBudget`] when `limit <= 0`, instead of
    /// dividing by zero.
    pub fn budget_status(spent: Decimal, limit: Decimal) -> Result<BudgetHealth, StatusError> {
        if limit <= Decimal::ZERO {
            return Err(StatusError::InvalidBudget(limit));
        }

        let percentage = spent / limit * Decimal::ONE_HUNDRED;
        let status = if percentage >= Decimal::ONE_HUNDRED {
            BudgetStatus::Exceeded
        } else if percentage >= WARNING_THRESHOLD {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };

        Ok(BudgetHealth {
            status,
            percentage: percentage.round_dp(2),
        })
    }

    /// Whole calendar months from `now` until `target_date`.
    ///
    /// Computed from year/month components only, ignoring the day of month,
    /// so a target within the current month counts as zero. Negative when the
    /// target month has already passed.
    #[must_use]
    pub fn months_remaining(target_date: NaiveDate, now: NaiveDate) -> i32 {
        (target_date.year() - now.year()) * 12 + (target_date.month() as i32 - now.month() as i32)
    }

    /// Required monthly contribution to reach a goal by its target date.
    ///
    /// Returns zero when the goal is already met or overshot. When no whole
    /// months remain (target date passed or within the current month), the
    /// outstanding remainder is returned as a single lump sum.
    #[must_use]
    pub fn goal_monthly_contribution(
        target: Decimal,
        current: Decimal,
        target_date: NaiveDate,
        now: NaiveDate,
    ) -> Decimal {
        let remaining = target - current;
        if remaining <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let months_left = Self::months_remaining(target_date, now);
        if months_left > 0 {
            remaining / Decimal::from(months_left)
        } else {
            remaining
        }
    }

    /// Naive end-of-period balance projection.
    ///
    /// Zero-order linear estimate: `balance + income - expense`. This is not
    /// a forecast model; there is no smoothing and no seasonality.
    #[must_use]
    pub fn projected_balance(
        current_balance: Decimal,
        period_income: Decimal,
        period_expense: Decimal,
    ) -> Decimal {
        current_balance + period_income - period_expense
    }

    /// Builds the derived progress view for one goal.
    #[must_use]
    pub fn goal_progress(goal: &Goal, now: NaiveDate) -> GoalProgress {
        let percent_complete = if goal.target_amount.is_zero() {
            Decimal::ZERO
        } else {
            (goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED).round_dp(2)
        };

        GoalProgress {
            goal_id: goal.id,
            title: goal.title.clone(),
            percent_complete,
            months_remaining: Self::months_remaining(goal.target_date, now),
            monthly_contribution: Self::goal_monthly_contribution(
                goal.target_amount,
                goal.current_amount,
                goal.target_date,
                now,
            ),
        }
    }
}
