//! Property-based tests for status classification.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::StatusService;
use super::types::BudgetStatus;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u32..7305).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2015, 1, 1).unwrap() + chrono::Days::new(u64::from(offset))
    })
}

proptest! {
    /// The classification always agrees with the exact spent/limit ratio.
    #[test]
    fn prop_status_matches_ratio(
        spent_cents in 0i64..100_000_000,
        limit_cents in 1i64..100_000_000,
    ) {
        let spent = Decimal::new(spent_cents, 2);
        let limit = Decimal::new(limit_cents, 2);

        let health = StatusService::budget_status(spent, limit).unwrap();
        let ratio = spent / limit;

        match health.status {
            BudgetStatus::Exceeded => prop_assert!(ratio >= Decimal::ONE),
            BudgetStatus::Warning => {
                prop_assert!(ratio >= dec!(0.8));
                prop_assert!(ratio < Decimal::ONE);
            }
            BudgetStatus::Good => prop_assert!(ratio < dec!(0.8)),
        }
    }

    /// Non-positive limits are always rejected, never divided by.
    #[test]
    fn prop_non_positive_limit_rejected(
        spent_cents in 0i64..100_000_000,
        limit_cents in -100_000_000i64..=0,
    ) {
        let result = StatusService::budget_status(
            Decimal::new(spent_cents, 2),
            Decimal::new(limit_cents, 2),
        );
        prop_assert!(result.is_err());
    }

    /// With whole months remaining, paying the contribution every month
    /// exactly covers the outstanding remainder.
    #[test]
    fn prop_contribution_covers_remainder(
        target_cents in 1i64..100_000_000,
        current_cents in 0i64..100_000_000,
        now in date_strategy(),
        months_ahead in 1u32..60,
    ) {
        let target = Decimal::new(target_cents, 2);
        let current = Decimal::new(current_cents, 2);
        let target_date = now + chrono::Months::new(months_ahead);

        let months_left = StatusService::months_remaining(target_date, now);
        prop_assume!(months_left > 0);

        let contribution =
            StatusService::goal_monthly_contribution(target, current, target_date, now);
        let remaining = target - current;

        if remaining <= Decimal::ZERO {
            prop_assert_eq!(contribution, Decimal::ZERO);
        } else {
            let paid = contribution * Decimal::from(months_left);
            let deviation = (paid - remaining).abs();
            prop_assert!(deviation <= dec!(0.000001));
        }
    }

    /// The projection is exactly linear in each argument.
    #[test]
    fn prop_projection_linear(
        balance in -100_000_000i64..100_000_000,
        income in 0i64..100_000_000,
        expense in 0i64..100_000_000,
    ) {
        let balance = Decimal::new(balance, 2);
        let income = Decimal::new(income, 2);
        let expense = Decimal::new(expense, 2);

        let projected = StatusService::projected_balance(balance, income, expense);
        prop_assert_eq!(projected - balance, income - expense);
    }
}
