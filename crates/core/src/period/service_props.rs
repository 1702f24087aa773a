//! Property-based tests for period bucketing.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::snapshot::{Transaction, TransactionKind};

use super::service::PeriodService;
use super::types::Granularity;

fn granularity_strategy() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Week),
        Just(Granularity::Month),
    ]
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (0i64..1_000_000, any::<bool>(), 0u32..3653).prop_map(|(cents, is_income, day_offset)| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        Transaction {
            id: Uuid::new_v4(),
            kind: if is_income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            },
            amount: Decimal::new(cents, 2),
            category_name: "General".to_string(),
            description: String::new(),
            occurred_at: base + chrono::Days::new(u64::from(day_offset)),
        }
    })
}

proptest! {
    /// For any granularity, the sum of bucket income plus bucket expense over
    /// all buckets equals the sum of all input transaction amounts.
    #[test]
    fn prop_bucketing_conserves_totals(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
        granularity in granularity_strategy(),
    ) {
        let expected: Decimal = txs.iter().map(|t| t.amount).sum();

        let buckets = PeriodService::bucket(&txs, granularity, None);
        let actual: Decimal = buckets.iter().map(|b| b.income + b.expense).sum();

        prop_assert_eq!(actual, expected);
    }

    /// Income never leaks into expense totals and vice versa.
    #[test]
    fn prop_bucketing_conserves_totals_per_side(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
        granularity in granularity_strategy(),
    ) {
        let expected_income: Decimal = txs
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expected_expense: Decimal = txs
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        let buckets = PeriodService::bucket(&txs, granularity, None);

        prop_assert_eq!(buckets.iter().map(|b| b.income).sum::<Decimal>(), expected_income);
        prop_assert_eq!(buckets.iter().map(|b| b.expense).sum::<Decimal>(), expected_expense);
    }

    /// Buckets come out strictly ascending by structured period key, with one
    /// bucket per distinct period.
    #[test]
    fn prop_buckets_strictly_ascending(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
        granularity in granularity_strategy(),
    ) {
        let buckets = PeriodService::bucket(&txs, granularity, None);

        for pair in buckets.windows(2) {
            prop_assert!(pair[0].period < pair[1].period);
        }
    }

    /// Windowed bucketing totals never exceed unwindowed totals, and windowed
    /// transactions are exactly those inside the inclusive range.
    #[test]
    fn prop_window_filter_inclusive(
        txs in prop::collection::vec(transaction_strategy(), 0..50),
        granularity in granularity_strategy(),
        start_offset in 0u32..3653,
        len in 0u32..800,
    ) {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let start = base + chrono::Days::new(u64::from(start_offset));
        let end = start + chrono::Days::new(u64::from(len));

        let expected: Decimal = txs
            .iter()
            .filter(|t| t.occurred_at >= start && t.occurred_at <= end)
            .map(|t| t.amount)
            .sum();

        let buckets = PeriodService::bucket(&txs, granularity, Some((start, end)));
        let actual: Decimal = buckets.iter().map(|b| b.income + b.expense).sum();

        prop_assert_eq!(actual, expected);
    }
}
