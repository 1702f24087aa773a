//! Property-based tests for category breakdowns.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::snapshot::{Category, Transaction, TransactionKind};

use super::service::{CategoryService, UNCATEGORIZED};

const NAMES: [&str; 5] = ["Rent", "Groceries", "Transport", "Dining", "Utilities"];

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (1i64..1_000_000, 0usize..NAMES.len(), any::<bool>()).prop_map(|(cents, idx, known)| {
        Transaction {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            amount: Decimal::new(cents, 2),
            category_name: if known {
                NAMES[idx].to_string()
            } else {
                format!("unknown-{idx}")
            },
            description: String::new(),
            occurred_at: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    })
}

fn known_categories() -> Vec<Category> {
    NAMES
        .iter()
        .map(|name| Category {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            kind: TransactionKind::Expense,
            color: "#888888".to_string(),
        })
        .collect()
}

proptest! {
    /// Whenever the filtered total is positive, percentages sum to 100 within
    /// a rounding epsilon of 0.5.
    #[test]
    fn prop_percentages_sum_to_one_hundred(
        txs in prop::collection::vec(transaction_strategy(), 1..40),
    ) {
        let categories = known_categories();
        let entries = CategoryService::breakdown(&txs, TransactionKind::Expense, &categories);

        let total: Decimal = entries.iter().map(|e| e.amount).sum();
        prop_assume!(total > Decimal::ZERO);

        let percent_sum: Decimal = entries.iter().map(|e| e.percentage_of_total).sum();
        let deviation = (percent_sum - Decimal::ONE_HUNDRED).abs();
        prop_assert!(deviation <= dec!(0.5), "percent sum {} deviates", percent_sum);
    }

    /// No transaction is dropped: the breakdown total always equals the sum of
    /// matching transaction amounts, and the sentinel appears at most once.
    #[test]
    fn prop_breakdown_is_complete(
        txs in prop::collection::vec(transaction_strategy(), 0..40),
    ) {
        let categories = known_categories();
        let entries = CategoryService::breakdown(&txs, TransactionKind::Expense, &categories);

        let expected: Decimal = txs.iter().map(|t| t.amount).sum();
        let actual: Decimal = entries.iter().map(|e| e.amount).sum();
        prop_assert_eq!(actual, expected);

        let sentinel_count = entries
            .iter()
            .filter(|e| e.category_name == UNCATEGORIZED)
            .count();
        prop_assert!(sentinel_count <= 1);
    }

    /// Output ordering is deterministic: descending by amount, ties ascending
    /// by name.
    #[test]
    fn prop_breakdown_ordering_deterministic(
        txs in prop::collection::vec(transaction_strategy(), 0..40),
    ) {
        let categories = known_categories();
        let entries = CategoryService::breakdown(&txs, TransactionKind::Expense, &categories);

        for pair in entries.windows(2) {
            let in_order = pair[0].amount > pair[1].amount
                || (pair[0].amount == pair[1].amount
                    && pair[0].category_name < pair[1].category_name);
            prop_assert!(in_order);
        }
    }
}
