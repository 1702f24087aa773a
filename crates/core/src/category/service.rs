//! Category aggregation service.

use std::collections::{BTreeMap, HashSet};

use rust_decimal::Decimal;

use crate::snapshot::{Category, Transaction, TransactionKind};

use super::types::CategoryBreakdownEntry;

/// Sentinel bucket for transactions whose category name matches no known
/// category. Such transactions are grouped here rather than dropped.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Service for per-category aggregation.
pub struct CategoryService;

impl CategoryService {
    /// Sums transaction amounts per category for one transaction kind and
    /// computes each category's percentage share.
    ///
    /// Entries come out sorted descending by amount; ties break ascending by
    /// category name so output is deterministic. Percentages are rounded to
    /// two decimal places and defined as zero when the filtered total is zero,
    /// so the result never contains a non-finite value.
    #[must_use]
    pub fn breakdown(
        transactions: &[Transaction],
        kind_filter: TransactionKind,
        categories: &[Category],
    ) -> Vec<CategoryBreakdownEntry> {
        let known: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();

        let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
        for tx in transactions {
            if tx.kind != kind_filter {
                continue;
            }
            let name = if known.contains(tx.category_name.as_str()) {
                tx.category_name.as_str()
            } else {
                UNCATEGORIZED
            };
            *sums.entry(name).or_insert(Decimal::ZERO) += tx.amount;
        }

        let total: Decimal = sums.values().sum();

        let mut entries: Vec<CategoryBreakdownEntry> = sums
            .into_iter()
            .map(|(name, amount)| {
                let percentage_of_total = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    (amount / total * Decimal::ONE_HUNDRED).round_dp(2)
                };
                CategoryBreakdownEntry {
                    category_name: name.to_string(),
                    amount,
                    percentage_of_total,
                }
            })
            .collect();

        // BTreeMap iteration already yields names ascending, so a stable sort
        // by descending amount leaves ties in name order.
        entries.sort_by(|a, b| b.amount.cmp(&a.amount));
        entries
    }
}
