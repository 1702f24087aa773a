//! Period bucketing service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::snapshot::{Transaction, TransactionKind};

use super::types::{Granularity, PeriodBucket, PeriodKey};

/// Service for grouping transactions into time buckets.
pub struct PeriodService;

impl PeriodService {
    /// Groups transactions into period buckets, sorted ascending by period.
    ///
    /// `window`, when given, filters transactions to the inclusive
    /// `[start, end]` date range before bucketing. An empty input or a window
    /// containing no transactions yields an empty vector, not an error.
    ///
    /// Each transaction contributes its amount to the `income` or `expense`
    /// side of its bucket based on its kind. Output order comes from the
    /// structured [`PeriodKey`], so month buckets across a year boundary sort
    /// chronologically rather than alphabetically.
    #[must_use]
    pub fn bucket(
        transactions: &[Transaction],
        granularity: Granularity,
        window: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<PeriodBucket> {
        let mut totals: BTreeMap<PeriodKey, (Decimal, Decimal)> = BTreeMap::new();

        for tx in transactions {
            if let Some((start, end)) = window {
                if tx.occurred_at < start || tx.occurred_at > end {
                    continue;
                }
            }

            let key = PeriodKey::for_date(tx.occurred_at, granularity);
            let entry = totals.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
            match tx.kind {
                TransactionKind::Income => entry.0 += tx.amount,
                TransactionKind::Expense => entry.1 += tx.amount,
            }
        }

        totals
            .into_iter()
            .map(|(period, (income, expense))| PeriodBucket {
                period,
                income,
                expense,
            })
            .collect()
    }
}
