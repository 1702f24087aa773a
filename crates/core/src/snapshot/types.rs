//! Ledger entity types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SnapshotError;

/// Transaction direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl FromStr for TransactionKind {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(SnapshotError::InvalidKind(s.to_string())),
        }
    }
}

/// A single dated ledger transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: Uuid,
    /// Income or expense.
    pub kind: TransactionKind,
    /// Transaction amount. Always non-negative; `kind` determines the sign
    /// when combined into a balance.
    pub amount: Decimal,
    /// Category name (soft reference to [`Category::name`], not ownership).
    pub category_name: String,
    /// Free-form description.
    pub description: String,
    /// Calendar date the transaction occurred.
    pub occurred_at: NaiveDate,
}

/// A spending or income category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: Uuid,
    /// Category name, unique within its kind scope.
    pub name: String,
    /// Whether this category classifies income or expenses.
    pub kind: TransactionKind,
    /// Opaque display token consumed by presentation layers.
    pub color: String,
}

/// A spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: Uuid,
    /// Category name this budget covers.
    pub category_name: String,
    /// Spending limit. Must be positive; enforced by the status engine.
    pub limit: Decimal,
    /// Running total spent. Externally maintained, not recomputed here.
    pub spent: Decimal,
}

/// A savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID.
    pub id: Uuid,
    /// Goal title.
    pub title: String,
    /// Target amount to save. Positive.
    pub target_amount: Decimal,
    /// Amount saved so far. Overshoot past the target is allowed.
    pub current_amount: Decimal,
    /// Date the goal should be reached. May already be in the past.
    pub target_date: NaiveDate,
}

/// Recurring charge frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every 7 days.
    Weekly,
    /// Every calendar month.
    Monthly,
    /// Every calendar year.
    Yearly,
}

impl FromStr for Frequency {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(SnapshotError::InvalidFrequency(s.to_string())),
        }
    }
}

/// A recurring subscription charge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: Uuid,
    /// Subscription name.
    pub name: String,
    /// Charge amount per occurrence. Positive.
    pub amount: Decimal,
    /// How often the charge recurs.
    pub frequency: Frequency,
    /// Category name the charge belongs to.
    pub category_name: String,
    /// Date of the next expected payment.
    pub next_payment_date: NaiveDate,
    /// Inactive subscriptions are excluded from cost totals but kept in the
    /// snapshot for "paused" reporting.
    pub active: bool,
}

/// Immutable, point-in-time collection of ledger entities.
///
/// Loaded once by the persistence collaborator and handed to the engine.
/// Every engine query is a pure function of a snapshot (plus an explicit
/// reference date), so concurrent callers need no coordination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// All transactions, in no particular order.
    pub transactions: Vec<Transaction>,
    /// Known categories.
    pub categories: Vec<Category>,
    /// Active budgets.
    pub budgets: Vec<Budget>,
    /// Savings goals.
    pub goals: Vec<Goal>,
    /// Subscriptions, active and paused.
    pub subscriptions: Vec<Subscription>,
}
