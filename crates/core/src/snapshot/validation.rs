//! One-shot normalization of raw records into typed entities.
//!
//! Persistence collaborators hand over stringly-typed records (the shape they
//! were serialized in). Each record is validated exactly once here, so no
//! downstream consumer ever needs per-field defaulting or re-parsing.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::error::SnapshotError;
use super::types::{Frequency, Subscription, Transaction, TransactionKind};

/// Expected wire format for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A transaction record as stored by the persistence collaborator.
#[derive(Debug, Clone)]
pub struct RawTransaction {
    /// Stored ID, if any. A fresh ID is assigned when absent.
    pub id: Option<Uuid>,
    /// Kind token, e.g. `"income"` or `"expense"`.
    pub kind: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// Category name. Absent or empty means uncategorized.
    pub category_name: Option<String>,
    /// Free-form description. Absent means empty.
    pub description: Option<String>,
    /// Calendar date in `YYYY-MM-DD` form.
    pub occurred_at: String,
}

/// A subscription record as stored by the persistence collaborator.
#[derive(Debug, Clone)]
pub struct RawSubscription {
    /// Stored ID, if any.
    pub id: Option<Uuid>,
    /// Subscription name.
    pub name: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// Frequency token, e.g. `"weekly"`.
    pub frequency: String,
    /// Category name. Absent or empty means uncategorized.
    pub category_name: Option<String>,
    /// Next payment date in `YYYY-MM-DD` form.
    pub next_payment_date: String,
    /// Active flag. Absent defaults to active.
    pub active: Option<bool>,
}

/// Validates and normalizes a raw transaction record.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if the kind token, amount, or date is
/// malformed, or if the amount is negative.
pub fn validate_transaction(raw: &RawTransaction) -> Result<Transaction, SnapshotError> {
    let kind = TransactionKind::from_str(&raw.kind)?;
    let amount = parse_amount(&raw.amount)?;
    if amount < Decimal::ZERO {
        return Err(SnapshotError::NegativeAmount(amount));
    }
    let occurred_at = parse_date(&raw.occurred_at)?;

    Ok(Transaction {
        id: raw.id.unwrap_or_else(Uuid::new_v4),
        kind,
        amount,
        category_name: raw.category_name.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        occurred_at,
    })
}

/// Validates and normalizes a raw subscription record.
///
/// # Errors
///
/// Returns a [`SnapshotError`] if the frequency token, amount, or date is
/// malformed, or if the amount is not strictly positive.
pub fn validate_subscription(raw: &RawSubscription) -> Result<Subscription, SnapshotError> {
    let frequency = Frequency::from_str(&raw.frequency)?;
    let amount = parse_amount(&raw.amount)?;
    if amount <= Decimal::ZERO {
        return Err(SnapshotError::NonPositiveAmount(amount));
    }
    let next_payment_date = parse_date(&raw.next_payment_date)?;

    Ok(Subscription {
        id: raw.id.unwrap_or_else(Uuid::new_v4),
        name: raw.name.clone(),
        amount,
        frequency,
        category_name: raw.category_name.clone().unwrap_or_default(),
        next_payment_date,
        active: raw.active.unwrap_or(true),
    })
}

fn parse_amount(s: &str) -> Result<Decimal, SnapshotError> {
    Decimal::from_str(s.trim()).map_err(|_| SnapshotError::InvalidAmount(s.to_string()))
}

fn parse_date(s: &str) -> Result<NaiveDate, SnapshotError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| SnapshotError::InvalidDate(s.to_string()))
}
