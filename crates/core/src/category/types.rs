//! Category breakdown data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One category's share of a filtered total.
///
/// Value object, newly allocated per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdownEntry {
    /// Category name, or the `"Uncategorized"` sentinel.
    pub category_name: String,
    /// Summed amount for this category.
    pub amount: Decimal,
    /// Share of the filtered total, 0-100. Zero when the total is zero.
    pub percentage_of_total: Decimal,
}
