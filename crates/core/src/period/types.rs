//! Period bucketing data types.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bucket granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One bucket per calendar day.
    Day,
    /// One bucket per ISO-8601 week (Monday start, first-Thursday rule).
    Week,
    /// One bucket per calendar month.
    Month,
}

/// Structured sort key for one time period.
///
/// Ordering is always on the underlying date or integer pair, never on the
/// rendered label. Localized month names sort alphabetically; year/month
/// integers do not, so the display string is generated only at presentation
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    /// A single calendar day.
    Day(NaiveDate),
    /// An ISO-8601 week.
    Week {
        /// ISO week-based year (differs from the calendar year around 1 Jan).
        iso_year: i32,
        /// ISO week number, 1-53.
        week: u32,
    },
    /// A calendar month.
    Month {
        /// Calendar year.
        year: i32,
        /// Month number, 1-12.
        month: u32,
    },
}

impl PeriodKey {
    /// Returns the period key containing `date` at the given granularity.
    ///
    /// A date exactly on a week or month boundary belongs to the period that
    /// contains it per the ISO/calendar rule, never to an adjacent period.
    #[must_use]
    pub fn for_date(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Day => Self::Day(date),
            Granularity::Week => {
                let iso = date.iso_week();
                Self::Week {
                    iso_year: iso.year(),
                    week: iso.week(),
                }
            }
            Granularity::Month => Self::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    /// Returns the granularity this key was bucketed at.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Day(_) => Granularity::Day,
            Self::Week { .. } => Granularity::Week,
            Self::Month { .. } => Granularity::Month,
        }
    }

    /// Renders a human-readable label for presentation layers.
    ///
    /// Month keys render as `"Mar 2024"`; other keys reuse the sortable form.
    #[must_use]
    pub fn label(&self) -> String {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        match self {
            Self::Month { year, month } => {
                format!("{} {year}", MONTHS[(*month as usize) - 1])
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Week { iso_year, week } => write!(f, "{iso_year}-W{week:02}"),
            Self::Month { year, month } => write!(f, "{year}-{month:02}"),
        }
    }
}

/// Income and expense totals for one period.
///
/// Value object, newly allocated per query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// The period this bucket covers.
    pub period: PeriodKey,
    /// Sum of income transaction amounts in the period.
    pub income: Decimal,
    /// Sum of expense transaction amounts in the period.
    pub expense: Decimal,
}

impl PeriodBucket {
    /// Renders the stable, sortable string key for this bucket.
    #[must_use]
    pub fn key(&self) -> String {
        self.period.to_string()
    }

    /// Net amount for the period (income minus expense).
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}
