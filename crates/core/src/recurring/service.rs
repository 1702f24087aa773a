//! Recurring cost normalization service.

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::snapshot::{Frequency, Subscription};

use super::types::{PausedSubscriptionSummary, SubscriptionCostTotals};

/// Weeks in a year, used to normalize weekly charges.
const WEEKS_PER_YEAR: u32 = 52;

/// Months in a year.
const MONTHS_PER_YEAR: u32 = 12;

/// Service for normalizing recurring charges across frequencies.
pub struct RecurringService;

impl RecurringService {
    /// Converts a recurring charge to its average monthly cost.
    ///
    /// Weekly charges scale by 52/12, yearly charges divide by 12.
    #[must_use]
    pub fn monthly_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::Weekly => {
                amount * Decimal::from(WEEKS_PER_YEAR) / Decimal::from(MONTHS_PER_YEAR)
            }
            Frequency::Monthly => amount,
            Frequency::Yearly => amount / Decimal::from(MONTHS_PER_YEAR),
        }
    }

    /// Converts a recurring charge to its annual cost.
    #[must_use]
    pub fn annual_equivalent(amount: Decimal, frequency: Frequency) -> Decimal {
        match frequency {
            Frequency::Weekly => amount * Decimal::from(WEEKS_PER_YEAR),
            Frequency::Monthly => amount * Decimal::from(MONTHS_PER_YEAR),
            Frequency::Yearly => amount,
        }
    }

    /// Returns the next occurrence after `date`.
    ///
    /// Addition is calendar-aware, not fixed-duration: one month from Jan 31
    /// is Feb 28 (or 29), and one year from Feb 29 is Feb 28. A charge on the
    /// 31st therefore never skips a shorter month. Saturates at the calendar's
    /// representable bounds.
    #[must_use]
    pub fn next_occurrence(date: NaiveDate, frequency: Frequency) -> NaiveDate {
        match frequency {
            Frequency::Weekly => date.checked_add_days(Days::new(7)).unwrap_or(date),
            Frequency::Monthly => date.checked_add_months(Months::new(1)).unwrap_or(date),
            Frequency::Yearly => date
                .checked_add_months(Months::new(MONTHS_PER_YEAR))
                .unwrap_or(date),
        }
    }

    /// Returns the next `n` occurrences after `anchor`, oldest first.
    ///
    /// Each occurrence is computed from the anchor, not from the previous
    /// occurrence, so a monthly charge anchored on the 31st clamps to Feb 28
    /// and still returns to the 31st in March instead of drifting to the 28th.
    #[must_use]
    pub fn upcoming_occurrences(
        anchor: NaiveDate,
        frequency: Frequency,
        n: usize,
    ) -> Vec<NaiveDate> {
        (1..=n as u32)
            .map(|k| match frequency {
                Frequency::Weekly => anchor
                    .checked_add_days(Days::new(u64::from(7 * k)))
                    .unwrap_or(anchor),
                Frequency::Monthly => anchor
                    .checked_add_months(Months::new(k))
                    .unwrap_or(anchor),
                Frequency::Yearly => anchor
                    .checked_add_months(Months::new(MONTHS_PER_YEAR * k))
                    .unwrap_or(anchor),
            })
            .collect()
    }

    /// Sums normalized costs over active subscriptions only.
    #[must_use]
    pub fn active_cost_totals(subscriptions: &[Subscription]) -> SubscriptionCostTotals {
        let mut totals = SubscriptionCostTotals {
            active_count: 0,
            monthly_total: Decimal::ZERO,
            annual_total: Decimal::ZERO,
        };

        for sub in subscriptions.iter().filter(|s| s.active) {
            totals.active_count += 1;
            totals.monthly_total += Self::monthly_equivalent(sub.amount, sub.frequency);
            totals.annual_total += Self::annual_equivalent(sub.amount, sub.frequency);
        }

        totals
    }

    /// Counts inactive subscriptions and what they would cost if resumed.
    #[must_use]
    pub fn paused_summary(subscriptions: &[Subscription]) -> PausedSubscriptionSummary {
        let mut summary = PausedSubscriptionSummary {
            count: 0,
            monthly_total: Decimal::ZERO,
        };

        for sub in subscriptions.iter().filter(|s| !s.active) {
            summary.count += 1;
            summary.monthly_total += Self::monthly_equivalent(sub.amount, sub.frequency);
        }

        summary
    }
}
