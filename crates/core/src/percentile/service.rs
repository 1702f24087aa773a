//! Peer percentile ranking service.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Neutral rank returned when either side of the comparison carries no signal.
const NEUTRAL_RANK: u8 = 50;

/// Lowest rank the mapping can produce.
const MIN_RANK: u8 = 5;

/// Highest rank the mapping can produce.
const MAX_RANK: u8 = 95;

/// Service for ranking a user value against a peer-cohort average.
pub struct PercentileService;

impl PercentileService {
    /// Maps the ratio `r = user_value / peer_average` onto a percentile rank
    /// in `[5, 95]` via a three-segment piecewise-linear function:
    ///
    /// - `r <= 0.5` maps `[0, 0.5]` to `[20, 50]`
    /// - `0.5 < r <= 1.0` maps `(0.5, 1.0]` to `(50, 80]`
    /// - `r > 1.0` maps `(1.0, 2.0]` to `(80, 95]`, clamped above `2.0`
    ///
    /// The mapping is continuous at the segment boundaries (`r = 0.5` gives 50
    /// from both sides, `r = 1.0` gives 80) and monotonic throughout. When
    /// either input is zero there is no signal to compare, so the neutral rank
    /// 50 is returned; no division by zero can occur.
    ///
    /// The breakpoints are a product decision carried over from the original
    /// comparison feature, not a fitted statistical model.
    #[must_use]
    pub fn rank(peer_average: Decimal, user_value: Decimal) -> u8 {
        if peer_average.is_zero() || user_value.is_zero() {
            return NEUTRAL_RANK;
        }

        let half = Decimal::new(5, 1);
        let ratio = user_value / peer_average;

        let rank = if ratio <= half {
            Decimal::from(20) + ratio / half * Decimal::from(30)
        } else if ratio <= Decimal::ONE {
            Decimal::from(50) + (ratio - half) / half * Decimal::from(30)
        } else {
            let over = (ratio - Decimal::ONE).min(Decimal::ONE);
            Decimal::from(80) + over * Decimal::from(15)
        };

        rank.clamp(Decimal::from(MIN_RANK), Decimal::from(MAX_RANK))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(NEUTRAL_RANK)
    }
}
