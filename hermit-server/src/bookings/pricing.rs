//! Stay Pricing
//!
//! Total charge for a stay. Uses rust_decimal end to end so repeated
//! recomputation (date changes, occupancy changes) never drifts.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Number of billable nights in `[check_in, check_out)`.
///
/// The date invariant (`check_out > check_in`) already guarantees at least
/// one night; the clamp keeps the function total for out-of-order input.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(1)
}

/// Total charge: nights × nightly rate, exact decimal arithmetic
pub fn total_for_stay(nightly_rate: Decimal, check_in: NaiveDate, check_out: NaiveDate) -> Decimal {
    Decimal::from(nights(check_in, check_out)) * nightly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn three_nights_at_100_is_300() {
        let total = total_for_stay(dec!(100), d(2024, 6, 1), d(2024, 6, 4));
        assert_eq!(total, dec!(300));
    }

    #[test]
    fn single_night_stay() {
        assert_eq!(nights(d(2024, 6, 1), d(2024, 6, 2)), 1);
        let total = total_for_stay(dec!(89.50), d(2024, 6, 1), d(2024, 6, 2));
        assert_eq!(total, dec!(89.50));
    }

    #[test]
    fn fractional_rate_stays_exact() {
        // 0.1 is not representable in binary floating point; Decimal keeps
        // 10 × 0.1 exactly 1.
        let total = total_for_stay(dec!(0.10), d(2024, 6, 1), d(2024, 6, 11));
        assert_eq!(total, dec!(1.00));
    }

    #[test]
    fn crosses_month_boundary() {
        let total = total_for_stay(dec!(120), d(2024, 1, 30), d(2024, 2, 2));
        assert_eq!(total, dec!(360));
    }
}
