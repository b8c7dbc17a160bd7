//! Accrued interest between coupon dates.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use tenor_core::daycounts::DayCountConvention;
use tenor_core::types::{Date, Frequency};

/// Interest accrued from the last coupon date to settlement.
///
/// The day count between the two dates is taken under `convention`, and the
/// per-period coupon is scaled by the accrued fraction of a coupon period:
///
/// ```text
/// accrued = period coupon x days / (basis / periods per year)
/// ```
///
/// Computed entirely in `Decimal` and rounded to 4 decimal places,
/// half-away-from-zero. Zero-coupon securities accrue nothing.
///
/// A settlement before `last_coupon` is a caller precondition, not enforced;
/// the result is simply negative.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::accrued::accrued_interest;
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::{Date, Frequency};
/// use rust_decimal_macros::dec;
///
/// let accrued = accrued_interest(
///     dec!(1000),
///     dec!(5),
///     Frequency::SemiAnnual,
///     Date::from_ymd(2025, 1, 15).unwrap(),
///     Date::from_ymd(2025, 7, 15).unwrap(),
///     DayCountConvention::Thirty360,
/// );
/// assert_eq!(accrued, dec!(25.0000));
/// ```
#[must_use]
pub fn accrued_interest(
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: Frequency,
    last_coupon: Date,
    settlement: Date,
    convention: DayCountConvention,
) -> Decimal {
    let periods = frequency.periods_per_year();
    if periods == 0 {
        return Decimal::ZERO;
    }

    let fraction = convention.day_count(last_coupon, settlement);
    let period_coupon = face_value * coupon_rate / dec!(100) / Decimal::from(periods);
    let period_basis = Decimal::from(fraction.denominator) / Decimal::from(periods);

    (period_coupon * Decimal::from(fraction.numerator) / period_basis)
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_act365_sixty_days() {
        // 25 per period x 60/182.5 of a semi-annual period
        let accrued = accrued_interest(
            dec!(1000),
            dec!(5),
            Frequency::SemiAnnual,
            d(2025, 1, 1),
            d(2025, 3, 2),
            DayCountConvention::Act365,
        );
        assert_eq!(accrued, dec!(8.2192));
    }

    #[test]
    fn test_thirty360_full_half_year() {
        // Jan 15 -> Jul 15 is exactly 180/360, one full semi-annual coupon
        let accrued = accrued_interest(
            dec!(1000),
            dec!(5),
            Frequency::SemiAnnual,
            d(2025, 1, 15),
            d(2025, 7, 15),
            DayCountConvention::Thirty360,
        );
        assert_eq!(accrued, dec!(25.0000));
    }

    #[test]
    fn test_act360_quarterly() {
        // 10 per quarter x 30 days / 90-day period basis
        let accrued = accrued_interest(
            dec!(1000),
            dec!(4),
            Frequency::Quarterly,
            d(2025, 6, 1),
            d(2025, 7, 1),
            DayCountConvention::Act360,
        );
        assert_eq!(accrued, dec!(3.3333));
    }

    #[test]
    fn test_zero_coupon_accrues_nothing() {
        let accrued = accrued_interest(
            dec!(1000),
            dec!(0),
            Frequency::Zero,
            d(2025, 1, 1),
            d(2025, 6, 1),
            DayCountConvention::Act365,
        );
        assert_eq!(accrued, Decimal::ZERO);
    }

    #[test]
    fn test_same_day_settlement() {
        let accrued = accrued_interest(
            dec!(1000),
            dec!(5),
            Frequency::SemiAnnual,
            d(2025, 1, 1),
            d(2025, 1, 1),
            DayCountConvention::Act365,
        );
        assert_eq!(accrued, dec!(0.0000));
    }

    #[test]
    fn test_settlement_before_last_coupon_goes_negative() {
        let accrued = accrued_interest(
            dec!(1000),
            dec!(5),
            Frequency::SemiAnnual,
            d(2025, 3, 1),
            d(2025, 1, 1),
            DayCountConvention::Act365,
        );
        assert!(accrued < Decimal::ZERO);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 50 x 73/365 = 10 exactly under ACT/365; pick a case with a tail:
        // 1000 x 3% / 2 = 15 per period, 1 day of a 182.5-day period
        // = 15 x 1 / 182.5 = 0.08219178... -> 0.0822
        let accrued = accrued_interest(
            dec!(1000),
            dec!(3),
            Frequency::SemiAnnual,
            d(2025, 1, 1),
            d(2025, 1, 2),
            DayCountConvention::Act365,
        );
        assert_eq!(accrued, dec!(0.0822));
    }
}
