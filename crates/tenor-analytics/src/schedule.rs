//! Coupon payment schedule generation.
//!
//! Coupon dates are generated by walking backward from maturity in steps of
//! `12 / payments-per-year` months, anchoring the periodic grid on the
//! maturity date. The day-of-month is preserved; when the stepped-to month
//! is too short (e.g. the 31st in February), the day clamps to 28. This is a
//! deliberate end-of-month simplification, not last-business-day logic.

use rust_decimal::Decimal;

use tenor_core::types::{CashFlowPoint, Date, Frequency, SecurityTerms};

/// Generates the ordered coupon payment dates for a security.
///
/// Zero-coupon instruments get exactly one date, the maturity date.
/// Otherwise dates are walked backward from maturity until the generated
/// date is on or before the issue date; the result is returned ascending
/// with unique dates. Dates strictly before `start_from` are walked past
/// (so the grid stays anchored on maturity) but not emitted.
///
/// A degenerate coupon-bearing input (maturity on or before issue) yields
/// an empty sequence.
///
/// # Example
///
/// ```rust
/// use tenor_analytics::schedule::coupon_dates;
/// use tenor_core::types::{Date, Frequency};
///
/// let issue = Date::from_ymd(2020, 1, 1).unwrap();
/// let maturity = Date::from_ymd(2025, 1, 1).unwrap();
/// let dates = coupon_dates(issue, maturity, Frequency::Annual, None);
/// assert_eq!(dates.len(), 5);
/// ```
#[must_use]
pub fn coupon_dates(
    issue_date: Date,
    maturity_date: Date,
    frequency: Frequency,
    start_from: Option<Date>,
) -> Vec<Date> {
    if frequency.is_zero() {
        return vec![maturity_date];
    }

    let months_per_period = frequency.months_per_period() as i32;
    let mut dates = Vec::new();

    let mut current = maturity_date;
    while current > issue_date {
        if start_from.map_or(true, |from| current >= from) {
            dates.push(current);
        }
        current = step_back_months(current, months_per_period);
    }

    dates.reverse();
    dates
}

/// Builds the full cash flow schedule for a security.
///
/// Each point carries the per-period coupon amount and the actual calendar
/// days elapsed since the previous coupon (since issue for the first).
/// Zero-coupon securities get a single terminal point paying the face value
/// with zero accrued days. `start_from` truncates like [`coupon_dates`].
#[must_use]
pub fn coupon_schedule(terms: &SecurityTerms, start_from: Option<Date>) -> Vec<CashFlowPoint> {
    if terms.frequency().is_zero() {
        return vec![CashFlowPoint::new(
            terms.maturity_date(),
            terms.face_value(),
            0,
        )];
    }

    let amount: Decimal = terms.period_coupon();
    let dates = coupon_dates(
        terms.issue_date(),
        terms.maturity_date(),
        terms.frequency(),
        start_from,
    );

    let mut schedule = Vec::with_capacity(dates.len());
    let mut prev = terms.issue_date();
    for date in dates {
        schedule.push(CashFlowPoint::new(date, amount, prev.days_between(&date)));
        prev = date;
    }
    schedule
}

/// Steps a date back by a number of months, preserving the day-of-month.
///
/// Invalid results (e.g. February 30th) clamp the day to 28, even in leap
/// years.
fn step_back_months(date: Date, months: i32) -> Date {
    let mut year = date.year();
    let mut month = date.month() as i32 - months;

    while month < 1 {
        month += 12;
        year -= 1;
    }

    let month = month as u32;
    Date::from_ymd(year, month, date.day())
        .or_else(|_| Date::from_ymd(year, month, 28))
        .expect("day 28 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tenor_core::daycounts::DayCountConvention;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_annual_schedule() {
        let dates = coupon_dates(d(2020, 1, 1), d(2025, 1, 1), Frequency::Annual, None);

        assert_eq!(
            dates,
            vec![
                d(2021, 1, 1),
                d(2022, 1, 1),
                d(2023, 1, 1),
                d(2024, 1, 1),
                d(2025, 1, 1),
            ]
        );
    }

    #[test]
    fn test_semi_annual_schedule() {
        let dates = coupon_dates(d(2023, 6, 15), d(2025, 6, 15), Frequency::SemiAnnual, None);

        assert_eq!(
            dates,
            vec![
                d(2023, 12, 15),
                d(2024, 6, 15),
                d(2024, 12, 15),
                d(2025, 6, 15),
            ]
        );
    }

    #[test]
    fn test_ascending_and_unique() {
        let dates = coupon_dates(d(2020, 3, 10), d(2030, 3, 10), Frequency::Quarterly, None);

        assert_eq!(dates.len(), 40);
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_zero_coupon_single_date() {
        let dates = coupon_dates(d(2020, 1, 1), d(2030, 1, 1), Frequency::Zero, None);
        assert_eq!(dates, vec![d(2030, 1, 1)]);
    }

    #[test]
    fn test_issue_date_excluded() {
        // The walk stops once the generated date is on or before issue;
        // the issue date itself is never a coupon date.
        let dates = coupon_dates(d(2020, 1, 1), d(2021, 1, 1), Frequency::SemiAnnual, None);
        assert_eq!(dates, vec![d(2020, 7, 1), d(2021, 1, 1)]);
    }

    #[test]
    fn test_month_end_clamps_to_28() {
        // Stepping back from Aug 31 by quarters hits Feb 31, which clamps
        // to Feb 28 - even though 2024 is a leap year.
        let dates = coupon_dates(d(2023, 11, 30), d(2024, 8, 31), Frequency::Quarterly, None);
        assert_eq!(dates, vec![d(2024, 2, 28), d(2024, 5, 31), d(2024, 8, 31)]);
    }

    #[test]
    fn test_year_boundary_wrap() {
        let dates = coupon_dates(d(2024, 10, 15), d(2025, 4, 15), Frequency::Quarterly, None);
        assert_eq!(dates, vec![d(2025, 1, 15), d(2025, 4, 15)]);
    }

    #[test]
    fn test_start_from_truncates_but_keeps_grid() {
        let all = coupon_dates(d(2020, 1, 1), d(2025, 1, 1), Frequency::Annual, None);
        let truncated = coupon_dates(
            d(2020, 1, 1),
            d(2025, 1, 1),
            Frequency::Annual,
            Some(d(2022, 6, 1)),
        );

        assert_eq!(truncated, vec![d(2023, 1, 1), d(2024, 1, 1), d(2025, 1, 1)]);
        // Truncation drops leading dates without shifting the grid
        assert_eq!(&all[2..], &truncated[..]);
    }

    #[test]
    fn test_start_from_on_coupon_date_is_inclusive() {
        let dates = coupon_dates(
            d(2020, 1, 1),
            d(2025, 1, 1),
            Frequency::Annual,
            Some(d(2023, 1, 1)),
        );
        assert_eq!(dates[0], d(2023, 1, 1));
    }

    #[test]
    fn test_degenerate_maturity_before_issue() {
        let dates = coupon_dates(d(2025, 1, 1), d(2020, 1, 1), Frequency::Annual, None);
        assert!(dates.is_empty());

        let same = coupon_dates(d(2025, 1, 1), d(2025, 1, 1), Frequency::Annual, None);
        assert!(same.is_empty());
    }

    #[test]
    fn test_coupon_schedule_amounts_and_accrued_days() {
        let terms = SecurityTerms::new(
            dec!(1000),
            dec!(5),
            Frequency::SemiAnnual,
            d(2024, 1, 1),
            d(2025, 1, 1),
            DayCountConvention::Act365,
        )
        .unwrap();

        let schedule = coupon_schedule(&terms, None);
        assert_eq!(schedule.len(), 2);

        // 2024-01-01 -> 2024-07-01: 182 days (leap year), then 184 to year end
        assert_eq!(schedule[0].date(), d(2024, 7, 1));
        assert_eq!(schedule[0].amount(), dec!(25));
        assert_eq!(schedule[0].accrued_days(), 182);

        assert_eq!(schedule[1].date(), d(2025, 1, 1));
        assert_eq!(schedule[1].amount(), dec!(25));
        assert_eq!(schedule[1].accrued_days(), 184);
    }

    #[test]
    fn test_coupon_schedule_zero_coupon() {
        let terms = SecurityTerms::new(
            dec!(1000),
            dec!(0),
            Frequency::Zero,
            d(2020, 1, 1),
            d(2030, 1, 1),
            DayCountConvention::Act365,
        )
        .unwrap();

        let schedule = coupon_schedule(&terms, None);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].date(), d(2030, 1, 1));
        assert_eq!(schedule[0].amount(), dec!(1000));
        assert_eq!(schedule[0].accrued_days(), 0);
    }

    #[test]
    fn test_coupon_schedule_start_from_accrues_from_previous_emitted() {
        // Truncated schedules accrue the first emitted coupon from issue,
        // matching the untruncated schedule's later entries by date only.
        let terms = SecurityTerms::new(
            dec!(1000),
            dec!(4),
            Frequency::Annual,
            d(2020, 1, 1),
            d(2024, 1, 1),
            DayCountConvention::Act365,
        )
        .unwrap();

        let schedule = coupon_schedule(&terms, Some(d(2023, 1, 1)));
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].date(), d(2023, 1, 1));
        // First emitted point accrues from the issue date
        assert_eq!(schedule[0].accrued_days(), 1096);
    }
}
