//! Immutable bond terms.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::daycounts::DayCountConvention;
use crate::error::{TenorError, TenorResult};

use super::{Date, Frequency};

/// Static terms of a fixed-income security.
///
/// A validated, immutable value object: face value is strictly positive, the
/// coupon rate percentage lies in [0, 100], and maturity is strictly after
/// issue. The engine never mutates a constructed instance.
///
/// # Example
///
/// ```rust
/// use tenor_core::daycounts::DayCountConvention;
/// use tenor_core::types::{Date, Frequency, SecurityTerms};
/// use rust_decimal_macros::dec;
///
/// let terms = SecurityTerms::new(
///     dec!(1000),
///     dec!(5),
///     Frequency::SemiAnnual,
///     Date::from_ymd(2020, 1, 1).unwrap(),
///     Date::from_ymd(2030, 1, 1).unwrap(),
///     DayCountConvention::Act365,
/// ).unwrap();
/// assert_eq!(terms.annual_coupon(), dec!(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityTerms {
    face_value: Decimal,
    coupon_rate: Decimal,
    frequency: Frequency,
    issue_date: Date,
    maturity_date: Date,
    day_count: DayCountConvention,
}

impl SecurityTerms {
    /// Creates validated security terms.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::InvalidTerms` when the face value is not
    /// positive, the coupon rate percentage is outside [0, 100], or the
    /// maturity date is not after the issue date.
    pub fn new(
        face_value: Decimal,
        coupon_rate: Decimal,
        frequency: Frequency,
        issue_date: Date,
        maturity_date: Date,
        day_count: DayCountConvention,
    ) -> TenorResult<Self> {
        if face_value <= Decimal::ZERO {
            return Err(TenorError::invalid_terms(
                "face_value",
                "must be positive",
            ));
        }
        if coupon_rate < Decimal::ZERO || coupon_rate > dec!(100) {
            return Err(TenorError::invalid_terms(
                "coupon_rate",
                "must be between 0 and 100 percent",
            ));
        }
        if maturity_date <= issue_date {
            return Err(TenorError::invalid_terms(
                "maturity_date",
                "must be after issue date",
            ));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            frequency,
            issue_date,
            maturity_date,
            day_count,
        })
    }

    /// Returns the face (par) value.
    #[must_use]
    pub fn face_value(&self) -> Decimal {
        self.face_value
    }

    /// Returns the annual coupon rate as a percentage (e.g. 5 for 5%).
    #[must_use]
    pub fn coupon_rate(&self) -> Decimal {
        self.coupon_rate
    }

    /// Returns the coupon payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the total coupon paid per year.
    #[must_use]
    pub fn annual_coupon(&self) -> Decimal {
        self.face_value * self.coupon_rate / dec!(100)
    }

    /// Returns the coupon paid each period, or zero for zero-coupon bonds.
    #[must_use]
    pub fn period_coupon(&self) -> Decimal {
        let periods = self.frequency.periods_per_year();
        if periods == 0 {
            Decimal::ZERO
        } else {
            self.annual_coupon() / Decimal::from(periods)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(
        face_value: Decimal,
        coupon_rate: Decimal,
        frequency: Frequency,
    ) -> TenorResult<SecurityTerms> {
        SecurityTerms::new(
            face_value,
            coupon_rate,
            frequency,
            Date::from_ymd(2020, 1, 1).unwrap(),
            Date::from_ymd(2030, 1, 1).unwrap(),
            DayCountConvention::Act365,
        )
    }

    #[test]
    fn test_valid_terms() {
        let t = terms(dec!(1000), dec!(5), Frequency::SemiAnnual).unwrap();
        assert_eq!(t.annual_coupon(), dec!(50));
        assert_eq!(t.period_coupon(), dec!(25));
    }

    #[test]
    fn test_zero_coupon_period_coupon() {
        let t = terms(dec!(1000), dec!(0), Frequency::Zero).unwrap();
        assert_eq!(t.period_coupon(), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_face_value_rejected() {
        assert!(terms(Decimal::ZERO, dec!(5), Frequency::Annual).is_err());
        assert!(terms(dec!(-100), dec!(5), Frequency::Annual).is_err());
    }

    #[test]
    fn test_coupon_rate_out_of_range_rejected() {
        assert!(terms(dec!(1000), dec!(-1), Frequency::Annual).is_err());
        assert!(terms(dec!(1000), dec!(100.01), Frequency::Annual).is_err());
        // Bounds are inclusive
        assert!(terms(dec!(1000), dec!(0), Frequency::Annual).is_ok());
        assert!(terms(dec!(1000), dec!(100), Frequency::Annual).is_ok());
    }

    #[test]
    fn test_maturity_not_after_issue_rejected() {
        let issue = Date::from_ymd(2025, 1, 1).unwrap();
        let result = SecurityTerms::new(
            dec!(1000),
            dec!(5),
            Frequency::Annual,
            issue,
            issue,
            DayCountConvention::Act365,
        );
        assert!(matches!(
            result,
            Err(TenorError::InvalidTerms { .. })
        ));
    }
}
