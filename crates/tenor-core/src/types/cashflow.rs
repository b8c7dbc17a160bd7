//! Cash flow point type for coupon schedules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A single projected cash flow in a coupon schedule.
///
/// Carries the payment date, the payment amount, and the number of actual
/// calendar days accrued since the previous cash flow (since the issue date
/// for the first coupon). Schedules are ordered ascending by date with
/// unique dates.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::{CashFlowPoint, Date};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlowPoint::new(Date::from_ymd(2025, 6, 15).unwrap(), dec!(25), 181);
/// assert_eq!(cf.amount(), dec!(25));
/// assert_eq!(cf.accrued_days(), 181);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPoint {
    /// Payment date
    date: Date,
    /// Payment amount
    amount: Decimal,
    /// Actual calendar days since the previous cash flow
    accrued_days: i64,
}

impl CashFlowPoint {
    /// Creates a new cash flow point.
    #[must_use]
    pub fn new(date: Date, amount: Decimal, accrued_days: i64) -> Self {
        Self {
            date,
            amount,
            accrued_days,
        }
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the payment amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the calendar days accrued since the previous cash flow.
    #[must_use]
    pub fn accrued_days(&self) -> i64 {
        self.accrued_days
    }
}

impl fmt::Display for CashFlowPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} days accrued)",
            self.date, self.amount, self.accrued_days
        )
    }
}
