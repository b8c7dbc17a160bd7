//! Day count conventions for fixed income calculations.
//!
//! Day count conventions determine how accrued interest is calculated
//! by specifying how to count days between two dates and the year basis.
//!
//! # Supported Conventions
//!
//! - [`DayCountConvention::Act360`]: Actual/360 - money market convention
//! - [`DayCountConvention::Act365`]: Actual/365 Fixed - UK Gilts, AUD/NZD
//! - [`DayCountConvention::ActAct`]: Actual/Actual, simplified to a fixed
//!   365-day basis. This is a documented approximation; full ISDA
//!   Actual/Actual year-splitting is out of scope.
//! - [`DayCountConvention::Thirty360`]: 30/360 US (NASD-style) - US corporate
//!   bonds
//!
//! Each convention reduces a date interval to a `(numerator days,
//! denominator days)` pair; dispatch is an exhaustive match over the closed
//! enum, so an unrecognized convention is unrepresentable past the parse
//! boundary.
//!
//! # Usage
//!
//! ```rust
//! use tenor_core::daycounts::DayCountConvention;
//! use tenor_core::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//!
//! let frac = DayCountConvention::Act360.day_count(start, end);
//! assert_eq!(frac.numerator, 181);
//! assert_eq!(frac.denominator, 360);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TenorError;
use crate::types::Date;

/// The result of a day count calculation: numerator and denominator days.
///
/// The numerator can be negative when `end` precedes `start`; the
/// denominator is fixed by the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayCountFraction {
    /// Days counted between the two dates according to the convention.
    pub numerator: i64,
    /// Assumed days per year for the convention.
    pub denominator: u32,
}

/// Enumeration of supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DayCountConvention {
    /// Actual/360 - money market instruments, FRNs
    Act360,

    /// Actual/365 Fixed - UK Gilts, AUD/NZD markets
    #[default]
    Act365,

    /// Actual/Actual, simplified to a 365-day basis (not full ISDA)
    ActAct,

    /// 30/360 US (NASD-style) - US corporate, agency, municipal bonds
    Thirty360,
}

impl DayCountConvention {
    /// Calculates the day count between two dates.
    ///
    /// For the ACT family the numerator is actual calendar days; for 30/360
    /// it uses the 30-day month assumption with the NASD clamp rules:
    ///
    /// 1. D1 is clamped to at most 30.
    /// 2. If D1 was clamped to 30, D2 is clamped to at most 30 as well;
    ///    otherwise D2 is kept as-is.
    ///
    /// Negative intervals are permitted and yield a negative numerator.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> DayCountFraction {
        match self {
            DayCountConvention::Act360 => DayCountFraction {
                numerator: start.days_between(&end),
                denominator: 360,
            },
            DayCountConvention::Act365 | DayCountConvention::ActAct => DayCountFraction {
                numerator: start.days_between(&end),
                denominator: 365,
            },
            DayCountConvention::Thirty360 => DayCountFraction {
                numerator: thirty360_days(start, end),
                denominator: 360,
            },
        }
    }

    /// Returns the year basis (denominator) for the convention.
    #[must_use]
    pub const fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Act360 | DayCountConvention::Thirty360 => 360,
            DayCountConvention::Act365 | DayCountConvention::ActAct => 365,
        }
    }

    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365 => "ACT/365",
            DayCountConvention::ActAct => "ACT/ACT",
            DayCountConvention::Thirty360 => "30/360",
        }
    }

    /// Returns all supported day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Act360,
            DayCountConvention::Act365,
            DayCountConvention::ActAct,
            DayCountConvention::Thirty360,
        ]
    }
}

/// 30/360 US day count with the NASD clamp rules.
fn thirty360_days(start: Date, end: Date) -> i64 {
    let y1 = i64::from(start.year());
    let y2 = i64::from(end.year());
    let m1 = i64::from(start.month());
    let m2 = i64::from(end.month());
    let d1 = i64::from(start.day()).min(30);
    let d2 = if d1 == 30 {
        i64::from(end.day()).min(30)
    } else {
        i64::from(end.day())
    };

    360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = TenorError;

    /// Parses a day count convention from a string.
    ///
    /// Supports market-style names ("ACT/360", "30/360"), enum-style names
    /// ("Act360", "Thirty360"), and underscore aliases ("ACT_360",
    /// "THIRTY_360").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "ACT/360" | "ACTUAL/360" | "ACT360" | "ACT_360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACTUAL/365" | "ACT365" | "ACT_365" => Ok(DayCountConvention::Act365),
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" | "ACT_ACT" => Ok(DayCountConvention::ActAct),
            "30/360" | "THIRTY360" | "THIRTY_360" | "BOND" => Ok(DayCountConvention::Thirty360),
            _ => Err(TenorError::invalid_convention(s)),
        }
    }
}
