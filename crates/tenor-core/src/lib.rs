//! # Tenor Core
//!
//! Core types and day count conventions for the Tenor fixed income
//! analytics engine.
//!
//! This crate provides the foundational building blocks used throughout
//! Tenor:
//!
//! - **Types**: Domain-specific value types like [`types::Date`],
//!   [`types::Frequency`], [`types::SecurityTerms`], and
//!   [`types::CashFlowPoint`]
//! - **Day Count Conventions**: `(numerator, denominator)` day counting
//!   under ACT/360, ACT/365, simplified ACT/ACT, and 30/360
//! - **Errors**: the [`TenorError`] taxonomy for caller programming errors
//!
//! ## Design Philosophy
//!
//! - **Pure values**: every type is an immutable value object; nothing here
//!   performs I/O or holds shared state
//! - **Closed enums**: frequency and day-count dispatch are exhaustive
//!   matches, checked at compile time
//! - **Explicit over implicit**: invalid terms fail construction rather
//!   than poisoning later arithmetic
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::daycounts::DayCountConvention;
//! use tenor_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//! let frac = DayCountConvention::Act365.day_count(start, end);
//! assert_eq!(frac.numerator, 182);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCountConvention, DayCountFraction};
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::types::{CashFlowPoint, Date, Frequency, SecurityTerms};
}

pub use error::{TenorError, TenorResult};
