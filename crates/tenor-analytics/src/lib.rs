//! # Tenor Analytics
//!
//! Pure fixed-income analytics for the Tenor engine: coupon schedules,
//! accrued interest, yield measures, and rate-risk metrics.
//!
//! Every function here is referentially transparent: identical inputs return
//! identical outputs, and nothing performs I/O or holds state. Expected
//! numerical no-result cases (solver non-convergence, degenerate inputs,
//! vanishing derivatives) come back as `None`, never as errors; the cause is
//! traced through [`log`] at debug level for callers that install a logger.
//!
//! ## Modules
//!
//! - [`schedule`] — coupon date and cash flow schedule generation
//! - [`accrued`] — accrued interest under a day-count convention
//! - [`yields`] — current yield and Newton-Raphson yield to maturity
//! - [`risk`] — Macaulay/modified duration and convexity
//!
//! ## Example
//!
//! ```rust
//! use tenor_analytics::yields::{yield_to_maturity, SolverConfig};
//! use tenor_core::types::Frequency;
//! use rust_decimal_macros::dec;
//!
//! let ytm = yield_to_maturity(
//!     dec!(1000),
//!     dec!(5),
//!     Frequency::SemiAnnual,
//!     dec!(10),
//!     dec!(1000),
//!     &SolverConfig::default(),
//! );
//! assert_eq!(ytm, Some(dec!(5.0000)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accrued;
pub mod risk;
pub mod schedule;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrued::accrued_interest;
    pub use crate::risk::{convexity, duration, Duration};
    pub use crate::schedule::{coupon_dates, coupon_schedule};
    pub use crate::yields::{current_yield, yield_to_maturity, SolverConfig};
}
