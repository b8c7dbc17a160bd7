//! Core value types for the Tenor engine.
//!
//! All entities here are immutable value objects with no identity beyond
//! their field values; they are constructed from caller-supplied data and
//! discarded after the call returns.

mod cashflow;
mod date;
mod frequency;
mod security;

pub use cashflow::CashFlowPoint;
pub use date::Date;
pub use frequency::Frequency;
pub use security::SecurityTerms;
