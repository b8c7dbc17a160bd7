//! Error types for the Tenor engine.
//!
//! Hard errors are reserved for caller programming mistakes: invalid dates,
//! unrecognized day count conventions, and ill-formed security terms.
//! Expected numerical edge cases (non-convergence, degenerate inputs) are
//! signalled as absent results by the analytics layer, never through this
//! type.

use thiserror::Error;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unrecognized day count convention.
    #[error("Invalid day count convention: '{name}'")]
    InvalidConvention {
        /// The unrecognized convention name.
        name: String,
    },

    /// Ill-formed security terms.
    #[error("Invalid security terms: {field} - {reason}")]
    InvalidTerms {
        /// The offending field.
        field: String,
        /// Reason for invalidity.
        reason: String,
    },
}

impl TenorError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid convention error.
    #[must_use]
    pub fn invalid_convention(name: impl Into<String>) -> Self {
        Self::InvalidConvention { name: name.into() }
    }

    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
