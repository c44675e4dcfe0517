//! Error types for curve operations.
//!
//! Covers curve construction from nodes, discount factor queries, and
//! look-ups of the per-currency discounting curves of a provider.

use meridian_core::Currency;
use meridian_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The provider has no discounting curve for the currency.
    #[error("Currency discounting curve not found: {currency}")]
    CurrencyNotFound {
        /// The currency that was requested.
        currency: Currency,
    },

    /// A provider was given two discounting curves for one currency.
    #[error("Duplicate discounting curve for currency {currency}")]
    DuplicateCurrency {
        /// The repeated currency.
        currency: Currency,
    },

    /// Not enough nodes to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Node times are not strictly increasing.
    #[error("Non-monotonic node times at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicTimes {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous node time.
        prev: f64,
        /// Current node time.
        current: f64,
    },

    /// A node definition is invalid.
    #[error("Invalid curve nodes: {reason}")]
    InvalidNodes {
        /// Description of the problem.
        reason: String,
    },

    /// A query time is negative or not finite.
    #[error("Invalid time {time}: must be finite and non-negative")]
    InvalidTime {
        /// The rejected time in years.
        time: f64,
    },

    /// Interpolation failed.
    #[error("Interpolation error: {0}")]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a currency-not-found error.
    #[must_use]
    pub fn currency_not_found(currency: Currency) -> Self {
        Self::CurrencyNotFound { currency }
    }

    /// Creates a duplicate currency error.
    #[must_use]
    pub fn duplicate_currency(currency: Currency) -> Self {
        Self::DuplicateCurrency { currency }
    }

    /// Creates an invalid nodes error.
    #[must_use]
    pub fn invalid_nodes(reason: impl Into<String>) -> Self {
        Self::InvalidNodes {
            reason: reason.into(),
        }
    }

    /// Creates an invalid time error.
    #[must_use]
    pub fn invalid_time(time: f64) -> Self {
        Self::InvalidTime { time }
    }

    /// Returns true if this error reports a missing discounting curve.
    #[must_use]
    pub fn is_currency_not_found(&self) -> bool {
        matches!(self, Self::CurrencyNotFound { .. })
    }
}
