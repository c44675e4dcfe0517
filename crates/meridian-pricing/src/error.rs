//! Error types for the pricing layer.

use meridian_curves::CurveError;
use thiserror::Error;

/// Result type for pricing operations.
pub type PricingResult<T> = Result<T, PricingError>;

/// Errors that can occur when building or valuing instruments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The provider could not supply a curve quantity.
    #[error("curve error: {0}")]
    Curve(#[from] CurveError),

    /// A cash flow was defined with invalid terms.
    #[error("invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the problem.
        reason: String,
    },

    /// An instrument was assembled from incompatible parts.
    #[error("invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of the problem.
        reason: String,
    },
}

impl PricingError {
    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Returns true if the provider had no discounting curve for the currency.
    #[must_use]
    pub fn is_currency_not_found(&self) -> bool {
        matches!(self, Self::Curve(err) if err.is_currency_not_found())
    }
}
