//! Error types shared across the Meridian crates.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type MeridianResult<T> = Result<T, MeridianError>;

/// Errors raised by the core types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeridianError {
    /// A currency code could not be recognised.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The code that failed to parse.
        code: String,
    },
}

impl MeridianError {
    /// Creates an unknown currency error.
    #[must_use]
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeridianError::unknown_currency("XYZ");
        assert_eq!(err.to_string(), "Unknown currency code: XYZ");
    }
}
