//! Fixed cash flow.

use serde::Serialize;

use meridian_core::Currency;

use crate::error::{PricingError, PricingResult};

/// A known amount paid in one currency at one time.
///
/// `payment_time` is in years from the valuation reference and is never
/// negative. The amount is signed and taken as given.
///
/// # Example
///
/// ```rust
/// use meridian_core::Currency;
/// use meridian_pricing::FixedCashFlow;
///
/// let cf = FixedCashFlow::new(Currency::EUR, 0.5, 1_000_000.0).unwrap();
/// assert_eq!(cf.amount(), 1_000_000.0);
/// assert!(FixedCashFlow::new(Currency::EUR, -0.1, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedCashFlow {
    pub(super) currency: Currency,
    pub(super) payment_time: f64,
    pub(super) amount: f64,
}

impl FixedCashFlow {
    /// Creates a cash flow.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidCashFlow`] if `payment_time` is negative
    /// or not finite.
    pub fn new(currency: Currency, payment_time: f64, amount: f64) -> PricingResult<Self> {
        check_payment_time(payment_time)?;
        Ok(Self {
            currency,
            payment_time,
            amount,
        })
    }

    /// Returns the payment currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the payment time in years.
    pub fn payment_time(&self) -> f64 {
        self.payment_time
    }

    /// Returns the paid amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns a copy paying `amount` instead.
    #[must_use]
    pub fn with_amount(&self, amount: f64) -> Self {
        Self { amount, ..*self }
    }
}

pub(crate) fn check_payment_time(payment_time: f64) -> PricingResult<()> {
    if payment_time.is_finite() && payment_time >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_cash_flow(format!(
            "payment time {payment_time} must be finite and non-negative"
        )))
    }
}
