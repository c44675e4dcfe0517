//! Fixed-rate coupon.

use serde::Serialize;

use meridian_core::Currency;

use super::cash_flow::{check_payment_time, FixedCashFlow};
use crate::error::PricingResult;

/// A coupon paying `notional * fixed_rate * payment_year_fraction`.
///
/// The accrual factor is supplied already computed; no day count is applied
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CouponFixed {
    currency: Currency,
    payment_time: f64,
    payment_year_fraction: f64,
    notional: f64,
    fixed_rate: f64,
}

impl CouponFixed {
    /// Creates a fixed coupon.
    ///
    /// # Errors
    ///
    /// Returns an error if `payment_time` is negative or not finite.
    pub fn new(
        currency: Currency,
        payment_time: f64,
        payment_year_fraction: f64,
        notional: f64,
        fixed_rate: f64,
    ) -> PricingResult<Self> {
        check_payment_time(payment_time)?;
        Ok(Self {
            currency,
            payment_time,
            payment_year_fraction,
            notional,
            fixed_rate,
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

    /// Returns the accrual factor of the coupon period.
    pub fn payment_year_fraction(&self) -> f64 {
        self.payment_year_fraction
    }

    /// Returns the notional.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the fixed rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Returns the paid amount.
    pub fn amount(&self) -> f64 {
        self.notional * self.fixed_rate * self.payment_year_fraction
    }

    /// Returns a copy with a different notional.
    #[must_use]
    pub fn with_notional(&self, notional: f64) -> Self {
        Self { notional, ..*self }
    }

    /// Returns the coupon as a plain cash flow.
    pub fn to_cash_flow(&self) -> FixedCashFlow {
        FixedCashFlow {
            currency: self.currency,
            payment_time: self.payment_time,
            amount: self.amount(),
        }
    }
}
