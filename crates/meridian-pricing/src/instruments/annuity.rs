//! Leg of fixed coupons.

use serde::Serialize;

use meridian_core::Currency;

use super::coupon_fixed::CouponFixed;
use crate::error::{PricingError, PricingResult};

/// An ordered sequence of fixed coupons paid in one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnuityCouponFixed {
    currency: Currency,
    coupons: Vec<CouponFixed>,
}

impl AnnuityCouponFixed {
    /// Creates an annuity from its coupons, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInstrument`] if `coupons` is empty or
    /// mixes currencies.
    pub fn new(coupons: Vec<CouponFixed>) -> PricingResult<Self> {
        let Some(first) = coupons.first() else {
            return Err(PricingError::invalid_instrument(
                "annuity must contain at least one coupon",
            ));
        };
        let currency = first.currency();
        if let Some(other) = coupons.iter().find(|c| c.currency() != currency) {
            return Err(PricingError::invalid_instrument(format!(
                "annuity mixes currencies {currency} and {}",
                other.currency()
            )));
        }
        Ok(Self { currency, coupons })
    }

    /// Returns the currency of every coupon.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the coupons.
    pub fn coupons(&self) -> &[CouponFixed] {
        &self.coupons
    }

    /// Returns the number of coupons.
    pub fn number_of_payments(&self) -> usize {
        self.coupons.len()
    }

    /// Returns a copy with every coupon's notional replaced by its absolute value.
    #[must_use]
    pub fn with_positive_notional(&self) -> Self {
        Self {
            currency: self.currency,
            coupons: self
                .coupons
                .iter()
                .map(|c| c.with_notional(c.notional().abs()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(currency: Currency, t: f64) -> CouponFixed {
        CouponFixed::new(currency, t, 0.5, -1_000_000.0, 0.03).unwrap()
    }

    #[test]
    fn test_new() {
        let annuity =
            AnnuityCouponFixed::new(vec![coupon(Currency::EUR, 0.5), coupon(Currency::EUR, 1.0)])
                .unwrap();
        assert_eq!(annuity.currency(), Currency::EUR);
        assert_eq!(annuity.number_of_payments(), 2);
        assert_eq!(annuity.coupons()[1].payment_time(), 1.0);
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            AnnuityCouponFixed::new(vec![]),
            Err(PricingError::InvalidInstrument { .. })
        ));
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let result =
            AnnuityCouponFixed::new(vec![coupon(Currency::EUR, 0.5), coupon(Currency::USD, 1.0)]);
        assert!(matches!(result, Err(PricingError::InvalidInstrument { .. })));
    }

    #[test]
    fn test_with_positive_notional() {
        let annuity = AnnuityCouponFixed::new(vec![coupon(Currency::EUR, 0.5)]).unwrap();
        let positive = annuity.with_positive_notional();
        assert_eq!(positive.coupons()[0].notional(), 1_000_000.0);
        assert_eq!(annuity.coupons()[0].notional(), -1_000_000.0);
    }
}
