//! Discounting method for fixed coupons.

use meridian_core::MultipleCurrencyAmount;
use meridian_curves::{MulticurveProvider, MultipleCurrencyMulticurveSensitivity};

use super::PaymentFixedDiscountingMethod;
use crate::error::PricingResult;
use crate::instruments::CouponFixed;

/// Values a [`CouponFixed`] as the fixed payment of its amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct CouponFixedDiscountingMethod {
    payment: PaymentFixedDiscountingMethod,
}

impl CouponFixedDiscountingMethod {
    /// Creates the method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the present value of the coupon.
    pub fn present_value<P>(
        &self,
        coupon: &CouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        self.payment.present_value(&coupon.to_cash_flow(), provider)
    }

    /// Returns the curve sensitivity of the coupon present value.
    pub fn present_value_curve_sensitivity<P>(
        &self,
        coupon: &CouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyMulticurveSensitivity>
    where
        P: MulticurveProvider + ?Sized,
    {
        self.payment
            .present_value_curve_sensitivity(&coupon.to_cash_flow(), provider)
    }

    /// Returns the present value computed with the absolute notional.
    pub fn present_value_positive_notional<P>(
        &self,
        coupon: &CouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        self.present_value(&coupon.with_notional(coupon.notional().abs()), provider)
    }

    /// Returns the curve sensitivity computed with the absolute notional.
    pub fn present_value_curve_sensitivity_positive_notional<P>(
        &self,
        coupon: &CouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyMulticurveSensitivity>
    where
        P: MulticurveProvider + ?Sized,
    {
        self.present_value_curve_sensitivity(
            &coupon.with_notional(coupon.notional().abs()),
            provider,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meridian_core::Currency;
    use meridian_curves::prelude::*;

    fn provider() -> MulticurveProviderDiscount {
        MulticurveProviderDiscount::builder()
            .discount_curve(
                Currency::GBP,
                YieldCurve::new(
                    "GBP-SONIA",
                    vec![0.25, 1.0, 3.0],
                    vec![0.040, 0.042, 0.041],
                    InterpolationMethod::LogLinear,
                )
                .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_matches_cash_flow_valuation() {
        let provider = provider();
        let coupon = CouponFixed::new(Currency::GBP, 0.75, 0.25, 10_000_000.0, 0.045).unwrap();
        let method = CouponFixedDiscountingMethod::new();

        let pv = method.present_value(&coupon, &provider).unwrap();
        let expected = PaymentFixedDiscountingMethod::new()
            .present_value(&coupon.to_cash_flow(), &provider)
            .unwrap();
        assert!(pv.approx_eq(&expected, 1e-9));

        let df = provider.discount_factor(Currency::GBP, 0.75).unwrap();
        assert_relative_eq!(
            pv.amount(Currency::GBP).unwrap(),
            10_000_000.0 * 0.045 * 0.25 * df,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_positive_notional() {
        let provider = provider();
        let short = CouponFixed::new(Currency::GBP, 2.0, 0.5, -1_000_000.0, 0.03).unwrap();
        let method = CouponFixedDiscountingMethod::new();

        let pv = method.present_value(&short, &provider).unwrap();
        let pv_positive = method
            .present_value_positive_notional(&short, &provider)
            .unwrap();
        assert!(pv.approx_eq(&-pv_positive, 1e-9));

        let sens = method
            .present_value_curve_sensitivity(&short, &provider)
            .unwrap();
        let sens_positive = method
            .present_value_curve_sensitivity_positive_notional(&short, &provider)
            .unwrap();
        assert!(sens.approx_eq(&sens_positive.multiplied_by(-1.0), 1e-9));
    }
}
