//! Present value curve sensitivity calculator.

use tracing::trace;

use meridian_curves::{MulticurveProvider, MultipleCurrencyMulticurveSensitivity};

use crate::error::PricingResult;
use crate::instruments::{
    AnnuityCouponFixed, CouponFixed, FixedCashFlow, InstrumentDerivative,
    InstrumentDerivativeVisitor,
};
use crate::method::{
    AnnuityDiscountingMethod, CouponFixedDiscountingMethod, PaymentFixedDiscountingMethod,
};

/// Computes present value curve sensitivities for any [`InstrumentDerivative`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentValueCurveSensitivityDiscountingCalculator {
    payment: PaymentFixedDiscountingMethod,
    coupon: CouponFixedDiscountingMethod,
    annuity: AnnuityDiscountingMethod,
}

impl PresentValueCurveSensitivityDiscountingCalculator {
    /// Creates the calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the curve sensitivity of the present value of `instrument`.
    pub fn present_value_curve_sensitivity<P>(
        &self,
        instrument: &InstrumentDerivative,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyMulticurveSensitivity>
    where
        P: MulticurveProvider + ?Sized,
    {
        trace!(kind = instrument.kind(), "curve sensitivity dispatch");
        instrument.accept(self, provider)
    }
}

impl<P> InstrumentDerivativeVisitor<P> for PresentValueCurveSensitivityDiscountingCalculator
where
    P: MulticurveProvider + ?Sized,
{
    type Output = PricingResult<MultipleCurrencyMulticurveSensitivity>;

    fn visit_fixed_payment(&self, payment: &FixedCashFlow, data: &P) -> Self::Output {
        self.payment.present_value_curve_sensitivity(payment, data)
    }

    fn visit_coupon_fixed(&self, coupon: &CouponFixed, data: &P) -> Self::Output {
        self.coupon.present_value_curve_sensitivity(coupon, data)
    }

    fn visit_annuity_coupon_fixed(&self, annuity: &AnnuityCouponFixed, data: &P) -> Self::Output {
        self.annuity.present_value_curve_sensitivity(annuity, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::Currency;
    use meridian_curves::prelude::*;

    #[test]
    fn test_each_variant_matches_its_method() {
        let provider = MulticurveProviderDiscount::builder()
            .discount_curve(
                Currency::SEK,
                YieldCurve::new(
                    "SEK-DSC",
                    vec![0.25, 1.0, 4.0],
                    vec![0.030, 0.028, 0.027],
                    InterpolationMethod::LogLinear,
                )
                .unwrap(),
            )
            .build()
            .unwrap();
        let calculator = PresentValueCurveSensitivityDiscountingCalculator::new();

        let payment = FixedCashFlow::new(Currency::SEK, 2.5, -40_000.0).unwrap();
        let coupon = CouponFixed::new(Currency::SEK, 0.6, 0.25, 1e7, 0.03).unwrap();
        let annuity = AnnuityCouponFixed::new(vec![coupon, coupon.with_notional(5e6)]).unwrap();

        assert_eq!(
            calculator
                .present_value_curve_sensitivity(&payment.into(), &provider)
                .unwrap(),
            PaymentFixedDiscountingMethod::new()
                .present_value_curve_sensitivity(&payment, &provider)
                .unwrap()
        );
        assert_eq!(
            calculator
                .present_value_curve_sensitivity(&coupon.into(), &provider)
                .unwrap(),
            CouponFixedDiscountingMethod::new()
                .present_value_curve_sensitivity(&coupon, &provider)
                .unwrap()
        );
        assert_eq!(
            calculator
                .present_value_curve_sensitivity(&annuity.clone().into(), &provider)
                .unwrap(),
            AnnuityDiscountingMethod::new()
                .present_value_curve_sensitivity(&annuity, &provider)
                .unwrap()
        );
    }
}
