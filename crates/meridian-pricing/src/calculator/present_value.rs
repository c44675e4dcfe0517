//! Present value calculator.

use tracing::trace;

use meridian_core::MultipleCurrencyAmount;
use meridian_curves::MulticurveProvider;

use crate::error::PricingResult;
use crate::instruments::{
    AnnuityCouponFixed, CouponFixed, FixedCashFlow, InstrumentDerivative,
    InstrumentDerivativeVisitor,
};
use crate::method::{
    AnnuityDiscountingMethod, CouponFixedDiscountingMethod, PaymentFixedDiscountingMethod,
};

/// Computes present values by discounting, for any [`InstrumentDerivative`].
///
/// Each variant is valued by exactly the corresponding discounting method,
/// so this path and the direct method call give the same result.
///
/// # Example
///
/// ```rust
/// use meridian_core::Currency;
/// use meridian_curves::prelude::*;
/// use meridian_pricing::prelude::*;
///
/// let provider = MulticurveProviderDiscount::builder()
///     .discount_curve(
///         Currency::EUR,
///         YieldCurve::new("EUR-DSC", vec![1.0], vec![0.02], InterpolationMethod::Linear).unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let coupon = CouponFixed::new(Currency::EUR, 1.0, 1.0, 1_000.0, 0.05).unwrap();
/// let instrument = InstrumentDerivative::from(coupon);
///
/// let pv = PresentValueDiscountingCalculator::new()
///     .present_value(&instrument, &provider)
///     .unwrap();
/// assert!((pv.amount(Currency::EUR).unwrap() - 50.0 * (-0.02_f64).exp()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PresentValueDiscountingCalculator {
    payment: PaymentFixedDiscountingMethod,
    coupon: CouponFixedDiscountingMethod,
    annuity: AnnuityDiscountingMethod,
}

impl PresentValueDiscountingCalculator {
    /// Creates the calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the present value of `instrument`.
    pub fn present_value<P>(
        &self,
        instrument: &InstrumentDerivative,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        trace!(kind = instrument.kind(), "present value dispatch");
        instrument.accept(self, provider)
    }
}

impl<P> InstrumentDerivativeVisitor<P> for PresentValueDiscountingCalculator
where
    P: MulticurveProvider + ?Sized,
{
    type Output = PricingResult<MultipleCurrencyAmount>;

    fn visit_fixed_payment(&self, payment: &FixedCashFlow, data: &P) -> Self::Output {
        self.payment.present_value(payment, data)
    }

    fn visit_coupon_fixed(&self, coupon: &CouponFixed, data: &P) -> Self::Output {
        self.coupon.present_value(coupon, data)
    }

    fn visit_annuity_coupon_fixed(&self, annuity: &AnnuityCouponFixed, data: &P) -> Self::Output {
        self.annuity.present_value(annuity, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::Currency;
    use meridian_curves::prelude::*;

    fn provider() -> MulticurveProviderDiscount {
        MulticurveProviderDiscount::builder()
            .discount_curve(
                Currency::CHF,
                YieldCurve::new(
                    "CHF-SARON",
                    vec![0.5, 2.0],
                    vec![0.005, 0.009],
                    InterpolationMethod::Linear,
                )
                .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_each_variant_matches_its_method() {
        let provider = provider();
        let calculator = PresentValueDiscountingCalculator::new();

        let payment = FixedCashFlow::new(Currency::CHF, 1.2, 750_000.0).unwrap();
        let coupon = CouponFixed::new(Currency::CHF, 1.2, 0.5, 2_000_000.0, 0.01).unwrap();
        let annuity = AnnuityCouponFixed::new(vec![coupon, coupon.with_notional(-1.0)]).unwrap();

        let via_visitor = calculator
            .present_value(&payment.into(), &provider)
            .unwrap();
        let via_method = PaymentFixedDiscountingMethod::new()
            .present_value(&payment, &provider)
            .unwrap();
        assert_eq!(via_visitor, via_method);

        let via_visitor = calculator.present_value(&coupon.into(), &provider).unwrap();
        let via_method = CouponFixedDiscountingMethod::new()
            .present_value(&coupon, &provider)
            .unwrap();
        assert_eq!(via_visitor, via_method);

        let via_visitor = calculator
            .present_value(&annuity.clone().into(), &provider)
            .unwrap();
        let via_method = AnnuityDiscountingMethod::new()
            .present_value(&annuity, &provider)
            .unwrap();
        assert_eq!(via_visitor, via_method);
    }

    #[test]
    fn test_accepts_trait_object_provider() {
        let provider = provider();
        let dyn_provider: &dyn MulticurveProvider = &provider;
        let payment = FixedCashFlow::new(Currency::CHF, 0.5, 1.0).unwrap();

        let pv = InstrumentDerivative::from(payment)
            .accept(&PresentValueDiscountingCalculator::new(), dyn_provider)
            .unwrap();
        assert!(pv.amount(Currency::CHF).is_some());
    }

    #[test]
    fn test_missing_currency() {
        let payment = FixedCashFlow::new(Currency::EUR, 0.5, 1.0).unwrap();
        let err = PresentValueDiscountingCalculator::new()
            .present_value(&payment.into(), &provider())
            .unwrap_err();
        assert!(err.is_currency_not_found());
    }
}
