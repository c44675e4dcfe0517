//! Discounting method for fixed payments.

use tracing::trace;

use meridian_core::MultipleCurrencyAmount;
use meridian_curves::{MulticurveProvider, MulticurveSensitivity, MultipleCurrencyMulticurveSensitivity};

use crate::error::PricingResult;
use crate::instruments::FixedCashFlow;

/// Values a [`FixedCashFlow`] by discounting on the curve of its currency.
///
/// # Example
///
/// ```rust
/// use meridian_core::Currency;
/// use meridian_curves::prelude::*;
/// use meridian_pricing::{FixedCashFlow, PaymentFixedDiscountingMethod};
///
/// let provider = MulticurveProviderDiscount::builder()
///     .discount_curve(
///         Currency::USD,
///         YieldCurve::new("USD-DSC", vec![1.0], vec![0.05], InterpolationMethod::Linear).unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// let payment = FixedCashFlow::new(Currency::USD, 2.0, 1_000.0).unwrap();
/// let pv = PaymentFixedDiscountingMethod::new()
///     .present_value(&payment, &provider)
///     .unwrap();
/// let expected = 1_000.0 * (-0.10_f64).exp();
/// assert!((pv.amount(Currency::USD).unwrap() - expected).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentFixedDiscountingMethod;

impl PaymentFixedDiscountingMethod {
    /// Creates the method.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns `amount * df(payment_time)` in the payment currency.
    ///
    /// # Errors
    ///
    /// Fails with a currency-not-found curve error if the provider has no
    /// discounting curve for the payment currency.
    pub fn present_value<P>(
        &self,
        payment: &FixedCashFlow,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        let currency = payment.currency();
        let df = provider.discount_factor(currency, payment.payment_time())?;
        trace!(
            %currency,
            time = payment.payment_time(),
            df,
            "discounting fixed payment"
        );
        Ok(MultipleCurrencyAmount::of(currency, payment.amount() * df))
    }

    /// Returns the sensitivity of the present value to every node of the
    /// discounting curve, keyed by currency and curve name.
    ///
    /// A zero amount still yields one entry per node, all zero.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`present_value`](Self::present_value).
    pub fn present_value_curve_sensitivity<P>(
        &self,
        payment: &FixedCashFlow,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyMulticurveSensitivity>
    where
        P: MulticurveProvider + ?Sized,
    {
        let currency = payment.currency();
        let curve_name = provider.discounting_curve_name(currency)?;
        let basis = provider.curve_sensitivity_basis(currency, payment.payment_time())?;
        trace!(
            %currency,
            curve = curve_name,
            nodes = basis.len(),
            "curve sensitivity of fixed payment"
        );

        let amount = payment.amount();
        let nodes = basis
            .iter()
            .map(|node| (node.node_time, amount * node.value))
            .collect();
        Ok(MultipleCurrencyMulticurveSensitivity::of(
            currency,
            MulticurveSensitivity::of_curve(curve_name, nodes),
        ))
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
                Currency::EUR,
                YieldCurve::new(
                    "EUR-DSC",
                    vec![0.5, 1.0, 2.0],
                    vec![0.010, 0.012, 0.015],
                    InterpolationMethod::Linear,
                )
                .unwrap(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_present_value_is_amount_times_df() {
        let provider = provider();
        let payment = FixedCashFlow::new(Currency::EUR, 1.5, 2_500_000.0).unwrap();
        let pv = PaymentFixedDiscountingMethod::new()
            .present_value(&payment, &provider)
            .unwrap();

        let df = provider.discount_factor(Currency::EUR, 1.5).unwrap();
        assert_eq!(pv.len(), 1);
        assert_relative_eq!(pv.amount(Currency::EUR).unwrap(), 2_500_000.0 * df, epsilon = 1e-2);
    }

    #[test]
    fn test_sensitivity_scales_basis() {
        let provider = provider();
        let payment = FixedCashFlow::new(Currency::EUR, 1.5, -1_000.0).unwrap();
        let sens = PaymentFixedDiscountingMethod::new()
            .present_value_curve_sensitivity(&payment, &provider)
            .unwrap();

        let basis = provider.curve_sensitivity_basis(Currency::EUR, 1.5).unwrap();
        let nodes = sens
            .sensitivity(Currency::EUR)
            .unwrap()
            .curve("EUR-DSC")
            .unwrap();
        assert_eq!(nodes.len(), basis.len());
        for (node, expected) in nodes.iter().zip(&basis) {
            assert_eq!(node.0, expected.node_time);
            assert_relative_eq!(node.1, -1_000.0 * expected.value);
        }
    }

    #[test]
    fn test_zero_amount_keeps_structure() {
        let provider = provider();
        let payment = FixedCashFlow::new(Currency::EUR, 1.5, 0.0).unwrap();
        let method = PaymentFixedDiscountingMethod::new();

        let pv = method.present_value(&payment, &provider).unwrap();
        assert_eq!(pv.amount(Currency::EUR), Some(0.0));

        let sens = method
            .present_value_curve_sensitivity(&payment, &provider)
            .unwrap();
        let nodes = sens
            .sensitivity(Currency::EUR)
            .unwrap()
            .curve("EUR-DSC")
            .unwrap();
        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|(_, v)| *v == 0.0));
    }

    #[test]
    fn test_missing_currency() {
        let provider = provider();
        let payment = FixedCashFlow::new(Currency::USD, 1.0, 1.0).unwrap();
        let method = PaymentFixedDiscountingMethod::new();

        assert!(method
            .present_value(&payment, &provider)
            .unwrap_err()
            .is_currency_not_found());
        assert!(method
            .present_value_curve_sensitivity(&payment, &provider)
            .unwrap_err()
            .is_currency_not_found());
    }

    #[test]
    fn test_non_finite_amount_propagates() {
        let provider = provider();
        let payment = FixedCashFlow::new(Currency::EUR, 1.0, f64::NAN).unwrap();
        let pv = PaymentFixedDiscountingMethod::new()
            .present_value(&payment, &provider)
            .unwrap();
        assert!(pv.amount(Currency::EUR).unwrap().is_nan());
    }
}
