//! Discounting method for annuities of fixed coupons.

use meridian_core::MultipleCurrencyAmount;
use meridian_curves::{MulticurveProvider, MultipleCurrencyMulticurveSensitivity};

use super::CouponFixedDiscountingMethod;
use crate::error::PricingResult;
use crate::instruments::AnnuityCouponFixed;

/// Values an [`AnnuityCouponFixed`] as the sum of its coupons.
///
/// Coupons are combined in the order the annuity holds them.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnuityDiscountingMethod {
    coupon: CouponFixedDiscountingMethod,
}

impl AnnuityDiscountingMethod {
    /// Creates the method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the present value of the annuity.
    pub fn present_value<P>(
        &self,
        annuity: &AnnuityCouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        annuity
            .coupons()
            .iter()
            .try_fold(MultipleCurrencyAmount::new(), |total, coupon| {
                Ok(total.plus(&self.coupon.present_value(coupon, provider)?))
            })
    }

    /// Returns the curve sensitivity of the annuity present value.
    pub fn present_value_curve_sensitivity<P>(
        &self,
        annuity: &AnnuityCouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyMulticurveSensitivity>
    where
        P: MulticurveProvider + ?Sized,
    {
        annuity.coupons().iter().try_fold(
            MultipleCurrencyMulticurveSensitivity::new(),
            |total, coupon| {
                Ok(total.plus(&self.coupon.present_value_curve_sensitivity(coupon, provider)?))
            },
        )
    }

    /// Returns the present value with every coupon notional made positive.
    pub fn present_value_positive_notional<P>(
        &self,
        annuity: &AnnuityCouponFixed,
        provider: &P,
    ) -> PricingResult<MultipleCurrencyAmount>
    where
        P: MulticurveProvider + ?Sized,
    {
        self.present_value(&annuity.with_positive_notional(), provider)
    }
}
