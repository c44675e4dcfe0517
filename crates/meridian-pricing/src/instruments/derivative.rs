//! Instrument sum type and its visitor.

use serde::Serialize;

use meridian_core::Currency;

use super::{AnnuityCouponFixed, CouponFixed, FixedCashFlow};

/// The instruments a calculator can value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InstrumentDerivative {
    /// A single fixed payment.
    FixedPayment(FixedCashFlow),
    /// A fixed-rate coupon.
    CouponFixed(CouponFixed),
    /// A leg of fixed-rate coupons.
    AnnuityCouponFixed(AnnuityCouponFixed),
}

/// An operation defined for every [`InstrumentDerivative`] variant.
///
/// `P` is the market data the operation reads, typically a
/// [`MulticurveProvider`](meridian_curves::MulticurveProvider).
pub trait InstrumentDerivativeVisitor<P: ?Sized> {
    /// Result of visiting one instrument.
    type Output;

    /// Visits a fixed payment.
    fn visit_fixed_payment(&self, payment: &FixedCashFlow, data: &P) -> Self::Output;

    /// Visits a fixed coupon.
    fn visit_coupon_fixed(&self, coupon: &CouponFixed, data: &P) -> Self::Output;

    /// Visits an annuity of fixed coupons.
    fn visit_annuity_coupon_fixed(&self, annuity: &AnnuityCouponFixed, data: &P) -> Self::Output;
}

impl InstrumentDerivative {
    /// Dispatches to the visitor method matching this variant.
    pub fn accept<P, V>(&self, visitor: &V, data: &P) -> V::Output
    where
        P: ?Sized,
        V: InstrumentDerivativeVisitor<P> + ?Sized,
    {
        match self {
            Self::FixedPayment(payment) => visitor.visit_fixed_payment(payment, data),
            Self::CouponFixed(coupon) => visitor.visit_coupon_fixed(coupon, data),
            Self::AnnuityCouponFixed(annuity) => visitor.visit_annuity_coupon_fixed(annuity, data),
        }
    }

    /// Returns the payment currency.
    pub fn currency(&self) -> Currency {
        match self {
            Self::FixedPayment(payment) => payment.currency(),
            Self::CouponFixed(coupon) => coupon.currency(),
            Self::AnnuityCouponFixed(annuity) => annuity.currency(),
        }
    }

    /// Returns a short name for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FixedPayment(_) => "FixedPayment",
            Self::CouponFixed(_) => "CouponFixed",
            Self::AnnuityCouponFixed(_) => "AnnuityCouponFixed",
        }
    }
}

impl From<FixedCashFlow> for InstrumentDerivative {
    fn from(payment: FixedCashFlow) -> Self {
        Self::FixedPayment(payment)
    }
}

impl From<CouponFixed> for InstrumentDerivative {
    fn from(coupon: CouponFixed) -> Self {
        Self::CouponFixed(coupon)
    }
}

impl From<AnnuityCouponFixed> for InstrumentDerivative {
    fn from(annuity: AnnuityCouponFixed) -> Self {
        Self::AnnuityCouponFixed(annuity)
    }
}
