//! Discounting valuation methods.
//!
//! Each method values one instrument type against a
//! [`MulticurveProvider`](meridian_curves::MulticurveProvider), returning the
//! present value and its sensitivity to the nodes of the discounting curve.

mod annuity;
mod coupon_fixed;
mod payment_fixed;

pub use annuity::AnnuityDiscountingMethod;
pub use coupon_fixed::CouponFixedDiscountingMethod;
pub use payment_fixed::PaymentFixedDiscountingMethod;
