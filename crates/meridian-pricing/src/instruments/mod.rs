//! Instrument definitions in analytic form.
//!
//! Instruments here are already reduced to times in years and amounts; date
//! and convention handling happens upstream.
//!
//! - [`FixedCashFlow`]: a single known payment
//! - [`CouponFixed`]: a fixed-rate coupon keeping its notional, rate and accrual factor
//! - [`AnnuityCouponFixed`]: an ordered leg of fixed coupons
//! - [`InstrumentDerivative`]: the closed set of instruments the calculators dispatch over

mod annuity;
mod cash_flow;
mod coupon_fixed;
mod derivative;

pub use annuity::AnnuityCouponFixed;
pub use cash_flow::FixedCashFlow;
pub use coupon_fixed::CouponFixed;
pub use derivative::{InstrumentDerivative, InstrumentDerivativeVisitor};
