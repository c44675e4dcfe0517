//! # Meridian Pricing
//!
//! Present value and curve sensitivity of fixed cash flows, discounted
//! against a [`MulticurveProvider`](meridian_curves::MulticurveProvider).
//!
//! Two paths compute the same numbers:
//!
//! - **Methods**: [`PaymentFixedDiscountingMethod`],
//!   [`CouponFixedDiscountingMethod`] and [`AnnuityDiscountingMethod`] value
//!   one instrument type each
//! - **Calculators**: [`PresentValueDiscountingCalculator`] and
//!   [`PresentValueCurveSensitivityDiscountingCalculator`] accept any
//!   [`InstrumentDerivative`] and dispatch to the matching method
//!
//! Providers are borrowed, never cloned, and every result is a new value.
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::Currency;
//! use meridian_curves::prelude::*;
//! use meridian_pricing::prelude::*;
//!
//! let provider = MulticurveProviderDiscount::builder()
//!     .discount_curve(
//!         Currency::EUR,
//!         YieldCurve::new(
//!             "EUR-DSC",
//!             vec![0.5, 1.0, 2.0],
//!             vec![0.010, 0.012, 0.015],
//!             InterpolationMethod::Linear,
//!         )
//!         .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let coupon = CouponFixed::new(Currency::EUR, 0.652, 0.2521, 1e8, 0.02).unwrap();
//!
//! let direct = CouponFixedDiscountingMethod::new()
//!     .present_value(&coupon, &provider)
//!     .unwrap();
//! let dispatched = PresentValueDiscountingCalculator::new()
//!     .present_value(&coupon.into(), &provider)
//!     .unwrap();
//!
//! assert!(direct.approx_eq(&dispatched, 1e-2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod calculator;
pub mod error;
pub mod instruments;
pub mod method;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        PresentValueCurveSensitivityDiscountingCalculator, PresentValueDiscountingCalculator,
    };
    pub use crate::error::{PricingError, PricingResult};
    pub use crate::instruments::{
        AnnuityCouponFixed, CouponFixed, FixedCashFlow, InstrumentDerivative,
        InstrumentDerivativeVisitor,
    };
    pub use crate::method::{
        AnnuityDiscountingMethod, CouponFixedDiscountingMethod, PaymentFixedDiscountingMethod,
    };
}

pub use calculator::{
    PresentValueCurveSensitivityDiscountingCalculator, PresentValueDiscountingCalculator,
};
pub use error::{PricingError, PricingResult};
pub use instruments::{
    AnnuityCouponFixed, CouponFixed, FixedCashFlow, InstrumentDerivative,
    InstrumentDerivativeVisitor,
};
pub use method::{
    AnnuityDiscountingMethod, CouponFixedDiscountingMethod, PaymentFixedDiscountingMethod,
};
