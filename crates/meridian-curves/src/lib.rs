//! # Meridian Curves
//!
//! Discounting curves and the multi-curve provider used by the Meridian
//! discounting engine.
//!
//! This crate provides:
//!
//! - **Curves**: [`YieldCurve`], an interpolated continuously compounded
//!   zero curve that reports discount factor sensitivities to its nodes
//! - **Provider**: the [`MulticurveProvider`] trait and its curve-per-currency
//!   implementation [`MulticurveProviderDiscount`]
//! - **Sensitivities**: [`MulticurveSensitivity`] and
//!   [`MultipleCurrencyMulticurveSensitivity`] with their combinators
//!
//! ## Quick Start
//!
//! ```rust
//! use meridian_core::Currency;
//! use meridian_curves::prelude::*;
//!
//! let curve = YieldCurve::new(
//!     "EUR-DSC",
//!     vec![0.25, 1.0, 5.0],
//!     vec![0.010, 0.012, 0.020],
//!     InterpolationMethod::LogLinear,
//! )
//! .unwrap();
//!
//! let provider = MulticurveProviderDiscount::builder()
//!     .discount_curve(Currency::EUR, curve)
//!     .build()
//!     .unwrap();
//!
//! let df = provider.discount_factor(Currency::EUR, 2.0).unwrap();
//! let basis = provider.curve_sensitivity_basis(Currency::EUR, 2.0).unwrap();
//! assert!(df < 1.0);
//! assert_eq!(basis.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod curves;
pub mod error;
pub mod interpolation;
pub mod multicurve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curves::YieldCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::multicurve::{
        MulticurveProvider, MulticurveProviderDiscount, MulticurveProviderDiscountBuilder,
        MulticurveSensitivity, MultipleCurrencyMulticurveSensitivity, NodeSensitivity,
    };
}

pub use curves::YieldCurve;
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMethod;
pub use multicurve::{
    MulticurveProvider, MulticurveProviderDiscount, MulticurveProviderDiscountBuilder,
    MulticurveSensitivity, MultipleCurrencyMulticurveSensitivity, NodeSensitivity,
};
