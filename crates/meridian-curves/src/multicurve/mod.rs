//! Multi-curve framework.
//!
//! - [`MulticurveProvider`]: read-only access to per-currency discounting curves
//! - [`MulticurveProviderDiscount`]: provider backed by one [`YieldCurve`] per currency
//! - [`MulticurveSensitivity`] and [`MultipleCurrencyMulticurveSensitivity`]:
//!   node-level sensitivities keyed by curve name and currency
//!
//! [`YieldCurve`]: crate::curves::YieldCurve

mod discount;
mod provider;
mod sensitivity;

pub use discount::{MulticurveProviderDiscount, MulticurveProviderDiscountBuilder};
pub use provider::{MulticurveProvider, NodeSensitivity};
pub use sensitivity::{MulticurveSensitivity, MultipleCurrencyMulticurveSensitivity};
