//! The provider abstraction consumed by pricing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use meridian_core::Currency;

use crate::error::CurveResult;

/// Sensitivity of a discount factor to one curve node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSensitivity {
    /// Position of the node on its curve.
    pub node_index: usize,
    /// Node time in years.
    pub node_time: f64,
    /// `d df / d node` for the node.
    pub value: f64,
}

impl NodeSensitivity {
    /// Creates a node sensitivity.
    #[must_use]
    pub fn new(node_index: usize, node_time: f64, value: f64) -> Self {
        Self {
            node_index,
            node_time,
            value,
        }
    }
}

/// Read-only source of discounting curves, one per currency.
///
/// Implementations must be shareable across threads; pricing borrows a
/// provider by shared reference and never mutates it.
///
/// # Required Methods
///
/// - [`discount_factor`](MulticurveProvider::discount_factor)
/// - [`discounting_curve_name`](MulticurveProvider::discounting_curve_name)
/// - [`curve_sensitivity_basis`](MulticurveProvider::curve_sensitivity_basis)
/// - [`currencies`](MulticurveProvider::currencies)
///
/// Every currency-keyed method fails with
/// [`CurveError::CurrencyNotFound`](crate::error::CurveError::CurrencyNotFound)
/// when the provider has no discounting curve for the currency.
pub trait MulticurveProvider: Send + Sync {
    /// Returns the discount factor for `currency` at `time` (years).
    fn discount_factor(&self, currency: Currency, time: f64) -> CurveResult<f64>;

    /// Returns the name of the discounting curve for `currency`.
    fn discounting_curve_name(&self, currency: Currency) -> CurveResult<&str>;

    /// Returns `d df(time) / d node` for every node of the discounting curve
    /// of `currency`, in node order.
    ///
    /// The result always lists every node, so zero sensitivities keep stable
    /// keys.
    fn curve_sensitivity_basis(
        &self,
        currency: Currency,
        time: f64,
    ) -> CurveResult<Vec<NodeSensitivity>>;

    /// Returns the currencies with a discounting curve, in ascending order.
    fn currencies(&self) -> Vec<Currency>;

    /// Returns true if the provider discounts `currency`.
    fn has_discounting_curve(&self, currency: Currency) -> bool {
        self.currencies().contains(&currency)
    }
}

/// Blanket implementation allowing `Arc<T>` to be used as a provider.
impl<T: MulticurveProvider + ?Sized> MulticurveProvider for Arc<T> {
    fn discount_factor(&self, currency: Currency, time: f64) -> CurveResult<f64> {
        (**self).discount_factor(currency, time)
    }

    fn discounting_curve_name(&self, currency: Currency) -> CurveResult<&str> {
        (**self).discounting_curve_name(currency)
    }

    fn curve_sensitivity_basis(
        &self,
        currency: Currency,
        time: f64,
    ) -> CurveResult<Vec<NodeSensitivity>> {
        (**self).curve_sensitivity_basis(currency, time)
    }

    fn currencies(&self) -> Vec<Currency> {
        (**self).currencies()
    }

    fn has_discounting_curve(&self, currency: Currency) -> bool {
        (**self).has_discounting_curve(currency)
    }
}
