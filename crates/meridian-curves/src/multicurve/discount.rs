//! Provider holding one discounting curve per currency.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use meridian_core::Currency;

use crate::curves::YieldCurve;
use crate::error::{CurveError, CurveResult};

use super::provider::{MulticurveProvider, NodeSensitivity};

/// A multi-curve provider with one [`YieldCurve`] per currency.
///
/// Curves are held behind `Arc`, so cloning the provider or replacing one
/// curve with [`with_discount_curve`](Self::with_discount_curve) shares the
/// other curves.
///
/// # Example
///
/// ```rust
/// use meridian_core::Currency;
/// use meridian_curves::prelude::*;
///
/// let eur = YieldCurve::new("EUR-DSC", vec![1.0, 5.0], vec![0.01, 0.02], InterpolationMethod::Linear)
///     .unwrap();
/// let provider = MulticurveProviderDiscount::builder()
///     .discount_curve(Currency::EUR, eur)
///     .build()
///     .unwrap();
///
/// assert_eq!(provider.discounting_curve_name(Currency::EUR).unwrap(), "EUR-DSC");
/// assert!(provider.discount_factor(Currency::USD, 1.0).is_err());
/// ```
#[derive(Clone, Default)]
pub struct MulticurveProviderDiscount {
    discount_curves: BTreeMap<Currency, Arc<YieldCurve>>,
}

impl std::fmt::Debug for MulticurveProviderDiscount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MulticurveProviderDiscount")
            .field(
                "discount_curves",
                &self
                    .discount_curves
                    .iter()
                    .map(|(ccy, curve)| (*ccy, curve.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MulticurveProviderDiscount {
    /// Creates a provider with no curves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a provider.
    #[must_use]
    pub fn builder() -> MulticurveProviderDiscountBuilder {
        MulticurveProviderDiscountBuilder::new()
    }

    /// Returns the discounting curve for `currency`.
    pub fn discount_curve(&self, currency: Currency) -> CurveResult<&YieldCurve> {
        self.discount_curves
            .get(&currency)
            .map(Arc::as_ref)
            .ok_or_else(|| CurveError::currency_not_found(currency))
    }

    /// Returns a provider with the curve for `currency` set to `curve`.
    ///
    /// Adds the currency if absent; `self` is left unchanged.
    #[must_use]
    pub fn with_discount_curve(&self, currency: Currency, curve: YieldCurve) -> Self {
        let mut discount_curves = self.discount_curves.clone();
        discount_curves.insert(currency, Arc::new(curve));
        Self { discount_curves }
    }

    /// Returns the number of discounting curves.
    pub fn len(&self) -> usize {
        self.discount_curves.len()
    }

    /// Returns true if the provider holds no curves.
    pub fn is_empty(&self) -> bool {
        self.discount_curves.is_empty()
    }
}

impl MulticurveProvider for MulticurveProviderDiscount {
    fn discount_factor(&self, currency: Currency, time: f64) -> CurveResult<f64> {
        self.discount_curve(currency)?.discount_factor(time)
    }

    fn discounting_curve_name(&self, currency: Currency) -> CurveResult<&str> {
        Ok(self.discount_curve(currency)?.name())
    }

    fn curve_sensitivity_basis(
        &self,
        currency: Currency,
        time: f64,
    ) -> CurveResult<Vec<NodeSensitivity>> {
        let curve = self.discount_curve(currency)?;
        let values = curve.discount_factor_sensitivity(time)?;
        Ok(curve
            .times()
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (node_time, value))| NodeSensitivity::new(index, *node_time, value))
            .collect())
    }

    fn currencies(&self) -> Vec<Currency> {
        self.discount_curves.keys().copied().collect()
    }

    fn has_discounting_curve(&self, currency: Currency) -> bool {
        self.discount_curves.contains_key(&currency)
    }
}

/// Builder for [`MulticurveProviderDiscount`].
#[derive(Debug, Clone, Default)]
pub struct MulticurveProviderDiscountBuilder {
    curves: Vec<(Currency, YieldCurve)>,
}

impl MulticurveProviderDiscountBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the discounting curve for `currency`.
    #[must_use]
    pub fn discount_curve(mut self, currency: Currency, curve: YieldCurve) -> Self {
        self.curves.push((currency, curve));
        self
    }

    /// Builds the provider.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DuplicateCurrency`] if a currency was given twice.
    pub fn build(self) -> CurveResult<MulticurveProviderDiscount> {
        let mut discount_curves = BTreeMap::new();
        for (currency, curve) in self.curves {
            if discount_curves.insert(currency, Arc::new(curve)).is_some() {
                return Err(CurveError::duplicate_currency(currency));
            }
        }

        debug!(curves = discount_curves.len(), "built multicurve provider");
        Ok(MulticurveProviderDiscount { discount_curves })
    }
}
