//! Interpolated zero-rate curve with node sensitivities.

use meridian_math::interpolation::{Interpolator, LinearInterpolator};

use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;

/// A named curve of continuously compounded zero rates.
///
/// The curve is defined by nodes `(t_i, r_i)` and gives
/// `df(t) = exp(-r(t) * t)`. Between nodes `r(t)` is interpolated according
/// to the [`InterpolationMethod`]; outside the node range the nearest
/// boundary zero rate is held flat.
///
/// The node zero rates are the curve parameters: [`parameter_sensitivity`]
/// and [`discount_factor_sensitivity`] report derivatives with respect to
/// each `r_i`, always one entry per node.
///
/// [`parameter_sensitivity`]: YieldCurve::parameter_sensitivity
/// [`discount_factor_sensitivity`]: YieldCurve::discount_factor_sensitivity
///
/// # Example
///
/// ```rust
/// use meridian_curves::prelude::*;
///
/// let curve = YieldCurve::new(
///     "EUR-DSC",
///     vec![0.5, 1.0, 2.0],
///     vec![0.010, 0.012, 0.015],
///     InterpolationMethod::Linear,
/// )
/// .unwrap();
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - (-0.012_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct YieldCurve {
    name: String,
    times: Vec<f64>,
    rates: Vec<f64>,
    method: InterpolationMethod,
    /// Interpolates `r` (linear) or `r * t` (log-linear); absent for a single node.
    interpolator: Option<LinearInterpolator>,
}

impl YieldCurve {
    /// Creates a curve from node times (in years) and zero rates.
    ///
    /// Times must be finite, non-negative and strictly increasing. Rates are
    /// taken as given.
    pub fn new(
        name: impl Into<String>,
        times: Vec<f64>,
        rates: Vec<f64>,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CurveError::invalid_nodes("curve name must not be empty"));
        }
        if times.len() != rates.len() {
            return Err(CurveError::invalid_nodes(format!(
                "times and rates must have same length: {} vs {}",
                times.len(),
                rates.len()
            )));
        }
        if times.is_empty() {
            return Err(CurveError::InsufficientPoints {
                required: 1,
                got: 0,
            });
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(CurveError::invalid_nodes(format!(
                "node time {bad} must be finite and non-negative"
            )));
        }
        for (index, pair) in times.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(CurveError::NonMonotonicTimes {
                    index: index + 1,
                    prev: pair[0],
                    current: pair[1],
                });
            }
        }

        let times: Vec<f64> = times.into_iter().map(|t| t + 0.0).collect();

        let interpolator = if times.len() < 2 {
            None
        } else {
            let ys = match method {
                InterpolationMethod::Linear => rates.clone(),
                InterpolationMethod::LogLinear => {
                    times.iter().zip(&rates).map(|(t, r)| t * r).collect()
                }
            };
            Some(LinearInterpolator::new(times.clone(), ys)?)
        };

        Ok(Self {
            name,
            times,
            rates,
            method,
            interpolator,
        })
    }

    /// Returns the curve name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node times in years.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the node zero rates.
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the interpolation method.
    pub fn method(&self) -> InterpolationMethod {
        self.method
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.times.len()
    }

    /// Returns a copy of the curve with node `index` shifted by `shift`.
    pub fn with_bumped_node(&self, index: usize, shift: f64) -> CurveResult<Self> {
        if index >= self.rates.len() {
            return Err(CurveError::invalid_nodes(format!(
                "node index {index} out of range for {} nodes",
                self.rates.len()
            )));
        }
        let mut rates = self.rates.clone();
        rates[index] += shift;
        Self::new(self.name.clone(), self.times.clone(), rates, self.method)
    }

    /// Returns the continuously compounded zero rate at `t`.
    pub fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        check_time(t)?;
        let last = self.rates.len() - 1;

        let Some(interpolator) = &self.interpolator else {
            return Ok(self.rates[0]);
        };
        if t <= self.times[0] {
            return Ok(self.rates[0]);
        }
        if t >= self.times[last] {
            return Ok(self.rates[last]);
        }

        let value = interpolator.interpolate(t)?;
        Ok(match self.method {
            InterpolationMethod::Linear => value,
            InterpolationMethod::LogLinear => value / t,
        })
    }

    /// Returns the discount factor at `t`.
    pub fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let rate = self.zero_rate(t)?;
        Ok((-rate * t).exp())
    }

    /// Returns `d r(t) / d r_i` for every node `i`.
    pub fn parameter_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        check_time(t)?;
        let n = self.rates.len();
        let mut weights = vec![0.0; n];

        let Some(interpolator) = &self.interpolator else {
            weights[0] = 1.0;
            return Ok(weights);
        };
        if t <= self.times[0] {
            weights[0] = 1.0;
            return Ok(weights);
        }
        if t >= self.times[n - 1] {
            weights[n - 1] = 1.0;
            return Ok(weights);
        }

        let node_weights = interpolator.node_weights(t)?;
        match self.method {
            InterpolationMethod::Linear => Ok(node_weights),
            InterpolationMethod::LogLinear => Ok(node_weights
                .iter()
                .zip(&self.times)
                .map(|(w, ti)| w * ti / t)
                .collect()),
        }
    }

    /// Returns `d df(t) / d r_i` for every node `i`.
    ///
    /// Since `df(t) = exp(-r(t) * t)`, each entry is
    /// `-t * df(t) * d r(t) / d r_i`.
    pub fn discount_factor_sensitivity(&self, t: f64) -> CurveResult<Vec<f64>> {
        let df = self.discount_factor(t)?;
        let factor = -t * df;
        Ok(self
            .parameter_sensitivity(t)?
            .into_iter()
            .map(|w| factor * w)
            .collect())
    }
}

fn check_time(t: f64) -> CurveResult<()> {
    if t.is_finite() && t >= 0.0 {
        Ok(())
    } else {
        Err(CurveError::invalid_time(t))
    }
}
