//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Linear interpolation between data points, flat beyond the first and last
/// node.
///
/// # Example
///
/// ```rust
/// use meridian_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 2.5).abs() < 1e-12);
///
/// // y(1.5) = 0.5 * y1 + 0.5 * y2
/// let weights = interp.node_weights(1.5).unwrap();
/// assert_eq!(weights, vec![0.0, 0.5, 0.5, 0.0]);
///
/// assert_eq!(interp.interpolate(7.0).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self { xs, ys })
    }

    /// Returns the node abscissae.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the node ordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: f64) -> usize {
        match self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }

    /// Index of the boundary node held constant outside the node range.
    fn flat_node(&self, x: f64) -> Option<usize> {
        if x < self.min_x() {
            Some(0)
        } else if x > self.max_x() {
            Some(self.xs.len() - 1)
        } else {
            None
        }
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        if let Some(node) = self.flat_node(x) {
            return Ok(self.ys[node]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }

    fn node_weights(&self, x: f64) -> MathResult<Vec<f64>> {
        let mut weights = vec![0.0; self.xs.len()];

        if let Some(node) = self.flat_node(x) {
            weights[node] = 1.0;
            return Ok(weights);
        }

        let i = self.find_segment(x);
        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        weights[i] = 1.0 - t;
        weights[i + 1] = t;
        Ok(weights)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
