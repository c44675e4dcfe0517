//! Interpolation methods for curve construction.
//!
//! Every interpolator reports, besides the interpolated value, the weight of
//! each node ordinate in that value: `w_i(x) = d y(x) / d y_i`. For schemes
//! that are linear in the ordinates, `y(x) = sum_i w_i(x) * y_i`.
//!
//! Outside the node range the nearest boundary ordinate is held constant.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation

mod linear;

pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the sensitivity of the interpolated value at x to each node
    /// ordinate, in node order. The vector always has one entry per node.
    fn node_weights(&self, x: f64) -> MathResult<Vec<f64>>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;
}
