//! Curve types.

mod yield_curve;

pub use yield_curve::YieldCurve;
