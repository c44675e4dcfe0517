//! # Meridian Math
//!
//! Numerical utilities for the Meridian discounting engine.
//!
//! This crate provides:
//!
//! - **Interpolation**: Piecewise linear interpolation that also reports how the
//!   interpolated value depends on each input ordinate (node weights), held
//!   flat beyond the node range
//!
//! Node weights are what turns a point sensitivity on a curve into a
//! sensitivity to each of its calibration nodes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
