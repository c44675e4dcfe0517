//! Interpolation methods for zero curves.

use serde::{Deserialize, Serialize};

/// How a [`YieldCurve`](crate::curves::YieldCurve) interpolates between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Linear interpolation on zero rates.
    #[default]
    Linear,

    /// Linear interpolation on log discount factors (`r * t`).
    LogLinear,
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "Linear",
            Self::LogLinear => "Log-Linear",
        };
        write!(f, "{name}")
    }
}
