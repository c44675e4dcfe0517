//! Calculators dispatching over [`InstrumentDerivative`](crate::InstrumentDerivative).

mod curve_sensitivity;
mod present_value;

pub use curve_sensitivity::PresentValueCurveSensitivityDiscountingCalculator;
pub use present_value::PresentValueDiscountingCalculator;
