//! Domain types for multi-currency valuation.
//!
//! - [`Currency`]: ISO currency codes
//! - [`MultipleCurrencyAmount`]: amounts keyed by currency

mod amount;
mod currency;

pub use amount::MultipleCurrencyAmount;
pub use currency::Currency;
