//! # Meridian Core
//!
//! Core types shared by every crate of the Meridian discounting engine.
//!
//! - **Types**: [`Currency`] (ISO 4217) and [`MultipleCurrencyAmount`], the
//!   per-currency container returned by every present value computation
//! - **Errors**: [`MeridianError`] for failures that are not specific to a
//!   single layer
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//!
//! let leg1 = MultipleCurrencyAmount::of(Currency::EUR, 1_000.0);
//! let leg2 = MultipleCurrencyAmount::of(Currency::USD, 250.0);
//! let total = leg1.plus(&leg2);
//!
//! assert_eq!(total.amount(Currency::EUR), Some(1_000.0));
//! assert_eq!(total.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MeridianError, MeridianResult};
    pub use crate::types::{Currency, MultipleCurrencyAmount};
}

// Re-export commonly used types at crate root
pub use error::{MeridianError, MeridianResult};
pub use types::{Currency, MultipleCurrencyAmount};
