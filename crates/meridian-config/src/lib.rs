//! # Meridian Config
//!
//! File-based configuration of multicurve providers.
//!
//! - [`ProviderConfig`]: the discounting curves of a provider, read from JSON
//!   or TOML
//! - [`Validate`]: field-level validation reporting every problem found
//!
//! ## Example
//!
//! ```rust
//! use meridian_config::prelude::*;
//! use meridian_core::Currency;
//!
//! let config = ProviderConfig::from_toml_str(
//!     r#"
//!     [[curves]]
//!     name = "EUR-DSC"
//!     currency = "EUR"
//!     interpolation = "LogLinear"
//!     nodes = [
//!         { time = 0.5, zero_rate = 0.011 },
//!         { time = 2.0, zero_rate = 0.016 },
//!     ]
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_valid());
//! let provider = config.build_provider().unwrap();
//! assert_eq!(provider.len(), 1);
//! assert!(provider.discount_curve(Currency::EUR).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod provider;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
    pub use crate::provider::{DiscountCurveConfig, NodeConfig, ProviderConfig};
}

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use provider::{DiscountCurveConfig, NodeConfig, ProviderConfig};
