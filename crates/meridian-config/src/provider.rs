//! Multicurve provider configuration.
//!
//! A [`ProviderConfig`] lists one [`DiscountCurveConfig`] per currency and
//! builds a [`MulticurveProviderDiscount`] from them.
//!
//! ```toml
//! [[curves]]
//! name = "EUR-DSC"
//! currency = "EUR"
//! interpolation = "Linear"
//! nodes = [
//!     { time = 0.5, zero_rate = 0.011 },
//!     { time = 1.0, zero_rate = 0.013 },
//! ]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use meridian_core::Currency;
use meridian_curves::{InterpolationMethod, MulticurveProviderDiscount, YieldCurve};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

// =============================================================================
// NODE
// =============================================================================

/// One curve node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Node time in years.
    pub time: f64,
    /// Continuously compounded zero rate at the node.
    pub zero_rate: f64,
}

impl NodeConfig {
    /// Creates a node.
    pub fn new(time: f64, zero_rate: f64) -> Self {
        Self { time, zero_rate }
    }
}

// =============================================================================
// DISCOUNT CURVE
// =============================================================================

/// Configuration of the discounting curve of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCurveConfig {
    /// Curve name, used as the sensitivity key.
    pub name: String,
    /// Currency discounted by the curve.
    pub currency: Currency,
    /// Interpolation between nodes.
    #[serde(default)]
    pub interpolation: InterpolationMethod,
    /// Curve nodes in increasing time order.
    pub nodes: Vec<NodeConfig>,
}

impl DiscountCurveConfig {
    /// Creates a curve configuration with linear interpolation.
    pub fn new(name: impl Into<String>, currency: Currency, nodes: Vec<NodeConfig>) -> Self {
        Self {
            name: name.into(),
            currency,
            interpolation: InterpolationMethod::default(),
            nodes,
        }
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn with_interpolation(mut self, interpolation: InterpolationMethod) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Builds the curve.
    pub fn build_curve(&self) -> ConfigResult<YieldCurve> {
        let times = self.nodes.iter().map(|n| n.time).collect();
        let rates = self.nodes.iter().map(|n| n.zero_rate).collect();
        Ok(YieldCurve::new(
            self.name.clone(),
            times,
            rates,
            self.interpolation,
        )?)
    }
}

impl Validate for DiscountCurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.nodes.is_empty() {
            errors.push(ValidationError::with_rule(
                "nodes",
                "At least one node is required",
                "non_empty_nodes",
            ));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if !node.time.is_finite() || node.time < 0.0 {
                errors.push(ValidationError::with_rule(
                    format!("nodes[{i}].time"),
                    "Node time must be finite and non-negative",
                    "valid_time",
                ));
            }
            if !node.zero_rate.is_finite() {
                errors.push(ValidationError::with_rule(
                    format!("nodes[{i}].zero_rate"),
                    "Zero rate must be finite",
                    "finite_rate",
                ));
            }
        }

        for (i, pair) in self.nodes.windows(2).enumerate() {
            if pair[1].time <= pair[0].time {
                errors.push(ValidationError::with_rule(
                    format!("nodes[{}].time", i + 1),
                    format!(
                        "Node times must be strictly increasing: {} after {}",
                        pair[1].time, pair[0].time
                    ),
                    "increasing_times",
                ));
            }
        }

        errors
    }
}

// =============================================================================
// PROVIDER
// =============================================================================

/// Configuration of a [`MulticurveProviderDiscount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Discounting curves, at most one per currency.
    #[serde(default)]
    pub curves: Vec<DiscountCurveConfig>,
}

impl ProviderConfig {
    /// Creates a configuration from its curves.
    pub fn new(curves: Vec<DiscountCurveConfig>) -> Self {
        Self { curves }
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a TOML configuration.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Loads a configuration file, choosing the format from the extension
    /// (`.json` or `.toml`).
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        debug!(
            path = %path.display(),
            curves = config.curves.len(),
            "loaded provider configuration"
        );
        Ok(config)
    }

    /// Validates the configuration and builds the provider.
    pub fn build_provider(&self) -> ConfigResult<MulticurveProviderDiscount> {
        let errors = self.validate();
        for error in &errors {
            warn!(field = %error.field, message = %error.message, "rejected curve configuration");
        }
        if let Some(err) = ConfigError::from_validation_errors(errors) {
            return Err(err);
        }

        let builder = self
            .curves
            .iter()
            .try_fold(MulticurveProviderDiscount::builder(), |builder, curve| {
                Ok::<_, ConfigError>(builder.discount_curve(curve.currency, curve.build_curve()?))
            })?;
        Ok(builder.build()?)
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut seen = BTreeSet::new();

        for (i, curve) in self.curves.iter().enumerate() {
            let prefix = format!("curves[{i}]");
            errors.extend(curve.validate().into_iter().map(|e| e.nested(&prefix)));

            if !seen.insert(curve.currency) {
                errors.push(ValidationError::with_rule(
                    format!("{prefix}.currency"),
                    format!("Duplicate discounting curve for {}", curve.currency),
                    "unique_currency",
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_curves::MulticurveProvider;

    fn eur_curve() -> DiscountCurveConfig {
        DiscountCurveConfig::new(
            "EUR-DSC",
            Currency::EUR,
            vec![NodeConfig::new(0.5, 0.011), NodeConfig::new(1.0, 0.013)],
        )
    }

    #[test]
    fn test_valid_curve() {
        assert!(eur_curve().is_valid());
    }

    #[test]
    fn test_invalid_curve() {
        let mut curve = eur_curve();
        curve.name = String::new();
        curve.nodes.push(NodeConfig::new(0.75, f64::NAN));

        let errors = curve.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "nodes[2].zero_rate", "nodes[2].time"]);
    }

    #[test]
    fn test_empty_nodes() {
        let curve = DiscountCurveConfig::new("EUR-DSC", Currency::EUR, vec![]);
        assert_eq!(curve.validate()[0].rule.as_deref(), Some("non_empty_nodes"));
    }

    #[test]
    fn test_duplicate_currency() {
        let config = ProviderConfig::new(vec![eur_curve(), eur_curve()]);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "curves[1].currency");
        assert!(matches!(
            config.build_provider(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_rejection_reports_every_error_once() {
        let mut bad = eur_curve();
        bad.name = String::new();
        let config = ProviderConfig::new(vec![bad, eur_curve()]);

        match config.build_provider() {
            Err(ConfigError::MultipleValidationErrors(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["curves[0].name", "curves[1].currency"]);
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_build_provider() {
        let config = ProviderConfig::new(vec![
            eur_curve(),
            DiscountCurveConfig::new("USD-OIS", Currency::USD, vec![NodeConfig::new(1.0, 0.04)])
                .with_interpolation(InterpolationMethod::LogLinear),
        ]);
        let provider = config.build_provider().unwrap();

        assert_eq!(provider.currencies(), vec![Currency::USD, Currency::EUR]);
        assert_eq!(provider.discounting_curve_name(Currency::USD).unwrap(), "USD-OIS");
        assert_eq!(
            provider.discount_curve(Currency::USD).unwrap().method(),
            InterpolationMethod::LogLinear
        );
    }

    #[test]
    fn test_interpolation_defaults_to_linear() {
        let json = r#"{
            "curves": [
                { "name": "GBP-DSC", "currency": "GBP", "nodes": [ { "time": 1.0, "zero_rate": 0.04 } ] }
            ]
        }"#;
        let config = ProviderConfig::from_json_str(json).unwrap();
        assert_eq!(config.curves[0].interpolation, InterpolationMethod::Linear);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            ProviderConfig::from_json_str("{ \"curves\": 5 }"),
            Err(ConfigError::Deserialization(_))
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            ProviderConfig::load("curves.yaml"),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }
}
