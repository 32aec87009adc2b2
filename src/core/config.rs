//! Validator configuration.
//!
//! All fields have defaults matching the account forms, so an empty JSON
//! object is a complete configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Default VIES REST endpoint.
pub const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Longest VAT field value accepted by the form layer.
pub const MAX_VAT_LENGTH: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Reject numbers whose prefix differs from the declared country.
    pub check_country_match: bool,
    /// Confirm structurally valid numbers against the registry.
    pub check_registry: bool,
    /// Maximum raw length accepted by the form layer.
    pub max_length: usize,
    pub registry: RegistryConfig,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            check_country_match: true,
            check_registry: true,
            max_length: MAX_VAT_LENGTH,
            registry: RegistryConfig::default(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_length == 0 {
            return Err(ConfigError::Invalid("max_length must be positive".into()));
        }
        if self.registry.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "registry.timeout_secs must be positive".into(),
            ));
        }
        if !self.registry.endpoint.starts_with("https://")
            && !self.registry.endpoint.starts_with("http://")
        {
            return Err(ConfigError::Invalid(format!(
                "registry.endpoint is not an http(s) URL: {}",
                self.registry.endpoint
            )));
        }
        Ok(())
    }
}

/// Where and how long to wait for the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: VIES_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = ValidatorConfig::from_json("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
        assert!(config.check_country_match);
        assert!(config.check_registry);
        assert_eq!(config.max_length, 250);
        assert_eq!(config.registry.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn partial_override() {
        let config =
            ValidatorConfig::from_json(r#"{"check_registry": false, "registry": {"timeout_secs": 5}}"#)
                .unwrap();
        assert!(!config.check_registry);
        assert!(config.check_country_match);
        assert_eq!(config.registry.timeout_secs, 5);
        assert_eq!(config.registry.endpoint, VIES_URL);
    }

    #[test]
    fn vies_url_is_https() {
        assert!(VIES_URL.starts_with("https://"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ValidatorConfig::from_json(r#"{"registry": {"timeout_secs": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn rejects_bad_endpoint() {
        assert!(ValidatorConfig::from_json(r#"{"registry": {"endpoint": "ftp://x"}}"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ValidatorConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
