//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and validating it against the static
//! rate table and body part schedule.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::tables::{body_part_schedule, rate_table};

use super::types::{CalculatorDefaults, ServerSettings, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use workers_comp_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), workers_comp_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A default names an unknown jurisdiction or body part, or the
    ///   default wage is not positive (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Loads configuration from an in-memory YAML document.
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: ServiceConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    fn parse(yaml: &str, path: &str) -> EngineResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.config.server
    }

    /// Returns the request defaults.
    pub fn calculator(&self) -> &CalculatorDefaults {
        &self.config.calculator
    }
}

fn validate(config: &ServiceConfig) -> EngineResult<()> {
    if config.server.bind_address.trim().is_empty() {
        return Err(EngineError::InvalidConfig {
            field: "server.bind_address".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let defaults = &config.calculator;
    rate_table()
        .require(&defaults.default_jurisdiction)
        .map_err(|e| EngineError::InvalidConfig {
            field: "calculator.default_jurisdiction".to_string(),
            message: e.to_string(),
        })?;

    body_part_schedule()
        .require(&defaults.default_body_part)
        .map_err(|e| EngineError::InvalidConfig {
            field: "calculator.default_body_part".to_string(),
            message: e.to_string(),
        })?;

    if defaults.default_weekly_wage <= Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: "calculator.default_weekly_wage".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/server.yaml"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.server().bind_address, "127.0.0.1:3000");
        assert_eq!(loader.calculator().default_jurisdiction, "CA");
        assert_eq!(loader.calculator().default_body_part, "back");
        assert_eq!(loader.calculator().default_weekly_wage, Decimal::from(1000));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/server.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("server.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        match ConfigLoader::from_yaml_str("server: [unclosed") {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "<inline>"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_wage_given_as_string_is_accepted() {
        let yaml = r#"
calculator:
  default_jurisdiction: TX
  default_body_part: knee
  default_weekly_wage: "850.50"
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();

        assert_eq!(loader.calculator().default_jurisdiction, "TX");
        assert_eq!(loader.calculator().default_weekly_wage, Decimal::new(85050, 2));
        assert_eq!(loader.server().bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_unknown_default_jurisdiction_is_invalid() {
        let yaml = r#"
calculator:
  default_jurisdiction: ZZ
  default_body_part: back
  default_weekly_wage: 1000
"#;
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "calculator.default_jurisdiction");
                assert!(message.contains("ZZ"));
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_default_body_part_is_invalid() {
        let yaml = r#"
calculator:
  default_jurisdiction: CA
  default_body_part: elbow
  default_weekly_wage: 1000
"#;
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "calculator.default_body_part");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_default_wage_is_invalid() {
        let yaml = r#"
calculator:
  default_jurisdiction: CA
  default_body_part: back
  default_weekly_wage: 0
"#;
        match ConfigLoader::from_yaml_str(yaml) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "calculator.default_weekly_wage");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bind_address_is_invalid() {
        let mut config = ServiceConfig::default();
        config.server.bind_address = "  ".to_string();

        match ConfigLoader::from_config(config) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "server.bind_address");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_is_valid() {
        let loader = ConfigLoader::default();
        assert!(ConfigLoader::from_config(loader.config().clone()).is_ok());
    }
}
