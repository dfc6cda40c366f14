//! Configuration types for the benefit service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tables::DEFAULT_JURISDICTION;

/// Network settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address to listen on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Defaults applied at the request boundary before calling the calculator.
///
/// The calculator never sees missing input; these values replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    /// Jurisdiction used when a request names none.
    pub default_jurisdiction: String,
    /// Body part used when a request names none.
    pub default_body_part: String,
    /// Wage substituted when the sanitised wage is zero.
    pub default_weekly_wage: Decimal,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            default_jurisdiction: DEFAULT_JURISDICTION.to_string(),
            default_body_part: "back".to_string(),
            default_weekly_wage: Decimal::from(1000),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Request defaults.
    #[serde(default)]
    pub calculator: CalculatorDefaults,
}
