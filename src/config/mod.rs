//! Configuration module for the benefit service.
//!
//! This module provides functionality for loading the service configuration
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use workers_comp_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/server.yaml").unwrap();
//! let defaults = loader.calculator();
//! println!("Default wage: ${}", defaults.default_weekly_wage);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorDefaults, ServerSettings, ServiceConfig};
