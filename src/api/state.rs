//! Application state for the benefit API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CalculatorDefaults, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded service configuration. The rate table and body part
/// schedule are process-wide statics and need no handle here.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &CalculatorDefaults {
        self.config.calculator()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_wage() {
        let state = AppState::default();
        assert_eq!(state.defaults().default_weekly_wage.to_string(), "1000");
    }
}
