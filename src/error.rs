//! Error types for the workers compensation engine.
//!
//! The benefit calculator itself never fails: unknown identifiers fall back
//! to defaults. These errors cover the layers around it, such as loading
//! configuration, strict table lookups and HTTP query parsing.

use thiserror::Error;

/// The main error type for the workers compensation engine.
///
/// # Example
///
/// ```
/// use workers_comp_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/server.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/server.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, in dotted notation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Jurisdiction code is not in the rate table.
    #[error("Jurisdiction not found: {code}")]
    JurisdictionNotFound {
        /// The jurisdiction code that was not found.
        code: String,
    },

    /// Body part id is not in the schedule of loss.
    #[error("Body part not found: {id}")]
    BodyPartNotFound {
        /// The body part id that was not found.
        id: String,
    },

    /// A query parameter held an unsupported value.
    #[error("Invalid query parameter '{parameter}': {message}")]
    InvalidQuery {
        /// The name of the query parameter.
        parameter: String,
        /// A description of the accepted values.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
