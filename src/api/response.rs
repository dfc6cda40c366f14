//! Response types for the benefit API.
//!
//! This module defines the calculation envelope, the display strings shown
//! alongside a result, and the error response structures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::format::{format_currency, format_percent};
use crate::models::CalculationResult;

/// Formatted values for presenting a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValues {
    /// Weekly benefit, e.g. "$800".
    pub weekly_benefit: String,
    /// Monthly benefit, e.g. "$3,200".
    pub monthly_benefit: String,
    /// Settlement range, e.g. "$252,000 - $468,000".
    pub settlement_range: String,
    /// Replacement rate as a percentage, e.g. "67%".
    pub replacement_rate: String,
    /// Jurisdiction maximum, e.g. "$1,676".
    pub state_max: String,
    /// Wage the calculation used.
    pub average_weekly_wage: String,
}

impl From<&CalculationResult> for DisplayValues {
    fn from(result: &CalculationResult) -> Self {
        Self {
            weekly_benefit: format_currency(result.weekly_benefit),
            monthly_benefit: format_currency(result.monthly_benefit()),
            settlement_range: format!(
                "{} - {}",
                format_currency(result.settlement_low),
                format_currency(result.settlement_high)
            ),
            replacement_rate: format_percent(result.replacement_rate),
            state_max: format_currency(result.state_max),
            average_weekly_wage: format_currency(result.average_weekly_wage),
        }
    }
}

/// Envelope returned by `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique id for this calculation, also used as the log correlation id.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the result.
    pub engine_version: String,
    /// The calculation result.
    pub result: CalculationResult,
    /// Formatted values for display.
    pub display: DisplayValues,
}

impl CalculationResponse {
    /// Wraps a result in a response envelope.
    pub fn new(calculation_id: Uuid, result: CalculationResult) -> Self {
        let display = DisplayValues::from(&result);
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
            display,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::JurisdictionNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "JURISDICTION_NOT_FOUND",
                    message,
                    format!("No rate table entry exists for '{}'", code),
                ),
            },
            EngineError::BodyPartNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "BODY_PART_NOT_FOUND",
                    message,
                    format!("No schedule entry exists for '{}'", id),
                ),
            },
            EngineError::InvalidQuery { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_QUERY", message))
            }
        }
    }
}
