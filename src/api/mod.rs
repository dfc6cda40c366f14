//! HTTP API module for the benefit engine.
//!
//! This module provides the REST endpoints for benefit estimates and for
//! browsing the jurisdiction rate table and body part schedule.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateRequest, RatesQueryParams, WageInput};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, DisplayValues};
pub use state::AppState;
