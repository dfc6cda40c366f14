//! HTTP request handlers for the benefit API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_request;
use crate::tables::{body_part_schedule, rate_table};

use super::request::{EstimateRequest, RatesQueryParams};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/jurisdictions", get(list_jurisdictions_handler))
        .route("/jurisdictions/stats", get(statistics_handler))
        .route("/jurisdictions/top", get(top_jurisdictions_handler))
        .route("/jurisdictions/:code", get(jurisdiction_handler))
        .route("/body-parts", get(list_body_parts_handler))
        .route("/body-parts/:id", get(body_part_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Sanitises the request, fills in configured defaults and returns the
/// calculation wrapped in a response envelope. Unknown codes never fail;
/// they fall back and surface as warnings in the audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_error(ApiErrorResponse::bad_request(error));
        }
    };

    let request = request.resolve(state.defaults());
    debug!(
        correlation_id = %correlation_id,
        jurisdiction = %request.jurisdiction_code,
        body_part = %request.body_part_id,
        wage = %request.average_weekly_wage,
        "Resolved calculation input"
    );

    let result = calculate_request(&request);
    for warning in &result.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}",
            warning.message
        );
    }
    info!(
        correlation_id = %correlation_id,
        jurisdiction = %result.jurisdiction_code,
        weekly_benefit = %result.weekly_benefit,
        cap_applied = result.cap_applied,
        settlement_low = %result.settlement_low,
        settlement_high = %result.settlement_high,
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculationResponse::new(correlation_id, result)),
    )
        .into_response()
}

/// Handler for GET /jurisdictions.
async fn list_jurisdictions_handler(
    params: Result<Query<RatesQueryParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(error = %rejection, "Query rejected");
            return json_error(ApiErrorResponse::bad_request(ApiError::new(
                "INVALID_QUERY",
                rejection.body_text(),
            )));
        }
    };

    match params.into_query() {
        Ok(query) => {
            let rows = rate_table().query(&query);
            debug!(
                sort = %query.sort_by,
                rows = rows.len(),
                "Listing jurisdictions"
            );
            Json(rows).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Invalid jurisdiction query");
            json_error(err.into())
        }
    }
}

/// Handler for GET /jurisdictions/stats.
async fn statistics_handler() -> Response {
    Json(rate_table().statistics()).into_response()
}

/// Handler for GET /jurisdictions/top.
async fn top_jurisdictions_handler() -> Response {
    Json(rate_table().top_jurisdictions()).into_response()
}

/// Handler for GET /jurisdictions/:code.
///
/// Unlike `/calculate` this is a strict lookup: unknown codes are a 404.
async fn jurisdiction_handler(Path(code): Path<String>) -> Response {
    match rate_table().require(&code) {
        Ok(rate) => Json(rate).into_response(),
        Err(err) => {
            warn!(code = %code, "Jurisdiction not found");
            json_error(err.into())
        }
    }
}

/// Handler for GET /body-parts.
async fn list_body_parts_handler() -> Response {
    Json(body_part_schedule().list_all()).into_response()
}

/// Handler for GET /body-parts/:id.
async fn body_part_handler(Path(id): Path<String>) -> Response {
    match body_part_schedule().require(&id) {
        Ok(schedule) => Json(schedule).into_response(),
        Err(err) => {
            warn!(id = %id, "Body part not found");
            json_error(err.into())
        }
    }
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
