//! HTTP request handlers for the bonus allocation API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_bonuses;
use crate::models::{Employee, Settings};

use super::request::AllocationRequest;
use super::response::ApiError;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/allocate", post(allocate_handler))
        .with_state(state)
}

/// Handler for POST /allocate endpoint.
///
/// Accepts an allocation request and returns the calculated per-region
/// bonus result. The calculation itself cannot fail; only request
/// parsing can.
async fn allocate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing allocation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types, falling back to the loaded
    // defaults for anything the request omits
    let settings: Settings = match request.settings {
        Some(settings) => settings.into(),
        None => state.defaults().settings().clone(),
    };
    let employees: Vec<Employee> = match request.employees {
        Some(list) => list.into_iter().map(Into::into).collect(),
        None => state.defaults().employees().to_vec(),
    };
    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let start_time = Instant::now();
    let result = calculate_bonuses(&employees, &settings, reference_date);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_count = employees.len(),
        reference_date = %reference_date,
        sj_payout = result.regions.sj.total_payout,
        jy_payout = result.regions.jy.total_payout,
        duration_us = duration.as_micros(),
        "Allocation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
