//! HTTP request handlers for the shift schedule converter API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        DefaultBodyLimit, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::conversion::{build_download_grid, convert, Cutoffs};
use crate::error::{ConverterError, ConverterResult};
use crate::models::{Grid, Period};
use crate::sheets::{decode_sheet, encode_grid};

use super::request::{ConvertQuery, DownloadRequest};
use super::response::{ApiError, ApiErrorResponse, HealthResponse};
use super::state::AppState;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.config().config().server.max_upload_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route("/convert", post(convert_handler))
        .route("/download", post(download_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /convert endpoint.
///
/// The body is the schedule workbook; the query names the month, cutoffs and
/// lookup sheets. Lookup failures are logged and degrade the result instead
/// of failing the request.
async fn convert_handler(
    State(state): State<AppState>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing conversion request");

    let query = match query {
        Ok(Query(query)) => query.resolve(state.config().config()),
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
            return json_error(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let inputs = Period::new(query.year, query.month).and_then(|period| {
        let cutoffs = Cutoffs::parse(&query.early_cutoff, &query.late_cutoff)?;
        Ok((period, cutoffs))
    });
    let (period, cutoffs) = match inputs {
        Ok(inputs) => inputs,
        Err(err) => return failure(correlation_id, err),
    };

    // An empty upload fails before any lookup is fetched.
    if body.is_empty() {
        return failure(correlation_id, ConverterError::ScheduleMissing);
    }
    let master = match decode_sheet(&body, &query.sheet) {
        Ok(grid) => grid,
        Err(err) => return failure(correlation_id, err),
    };

    let fetch_start = Instant::now();
    let (employee_lookup, task_code_lookup) = tokio::join!(
        fetch_lookup(&state, correlation_id, "employee", query.employee_url.as_deref()),
        fetch_lookup(&state, correlation_id, "task_code", query.task_code_url.as_deref()),
    );
    let fetch_duration = fetch_start.elapsed();

    let result = convert(
        Some(&master),
        employee_lookup.as_ref(),
        task_code_lookup.as_ref(),
        &state.config().config().task_codes,
        period,
        cutoffs,
    );

    match result {
        Ok(output) => {
            info!(
                correlation_id = %correlation_id,
                records = output.records.len(),
                fetch_ms = fetch_duration.as_millis() as u64,
                "Conversion completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(output),
            )
                .into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for POST /download endpoint.
///
/// Lays the posted records out under a fixed header and returns them as an
/// `.xlsx` attachment.
async fn download_handler(
    State(state): State<AppState>,
    payload: Result<Json<DownloadRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing download request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let err = ConverterError::MalformedOutputRequest {
                message: rejection.body_text(),
            };
            return failure(correlation_id, err);
        }
    };

    let title = &state.config().config().schedule.output_sheet_title;
    let grid = build_download_grid(&request.records);
    match encode_grid(&grid, title) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                records = request.records.len(),
                bytes = bytes.len(),
                "Download workbook produced"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}.xlsx\"", title),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Fetches one lookup sheet, logging and swallowing any failure.
async fn fetch_lookup(
    state: &AppState,
    correlation_id: Uuid,
    lookup: &'static str,
    url: Option<&str>,
) -> Option<Grid> {
    let Some(url) = url else {
        info!(correlation_id = %correlation_id, lookup, "No lookup URL configured");
        return None;
    };

    let result: ConverterResult<Grid> = state.fetcher().fetch_grid(url).await;
    match result {
        Ok(grid) => Some(grid),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                lookup,
                error = %err,
                "Lookup unavailable, continuing without it"
            );
            None
        }
    }
}

fn failure(correlation_id: Uuid, err: ConverterError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_error(api_error.status, api_error.error)
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
