//! Response types for the shift schedule converter API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ConverterError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an input missing error response.
    pub fn input_missing(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::with_details("INPUT_MISSING", message, details)
    }

    /// Creates a malformed output request error response.
    pub fn malformed_output_request(message: impl Into<String>) -> Self {
        Self::with_details(
            "MALFORMED_OUTPUT_REQUEST",
            message,
            "Expected a JSON body of the form {\"records\": [...]}",
        )
    }
}

/// Body of the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ConverterError> for ApiErrorResponse {
    fn from(error: ConverterError) -> Self {
        let message = error.to_string();
        match error {
            ConverterError::ConfigNotFound { .. }
            | ConverterError::ConfigParseError { .. }
            | ConverterError::HttpClientError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            ConverterError::ScheduleMissing => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::input_missing(
                    message,
                    "Upload the schedule workbook as the request body",
                ),
            },
            ConverterError::SheetNotFound { sheet } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::input_missing(
                    message,
                    format!("The workbook has no sheet named '{}'", sheet),
                ),
            },
            ConverterError::WorkbookUnreadable { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::input_missing(
                    message,
                    "The request body is not a readable .xlsx workbook",
                ),
            },
            ConverterError::InvalidCutoff { .. } | ConverterError::InvalidPeriod { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(message),
                }
            }
            // `/convert` degrades on lookup failures instead of returning
            // them; this arm keeps the mapping total for other callers.
            ConverterError::InvalidLookupUrl { .. }
            | ConverterError::LookupFetchFailed { .. }
            | ConverterError::MalformedCsv { .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::new("LOOKUP_UNAVAILABLE", message),
            },
            ConverterError::MalformedOutputRequest { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_output_request(message),
            },
            ConverterError::WorkbookWriteFailed { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "OUTPUT_ERROR",
                    "Failed to produce the download workbook",
                    message,
                ),
            },
        }
    }
}
