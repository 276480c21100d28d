//! HTTP API module for the shift schedule converter.
//!
//! This module provides the REST endpoints for converting an uploaded
//! schedule workbook into records and for downloading records as a workbook.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConvertQuery, DownloadRequest, ResolvedConvertQuery};
pub use response::{ApiError, HealthResponse};
pub use state::AppState;
