//! Request types for the shift schedule converter API.
//!
//! This module defines the query and JSON request structures for the
//! `/convert` and `/download` endpoints.

use serde::{Deserialize, Serialize};

use crate::config::ConverterConfig;
use crate::models::OutputRecord;

/// Query parameters of the `/convert` endpoint.
///
/// The request body carries the schedule workbook. Everything optional here
/// falls back to the server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertQuery {
    /// The year the schedule covers.
    pub year: i32,
    /// The month the schedule covers, 1-based.
    pub month: u32,
    /// Early cutoff override.
    #[serde(default)]
    pub early_cutoff: Option<String>,
    /// Late cutoff override.
    #[serde(default)]
    pub late_cutoff: Option<String>,
    /// Schedule sheet name override.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Employee lookup sharing URL override.
    #[serde(default)]
    pub employee_url: Option<String>,
    /// Task code lookup sharing URL override.
    #[serde(default)]
    pub task_code_url: Option<String>,
}

/// A [`ConvertQuery`] with configuration defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConvertQuery {
    /// The year the schedule covers.
    pub year: i32,
    /// The month the schedule covers.
    pub month: u32,
    /// Early cutoff string.
    pub early_cutoff: String,
    /// Late cutoff string.
    pub late_cutoff: String,
    /// Schedule sheet name.
    pub sheet: String,
    /// Employee lookup URL, if any.
    pub employee_url: Option<String>,
    /// Task code lookup URL, if any.
    pub task_code_url: Option<String>,
}

impl ConvertQuery {
    /// Fills every unset option from the configuration.
    ///
    /// Blank strings count as unset.
    pub fn resolve(self, config: &ConverterConfig) -> ResolvedConvertQuery {
        ResolvedConvertQuery {
            year: self.year,
            month: self.month,
            early_cutoff: non_blank(self.early_cutoff)
                .unwrap_or_else(|| config.schedule.early_cutoff.clone()),
            late_cutoff: non_blank(self.late_cutoff)
                .unwrap_or_else(|| config.schedule.late_cutoff.clone()),
            sheet: non_blank(self.sheet).unwrap_or_else(|| config.schedule.sheet_name.clone()),
            employee_url: non_blank(self.employee_url)
                .or_else(|| non_blank(config.lookups.employee_url.clone())),
            task_code_url: non_blank(self.task_code_url)
                .or_else(|| non_blank(config.lookups.task_code_url.clone())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Request body of the `/download` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// The records to lay out, in output order.
    pub records: Vec<OutputRecord>,
}
