//! Configuration types for the shift schedule converter.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section has
//! defaults, so a partial file only overrides what it names.

use serde::Deserialize;

use crate::conversion::{KeywordRule, default_keyword_rules};
use crate::models::FallbackCodes;

/// Top-level converter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Schedule workbook settings and default cutoffs.
    pub schedule: ScheduleSettings,
    /// External lookup sheet settings.
    pub lookups: LookupSettings,
    /// Task code discovery settings.
    pub task_codes: TaskCodeSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    pub bind_address: String,
    /// Largest accepted schedule upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

/// Schedule workbook settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Name of the sheet holding the master schedule.
    pub sheet_name: String,
    /// Title of the sheet in the downloaded workbook.
    pub output_sheet_title: String,
    /// Default early cutoff when a request does not supply one.
    pub early_cutoff: String,
    /// Default late cutoff when a request does not supply one.
    pub late_cutoff: String,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            sheet_name: "シフト表".to_string(),
            output_sheet_title: "records".to_string(),
            early_cutoff: "1050".to_string(),
            late_cutoff: "1150".to_string(),
        }
    }
}

/// External lookup sheet settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupSettings {
    /// Default sharing URL of the employee lookup sheet.
    pub employee_url: Option<String>,
    /// Default sharing URL of the task code lookup sheet.
    pub task_code_url: Option<String>,
    /// Absolute timeout for one lookup fetch, in seconds.
    pub timeout_secs: u64,
    /// Maximum redirect hops followed per fetch.
    pub max_redirects: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            employee_url: None,
            task_code_url: None,
            timeout_secs: 30,
            max_redirects: 5,
        }
    }
}

/// Suffixes appended to the marker to form fallback task codes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FallbackSuffixes {
    /// Suffix for the early shift.
    pub early: String,
    /// Suffix for the middle shift.
    pub middle: String,
    /// Suffix for the late shift.
    pub late: String,
}

impl Default for FallbackSuffixes {
    fn default() -> Self {
        Self {
            early: "早番".to_string(),
            middle: "中番".to_string(),
            late: "遅番".to_string(),
        }
    }
}

/// Task code discovery settings.
///
/// # Example
///
/// ```
/// use shift_converter::config::TaskCodeSettings;
/// use shift_converter::models::ShiftBucket;
///
/// let settings = TaskCodeSettings::default();
/// assert_eq!(settings.marker, "管理");
/// assert_eq!(settings.fallback_codes().code_for(ShiftBucket::Early), "管理早番");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaskCodeSettings {
    /// Substring that marks a shift task row in the lookup sheet.
    pub marker: String,
    /// Suffixes for the fallback codes.
    pub fallback_suffixes: FallbackSuffixes,
    /// Ordered keyword rules used to label marker rows.
    pub rules: Vec<KeywordRule>,
}

impl TaskCodeSettings {
    /// The fallback codes: marker followed by each bucket's suffix.
    pub fn fallback_codes(&self) -> FallbackCodes {
        FallbackCodes::from_marker(
            &self.marker,
            &self.fallback_suffixes.early,
            &self.fallback_suffixes.middle,
            &self.fallback_suffixes.late,
        )
    }
}

impl Default for TaskCodeSettings {
    fn default() -> Self {
        Self {
            marker: "管理".to_string(),
            fallback_suffixes: FallbackSuffixes::default(),
            rules: default_keyword_rules(),
        }
    }
}
