//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the converter
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ConverterError, ConverterResult};

use super::types::ConverterConfig;

/// Loads and provides access to converter configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   bind_address: 127.0.0.1:3000
/// schedule:
///   sheet_name: シフト表
///   early_cutoff: "1050"
///   late_cutoff: "1150"
/// lookups:
///   employee_url: https://docs.google.com/spreadsheets/d/<id>/edit#gid=0
///   timeout_secs: 30
///   max_redirects: 5
/// task_codes:
///   marker: 管理
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_converter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/converter.yaml").unwrap();
/// println!("Schedule sheet: {}", loader.config().schedule.sheet_name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ConverterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or mistyped fields
    pub fn load<P: AsRef<Path>>(path: P) -> ConverterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConverterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            ConverterError::ConfigParseError { message, .. } => ConverterError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> ConverterResult<Self> {
        let config: ConverterConfig =
            serde_yaml::from_str(content).map_err(|e| ConverterError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftBucket;

    fn config_path() -> &'static str {
        "./config/converter.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().config().clone();
        assert_eq!(config.schedule.sheet_name, "シフト表");
        assert_eq!(config.schedule.early_cutoff, "1050");
        assert_eq!(config.schedule.late_cutoff, "1150");
        assert_eq!(config.task_codes.marker, "管理");
        assert_eq!(config.task_codes.rules.len(), 3);
        assert_eq!(config.lookups.max_redirects, 5);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/converter.yaml") {
            Err(ConverterError::ConfigNotFound { path }) => {
                assert!(path.contains("converter.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let loader = ConfigLoader::from_yaml_str("schedule:\n  sheet_name: Roster\n").unwrap();
        let config = loader.config();

        assert_eq!(config.schedule.sheet_name, "Roster");
        assert_eq!(config.schedule.early_cutoff, "1050");
        assert_eq!(config.server.bind_address, "127.0.0.1:3000");
        assert_eq!(config.lookups.timeout_secs, 30);
        assert_eq!(config.task_codes.fallback_codes().late, "管理遅番");
    }

    #[test]
    fn test_custom_keyword_rules() {
        let yaml = r#"
task_codes:
  marker: CTRL
  fallback_suffixes:
    early: "-AM"
    middle: "-MID"
    late: "-PM"
  rules:
    - bucket: late
      keywords: [spät]
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        let settings = &loader.config().task_codes;

        assert_eq!(settings.rules.len(), 1);
        assert_eq!(settings.rules[0].bucket, ShiftBucket::Late);
        assert_eq!(settings.fallback_codes().middle, "CTRL-MID");
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("lookups:\n  timeout_secs: soon\n");
        assert!(matches!(
            result,
            Err(ConverterError::ConfigParseError { .. })
        ));
    }
}
