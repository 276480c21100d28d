//! Configuration loading and management for the shift schedule converter.
//!
//! This module loads the converter configuration from a YAML file: server
//! bind address, schedule sheet and cutoff defaults, lookup sheet URLs and
//! fetch limits, and the task code marker and keyword rules.
//!
//! # Example
//!
//! ```no_run
//! use shift_converter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/converter.yaml").unwrap();
//! println!("Marker: {}", config.config().task_codes.marker);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ConverterConfig, FallbackSuffixes, LookupSettings, ScheduleSettings, ServerSettings,
    TaskCodeSettings,
};
