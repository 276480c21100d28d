//! Application state for the shift schedule converter API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::error::ConverterResult;
use crate::sheets::LookupFetcher;

/// Shared application state.
///
/// Holds the loaded configuration and the HTTP client used for lookup
/// sheets. Both are read-only, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    /// The loaded converter configuration.
    config: Arc<ConfigLoader>,
    /// Client for lookup sheet fetches.
    fetcher: LookupFetcher,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> ConverterResult<Self> {
        let fetcher = LookupFetcher::new(&config.config().lookups)?;
        Ok(Self {
            config: Arc::new(config),
            fetcher,
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the lookup sheet fetcher.
    pub fn fetcher(&self) -> &LookupFetcher {
        &self.fetcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_default_config() {
        let state = AppState::new(ConfigLoader::default()).unwrap();
        assert_eq!(state.config().config().schedule.sheet_name, "シフト表");
    }
}
