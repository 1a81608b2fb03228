//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `PRISM` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use prism_profiler::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Profiles API at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod server;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence API the client talks to
    #[serde(default)]
    pub api: ApiConfig,

    /// Reference server (host, port, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `PRISM__*` variables:
    ///
    /// - `PRISM__API__BASE_URL=https://...` -> `api.base_url`
    /// - `PRISM__SERVER__PORT=8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRISM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.server.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("PRISM__API__BASE_URL");
        env::remove_var("PRISM__SERVER__PORT");
        env::remove_var("PRISM__SERVER__CORS_ORIGINS");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.port, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PRISM__API__BASE_URL", "https://prism.example.com");
        env::set_var("PRISM__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://prism.example.com");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_validate_reports_first_bad_section() {
        let config = AppConfig {
            api: ApiConfig::new("localhost:8000"),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidApiUrl));
    }
}
