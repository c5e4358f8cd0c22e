//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SMART_GOALS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use smart_goals::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Pass score {}", config.analysis.validation_pass_score);
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Analysis and validation tunables
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SMART_GOALS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SMART_GOALS__ANALYSIS__MAX_RECOMMENDATIONS=3` -> `analysis.max_recommendations = 3`
    /// - `SMART_GOALS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SMART_GOALS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SMART_GOALS__ANALYSIS__MIN_DESCRIPTION_CHARS");
        env::remove_var("SMART_GOALS__ANALYSIS__MAX_RECOMMENDATIONS");
        env::remove_var("SMART_GOALS__ANALYSIS__VALIDATION_PASS_SCORE");
        env::remove_var("SMART_GOALS__LOGGING__LEVEL");
        env::remove_var("SMART_GOALS__LOGGING__JSON");
    }

    #[test]
    fn test_empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.min_description_chars, 3);
        assert_eq!(config.analysis.max_recommendations, 5);
        assert_eq!(config.analysis.validation_pass_score, 70);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMART_GOALS__ANALYSIS__MAX_RECOMMENDATIONS", "2");
        env::set_var("SMART_GOALS__ANALYSIS__VALIDATION_PASS_SCORE", "85");
        env::set_var("SMART_GOALS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.max_recommendations, 2);
        assert_eq!(config.analysis.validation_pass_score, 85);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SMART_GOALS__LOGGING__LEVEL", "loud");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_zero_min_chars() {
        let config = AppConfig {
            analysis: AnalysisConfig {
                min_description_chars: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMinDescriptionChars)
        );
    }
}
