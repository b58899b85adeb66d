//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `RISK_QUIZ` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use risk_quiz::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod oracle;
mod quiz;
mod server;

pub use error::{ConfigError, ValidationError};
pub use oracle::OracleConfig;
pub use quiz::QuizConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every tunable named by the product lives here: question TTL, session TTL,
/// max questions per session and the oracle temperature, none hard-coded.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Question oracle configuration (endpoint, model, temperature)
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Quiz lifecycle configuration (TTLs, question budget)
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `RISK_QUIZ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RISK_QUIZ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RISK_QUIZ__ORACLE__ENDPOINT=...` -> `oracle.endpoint = ...`
    /// - `RISK_QUIZ__QUIZ__MAX_QUESTIONS=20` -> `quiz.max_questions = 20`
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
                    .prefix("RISK_QUIZ")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.oracle.validate()?;
        self.quiz.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
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
        env::remove_var("RISK_QUIZ__SERVER__PORT");
        env::remove_var("RISK_QUIZ__SERVER__ENVIRONMENT");
        env::remove_var("RISK_QUIZ__ORACLE__MODEL");
        env::remove_var("RISK_QUIZ__QUIZ__MAX_QUESTIONS");
    }

    #[test]
    fn loads_with_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.quiz.max_questions, 20);
        assert_eq!(config.oracle.temperature, 0.4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RISK_QUIZ__SERVER__PORT", "3000");
        env::set_var("RISK_QUIZ__ORACLE__MODEL", "llama3:70b");
        env::set_var("RISK_QUIZ__QUIZ__MAX_QUESTIONS", "5");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.oracle.model, "llama3:70b");
        assert_eq!(config.quiz.max_questions, 5);
    }

    #[test]
    fn is_production_reflects_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RISK_QUIZ__SERVER__ENVIRONMENT", "production");
        let config = AppConfig::load().unwrap();
        clear_env();

        assert!(config.is_production());
    }
}
