//! Application configuration management.
//!
//! Values come from the process environment, after an optional `.env` file
//! has been loaded. Every setting has a default, so an empty environment is
//! a valid configuration.
//!
//! # Environment Variables
//!
//! - `APP_HOST`: listen address (default `0.0.0.0`)
//! - `APP_PORT`: listen port (default `1337`)
//! - `SECRET_PASSWORD`: password unlocking `/secret.html` (default `test`)

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 1337;
const DEFAULT_SECRET_PASSWORD: &str = "test";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Password accepted by the auth policy.
    pub secret_password: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let app_port = match lookup("APP_PORT") {
            Some(value) => value.parse().map_err(|error: std::num::ParseIntError| ConfigError::InvalidValue {
                key: "APP_PORT".to_string(),
                message: error.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let secret_password = lookup("SECRET_PASSWORD").unwrap_or_else(|| DEFAULT_SECRET_PASSWORD.to_string());
        if secret_password.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "SECRET_PASSWORD".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            app_host,
            app_port,
            secret_password,
        })
    }

    /// The `host:port` the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            secret_password: DEFAULT_SECRET_PASSWORD.to_string(),
        }
    }
}
