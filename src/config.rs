//! Configuration module for the receipt processor
//!
//! This module handles loading and validating configuration from environment
//! variables.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Server configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct ServerConfig {
    /// Host to bind to
    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[envconfig(from = "PORT", default = "8000")]
    pub port: u16,

    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,

    /// Request timeout in seconds
    #[envconfig(from = "REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,

    /// Largest accepted request body in bytes
    #[envconfig(from = "MAX_BODY_BYTES", default = "65536")]
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Get the server address as a string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            environment: "development".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::config("Server port cannot be 0"));
        }

        if self.server.request_timeout_secs == 0 {
            return Err(Error::config("Request timeout must be at least 1 second"));
        }

        if self.server.max_body_bytes == 0 {
            return Err(Error::config("Maximum body size must be at least 1 byte"));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            server_address = %self.server.address(),
            environment = %self.server.environment,
            log_level = %self.server.log_level,
            request_timeout_secs = %self.server.request_timeout_secs,
            max_body_bytes = %self.server.max_body_bytes,
            "Server configuration"
        );
    }
}
