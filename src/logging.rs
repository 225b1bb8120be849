//! Logging module for the receipt processor
//!
//! This module configures structured logging using the tracing crate,
//! providing JSON output for production and pretty formatting for development.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::{
    config::ServerConfig,
    error::{Error, Result},
};

/// Filter directives used when `RUST_LOG` is not set
pub fn default_filter(log_level: &str) -> String {
    format!("receipt_processor={},tower_http=debug", log_level)
}

/// Initialize the logging system
///
/// Configures tracing based on the environment:
/// - Production: JSON formatted logs
/// - Anything else: Pretty formatted logs, colored in development
pub fn init_tracing(config: &ServerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    if config.is_production() {
        let formatting_layer = fmt::layer()
            .json()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true);

        Registry::default()
            .with(env_filter)
            .with(formatting_layer)
            .try_init()
            .map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))?;
    } else {
        let formatting_layer = fmt::layer()
            .pretty()
            .with_ansi(config.is_development())
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE);

        Registry::default()
            .with(env_filter)
            .with(formatting_layer)
            .try_init()
            .map_err(|e| Error::internal(format!("Failed to initialize tracing: {}", e)))?;
    }

    tracing::info!(
        environment = %config.environment,
        log_level = %config.log_level,
        json = config.is_production(),
        "Logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("debug"), "receipt_processor=debug,tower_http=debug");
    }

    #[test]
    fn test_second_init_fails() {
        // Only one global subscriber may be installed per process
        let config = ServerConfig {
            environment: "test".to_string(),
            ..Default::default()
        };
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
