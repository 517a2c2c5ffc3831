//! Logging subscriber setup.
//!
//! # Example
//!
//! ```ignore
//! use order_ticket::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default())?;
//! ```
//!
//! `RUST_LOG`, when set, overrides the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },
    /// The configured format is not supported.
    #[error("unsupported log format: {0}")]
    UnknownFormat(String),
    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Install a global fmt subscriber according to `config`.
///
/// # Errors
///
/// Returns `LoggingError` if the level or format is invalid, or if a global
/// subscriber was already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match config.format.as_str() {
        "json" => builder.json().try_init(),
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        other => return Err(LoggingError::UnknownFormat(other.to_string())),
    };

    result.map_err(|e| LoggingError::SubscriberError(e.to_string()))?;
    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}

fn level_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidFilter {
        filter: level.to_string(),
        reason: e.to_string(),
    })
}
