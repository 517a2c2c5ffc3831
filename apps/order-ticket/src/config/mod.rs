//! Configuration module for the order ticket.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for take-profit rules, display and logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_ticket::config::load_config;
//! use order_ticket::OrderTargetStore;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! let store = OrderTargetStore::with_rules(config.take_profit.to_rules());
//! ```

mod display;
mod observability;
mod take_profit;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use display::DisplayConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use take_profit::TakeProfitConfig;

/// Log formats accepted by [`crate::observability::init_logging`].
pub const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];

/// Upper bound on `display.decimal_scale`.
const MAX_DECIMAL_SCALE: u32 = 10;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Take-profit rules.
    #[serde(default)]
    pub take_profit: TakeProfitConfig,
    /// Display settings for ticket snapshots.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    let config = load_config_from_string(&contents)?;
    tracing::debug!(path, "Configuration loaded");
    Ok(config)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let tp = &config.take_profit;

    if tp.max_targets == 0 {
        return Err(ConfigError::ValidationError(
            "take_profit.max_targets must be at least 1".to_string(),
        ));
    }

    if tp.profit_step <= 0.0 {
        return Err(ConfigError::ValidationError(
            "take_profit.profit_step must be positive".to_string(),
        ));
    }

    if !(tp.first_amount_percent > 0.0 && tp.first_amount_percent <= 1.0) {
        return Err(ConfigError::ValidationError(
            "take_profit.first_amount_percent must be in (0.0, 1.0]".to_string(),
        ));
    }

    if !(tp.default_amount_percent > 0.0 && tp.default_amount_percent <= 1.0) {
        return Err(ConfigError::ValidationError(
            "take_profit.default_amount_percent must be in (0.0, 1.0]".to_string(),
        ));
    }

    if tp.min_profit_percent < 0.0 {
        return Err(ConfigError::ValidationError(
            "take_profit.min_profit_percent must not be negative".to_string(),
        ));
    }

    if tp.max_profit_sum <= 0.0 {
        return Err(ConfigError::ValidationError(
            "take_profit.max_profit_sum must be positive".to_string(),
        ));
    }

    if config.display.quote_currency.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "display.quote_currency must not be empty".to_string(),
        ));
    }

    if config.display.decimal_scale > MAX_DECIMAL_SCALE {
        return Err(ConfigError::ValidationError(format!(
            "display.decimal_scale must be at most {MAX_DECIMAL_SCALE}"
        )));
    }

    let format = config.observability.logging.format.as_str();
    if !LOG_FORMATS.contains(&format) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {LOG_FORMATS:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.take_profit.max_targets, 5);
        assert!((config.take_profit.profit_step - 0.02).abs() < f64::EPSILON);
        assert_eq!(config.display.quote_currency, "USDT");
        assert_eq!(config.display.decimal_scale, 2);
        assert_eq!(config.observability.logging.level, "info");
        assert_eq!(config.observability.logging.format, "json");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.take_profit.max_targets, 5);
        assert!((config.take_profit.max_profit_sum - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
take_profit:
  max_targets: 3
  profit_step: 0.05
  first_amount_percent: 1.0
  default_amount_percent: 0.25
  min_profit_percent: 0.02
  max_profit_sum: 2.0

display:
  quote_currency: "USD"
  decimal_scale: 4

observability:
  logging:
    level: "debug"
    format: "pretty"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.take_profit.max_targets, 3);
        assert!((config.take_profit.profit_step - 0.05).abs() < f64::EPSILON);
        assert!((config.take_profit.default_amount_percent - 0.25).abs() < f64::EPSILON);
        assert!((config.take_profit.min_profit_percent - 0.02).abs() < f64::EPSILON);
        assert!((config.take_profit.max_profit_sum - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.display.quote_currency, "USD");
        assert_eq!(config.display.decimal_scale, 4);
        assert_eq!(config.observability.logging.level, "debug");
        assert_eq!(config.observability.logging.format, "pretty");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "take_profit:\n  max_targets: 4").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.take_profit.max_targets, 4);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some("/nonexistent/order-ticket/config.yaml"));
        let Err(err) = result else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("/nonexistent/order-ticket/config.yaml"));
    }

    #[test]
    fn test_parse_error() {
        let result = load_config_from_string("take_profit: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "quote_currency: ${ORDER_TICKET_CONFIG_TEST_NONEXISTENT_VAR:-USDT}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "quote_currency: USDT");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "level: ${ORDER_TICKET_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);
        assert_eq!(result, "level: ");
    }

    #[test]
    fn test_validation_zero_max_targets() {
        let yaml = r"
take_profit:
  max_targets: 0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero max_targets");
        };
        assert!(err.to_string().contains("max_targets"));
    }

    #[test]
    fn test_validation_amount_percent_out_of_range() {
        let yaml = r"
take_profit:
  default_amount_percent: 1.5
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for default_amount_percent");
        };
        assert!(err.to_string().contains("default_amount_percent"));
    }

    #[test]
    fn test_validation_non_positive_profit_step() {
        let yaml = r"
take_profit:
  profit_step: 0.0
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for profit_step");
        };
        assert!(err.to_string().contains("profit_step"));
    }

    #[test]
    fn test_validation_empty_currency() {
        let yaml = r#"
display:
  quote_currency: ""
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty currency");
        };
        assert!(err.to_string().contains("quote_currency"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for log format");
        };
        assert!(err.to_string().contains("format"));
    }
}
