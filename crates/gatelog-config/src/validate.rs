//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Accepted `logging.level` values.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Accepted `logging.format` values.
const LOG_FORMATS: [&str; 4] = ["pretty", "compact", "json", "full"];

/// Accepted `logging.target` values.
const LOG_TARGETS: [&str; 3] = ["stderr", "stdout", "file"];

/// Accepted `logging.rotation` values.
const LOG_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Validate a fully-merged configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_logging(config)?;
    validate_cli(config)?;
    Ok(())
}

fn one_of(field: &str, value: &str, allowed: &[&str], what: &str) -> ConfigResult<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        field: field.to_owned(),
        message: format!(
            "unsupported {what} '{value}'; expected one of: {}",
            allowed.join(", ")
        ),
    })
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let l = &config.logging;
    one_of("logging.level", &l.level, &LOG_LEVELS, "log level")?;
    one_of("logging.format", &l.format, &LOG_FORMATS, "log format")?;
    one_of("logging.target", &l.target, &LOG_TARGETS, "log target")?;
    one_of("logging.rotation", &l.rotation, &LOG_ROTATIONS, "log rotation")?;

    if l.target == "file" && l.directory.as_deref().is_none_or(str::is_empty) {
        return Err(ConfigError::ValidationError {
            field: "logging.directory".to_owned(),
            message: "file target requires a directory".to_owned(),
        });
    }

    Ok(())
}

fn validate_cli(config: &Config) -> ConfigResult<()> {
    if config.cli.prompt.contains('\n') {
        return Err(ConfigError::ValidationError {
            field: "cli.prompt".to_owned(),
            message: "prompt must be a single line".to_owned(),
        });
    }

    Ok(())
}
