//! Config file loading and layering.
//!
//! 1. Parse embedded `defaults.toml` → base
//! 2. Deep-merge the caller's config file, if any
//! 3. Apply `GATELOG_LOG_*` environment overrides
//! 4. Deserialize → [`Config`]
//! 5. Validate

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Environment variables that override `logging.*` keys.
const ENV_OVERRIDES: [(&str, &str); 2] = [
    ("GATELOG_LOG_LEVEL", "level"),
    ("GATELOG_LOG_FORMAT", "format"),
];

/// Load the layered configuration.
///
/// `env_vars` is passed in rather than read here so callers (and tests)
/// control which environment is applied.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed, or the
/// merged configuration fails validation.
pub fn load(path: Option<&Path>, env_vars: &HashMap<String, String>) -> ConfigResult<Config> {
    let mut merged: toml::Value =
        toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
            path: "<embedded defaults>".to_owned(),
            source: e,
        })?;

    if let Some(path) = path {
        let overlay = read_file(path)?;
        deep_merge(&mut merged, &overlay);
        info!(path = %path.display(), "loaded config file");
    }

    let applied = apply_env_overrides(&mut merged, env_vars);
    if applied > 0 {
        debug!(count = applied, "applied environment overrides");
    }

    let config: Config =
        merged
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: "<merged config>".to_owned(),
                source: e,
            })?;

    validate::validate(&config)?;
    Ok(config)
}

/// Snapshot of the current process environment.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars().collect()
}

/// Read and parse one TOML file, enforcing the size limit.
fn read_file(path: &Path) -> ConfigResult<toml::Value> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    // Check size after reading to avoid TOCTOU between stat and read.
    if content.len() as u64 > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {} byte limit",
                content.len(),
                MAX_CONFIG_FILE_SIZE
            ),
        });
    }

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })
}

/// Recursively deep-merge `overlay` into `base`.
///
/// Tables merge per key; scalars and arrays from the overlay replace the
/// base value.
fn deep_merge(base: &mut toml::Value, overlay: &toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                if let Some(base_val) = base_table.get_mut(key) {
                    deep_merge(base_val, overlay_val);
                } else {
                    base_table.insert(key.clone(), overlay_val.clone());
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
        },
    }
}

/// Write non-empty `GATELOG_LOG_*` values into the `logging` table.
/// Returns how many overrides were applied.
fn apply_env_overrides(merged: &mut toml::Value, env_vars: &HashMap<String, String>) -> usize {
    let Some(root) = merged.as_table_mut() else {
        return 0;
    };
    let logging = root
        .entry("logging")
        .or_insert(toml::Value::Table(toml::map::Map::new()));
    let Some(logging) = logging.as_table_mut() else {
        return 0;
    };

    let overrides: Vec<(&str, &String)> = ENV_OVERRIDES
        .iter()
        .filter_map(|(var, key)| {
            env_vars
                .get(*var)
                .filter(|v| !v.is_empty())
                .map(|value| (*key, value))
        })
        .collect();

    for (key, value) in &overrides {
        logging.insert((*key).to_owned(), toml::Value::String((*value).clone()));
    }
    overrides.len()
}
