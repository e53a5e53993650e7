#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Configuration for gatelog binaries.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gatelog_config::Config;
//!
//! let config = Config::load(Some(std::path::Path::new("gatelog.toml"))).unwrap();
//! println!("log level: {}", config.logging.level);
//! ```
//!
//! # Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Environment variables** (`GATELOG_LOG_LEVEL`, `GATELOG_LOG_FORMAT`)
//! 2. **Config file** given by the caller (usually `--config`)
//! 3. **Embedded defaults** (`defaults.toml` compiled into the binary)
//!
//! This crate depends on no other gatelog crate. Turning a
//! [`LoggingSection`] into a telemetry config happens in the binary.

/// Configuration error types.
pub mod error;
/// Configuration file loading and layering.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use types::*;

impl Config {
    /// Load defaults, overlay `path` if given, then apply environment
    /// overrides from the current process.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or
    /// the final configuration fails validation.
    pub fn load(path: Option<&std::path::Path>) -> ConfigResult<Self> {
        loader::load(path, &loader::collect_env_vars())
    }
}
