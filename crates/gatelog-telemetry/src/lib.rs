//! Gatelog Telemetry - logging for gatelog binaries.
//!
//! Wraps `tracing-subscriber` behind a serializable [`LogConfig`] so the
//! same settings can come from a config file or be built in code.
//!
//! # Example
//!
//! ```rust,no_run
//! use gatelog_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), gatelog_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("gatelog_proxy=debug");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{FileLogConfig, FileRotation, LogConfig, LogFormat, LogTarget, setup_logging};
