//! Conversion from the loaded config into telemetry settings.

use gatelog_config::Config;
use gatelog_telemetry::{FileRotation, LogConfig, LogFormat, LogTarget};

/// Build a [`LogConfig`] from the `[logging]` section.
///
/// Unknown strings cannot reach here after validation; they fall back to
/// the telemetry defaults anyway.
pub(crate) fn to_log_config(config: &Config) -> LogConfig {
    let logging = &config.logging;

    let format = match logging.format.as_str() {
        "pretty" => LogFormat::Pretty,
        "json" => LogFormat::Json,
        "full" => LogFormat::Full,
        _ => LogFormat::Compact,
    };

    let mut log_config = LogConfig::new(logging.level.clone()).with_format(format);

    log_config = match (logging.target.as_str(), logging.directory.as_deref()) {
        ("file", Some(dir)) => log_config.with_file_logging(dir, "gatelog"),
        ("stdout", _) => log_config.with_target(LogTarget::Stdout),
        _ => log_config.with_target(LogTarget::Stderr),
    };

    log_config = log_config.with_rotation(match logging.rotation.as_str() {
        "hourly" => FileRotation::Hourly,
        "never" => FileRotation::Never,
        _ => FileRotation::Daily,
    });

    if !logging.timestamps {
        log_config = log_config.without_timestamps();
    }
    if logging.file_info {
        log_config = log_config.with_file_info();
    }
    if logging.span_events {
        log_config = log_config.with_span_events();
    }
    if !logging.ansi {
        log_config = log_config.without_ansi();
    }

    for directive in &logging.directives {
        log_config = log_config.with_directive(directive.clone());
    }

    log_config
}
