use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level gatelog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing.
    pub logging: LoggingSection,
    /// Interactive driver settings.
    pub cli: CliSection,
}

// ---------------------------------------------------------------------------
// LoggingSection
// ---------------------------------------------------------------------------

/// Logging and tracing configuration.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global log level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"` or `"full"`.
    pub format: String,
    /// Where log output goes: `"stderr"`, `"stdout"` or `"file"`.
    pub target: String,
    /// Log directory, required when `target` is `"file"`.
    pub directory: Option<String>,
    /// How often log files roll over: `"daily"`, `"hourly"` or `"never"`.
    /// Only read for the file target.
    pub rotation: String,
    /// Prefix each event with a timestamp.
    pub timestamps: bool,
    /// Include the source file and line of each event.
    pub file_info: bool,
    /// Emit events when spans open and close.
    pub span_events: bool,
    /// Colourise output. Always off for the file target.
    pub ansi: bool,
    /// Per-crate tracing directives (e.g. `["gatelog_proxy=debug"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: "compact".to_owned(),
            target: "stderr".to_owned(),
            directory: None,
            rotation: "daily".to_owned(),
            timestamps: true,
            file_info: false,
            span_events: false,
            ansi: true,
            directives: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// CliSection
// ---------------------------------------------------------------------------

/// Interactive driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSection {
    /// Prompt shown by the REPL.
    pub prompt: String,
    /// File to load and save REPL history. `None` keeps history in memory.
    /// A leading `~` stands for the user's home directory.
    pub history_file: Option<String>,
}

impl Default for CliSection {
    fn default() -> Self {
        Self {
            prompt: "gatelog> ".to_owned(),
            history_file: None,
        }
    }
}

impl CliSection {
    /// The history file with a leading `~` resolved against the user's home
    /// directory. Returns `None` when no history file is configured.
    #[must_use]
    pub fn history_path(&self) -> Option<PathBuf> {
        let raw = self.history_file.as_deref().filter(|s| !s.is_empty())?;
        let home = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf());
        Some(expand_home(raw, home.as_deref()))
    }
}

/// Replace a leading `~` or `~/` with `home`. Other paths, including
/// `~user` forms, are returned unchanged.
fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
