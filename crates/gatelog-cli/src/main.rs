//! Gatelog CLI - drive an access-gated log from the terminal.
//!
//! The binary owns one in-memory store and one access proxy over it.
//! Commands arrive either interactively (`gatelog repl`) or from a script
//! file (`gatelog run <FILE>`), one per line.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gatelog_config::Config;
use gatelog_storage::MemoryLineStore;

mod command;
mod config_bridge;
mod repl;
mod session;

use repl::{ReadlineEvent, ReplEditor};
use session::Session;

/// Gatelog - append-only text log behind a login gate
#[derive(Parser)]
#[command(name = "gatelog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (forces debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "GATELOG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Repl,

    /// Execute commands from a file, one per line ('-' reads stdin)
    Run {
        /// Script file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let mut log_config = config_bridge::to_log_config(&config);
    if cli.verbose {
        log_config.level = "debug".to_owned();
    }
    if let Err(e) = gatelog_telemetry::setup_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let store = MemoryLineStore::new();
    let mut session = Session::new(&store);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&mut session, &config),
        Commands::Run { file } => run_file(&mut session, &file),
    }
}

fn run_repl(session: &mut Session<'_, MemoryLineStore>, config: &Config) -> Result<()> {
    let mut editor = ReplEditor::new(config.cli.prompt.clone(), config.cli.history_path())?;
    let mut stdout = std::io::stdout();

    loop {
        match editor.readline() {
            ReadlineEvent::Line(line) => {
                if !session.handle_line(&line, &mut stdout)? {
                    break;
                }
            },
            ReadlineEvent::Interrupted => {},
            ReadlineEvent::Eof => break,
        }
    }

    stdout.flush()?;
    Ok(())
}

fn run_file(session: &mut Session<'_, MemoryLineStore>, file: &Path) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    if file.as_os_str() == "-" {
        let stdin = std::io::stdin().lock();
        session.run_script(stdin, &mut stdout)?;
    } else {
        let handle = std::fs::File::open(file)
            .with_context(|| format!("failed to open script {}", file.display()))?;
        session.run_script(BufReader::new(handle), &mut stdout)?;
    }

    Ok(())
}
