//! Command-line parsing for the driver language.

use thiserror::Error;

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// `login <user> <pass>`; missing values are empty strings.
    Login { username: String, password: String },
    /// `logout`
    Logout,
    /// `append <text...>`; the text is kept verbatim and may be empty.
    Append(String),
    /// `list`
    List,
    /// `truncate`
    Truncate,
    /// `status`
    Status,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    /// The command takes fewer arguments than were given.
    #[error("'{command}' takes {expected}, got '{extra}'")]
    UnexpectedArguments {
        /// Command name.
        command: &'static str,
        /// What the command accepts.
        expected: &'static str,
        /// The surplus input.
        extra: String,
    },
}

/// Help text listing every command.
pub(crate) const HELP: &str = "\
commands:
  login <user> <pass>   authenticate the session (any credentials are accepted)
  logout                end the authenticated session
  append <text...>      append the rest of the line to the log
  list                  print every line in the log
  truncate              remove every line from the log
  status                show whether the session is authenticated
  help                  show this help
  quit | exit           leave";

/// Command words, for completion.
pub(crate) const COMMAND_WORDS: &[&str] = &[
    "login", "logout", "append", "list", "truncate", "status", "help", "quit", "exit",
];

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));

        let command = match word {
            "append" => Self::Append(rest.to_owned()),
            "login" => {
                let mut args = rest.split_whitespace();
                let username = args.next().unwrap_or_default().to_owned();
                let password = args.next().unwrap_or_default().to_owned();
                let extra: Vec<&str> = args.collect();
                if !extra.is_empty() {
                    return Err(CommandError::UnexpectedArguments {
                        command: "login",
                        expected: "a username and a password",
                        extra: extra.join(" "),
                    });
                }
                Self::Login { username, password }
            },
            "logout" => no_args("logout", rest, Self::Logout)?,
            "list" => no_args("list", rest, Self::List)?,
            "truncate" => no_args("truncate", rest, Self::Truncate)?,
            "status" => no_args("status", rest, Self::Status)?,
            "help" => no_args("help", rest, Self::Help)?,
            "quit" | "exit" => no_args("quit", rest, Self::Quit)?,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };

        Ok(Some(command))
    }
}

fn no_args(command: &'static str, rest: &str, parsed: Command) -> Result<Command, CommandError> {
    let extra = rest.trim();
    if extra.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::UnexpectedArguments {
            command,
            expected: "no arguments",
            extra: extra.to_owned(),
        })
    }
}
