//! Rustyline-based REPL editor with history and command completion.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::{
    CompletionType, Config, Context, EditMode, Editor, Helper, Highlighter, Validator,
};

use crate::command::COMMAND_WORDS;

/// Events returned by the REPL editor.
pub(crate) enum ReadlineEvent {
    /// A line of input.
    Line(String),
    /// The user pressed Ctrl+C.
    Interrupted,
    /// The user pressed Ctrl+D, or input failed.
    Eof,
}

/// Helper that completes the command word and hints from history.
#[derive(Helper, Validator, Highlighter)]
struct ReplHelper {
    hinter: HistoryHinter,
}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((0, complete_command(line, pos)))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

/// Command words matching the first word of `line`, while the cursor is
/// still inside it.
fn complete_command(line: &str, pos: usize) -> Vec<Pair> {
    let prefix = line.get(..pos).unwrap_or(line);
    if prefix.contains(char::is_whitespace) {
        return Vec::new();
    }

    COMMAND_WORDS
        .iter()
        .filter(|word| word.starts_with(prefix))
        .map(|word| Pair {
            display: (*word).to_string(),
            replacement: format!("{word} "),
        })
        .collect()
}

/// Interactive line editor.
pub(crate) struct ReplEditor {
    editor: Editor<ReplHelper, DefaultHistory>,
    prompt: String,
    history_path: Option<PathBuf>,
}

impl ReplEditor {
    /// Create an editor, loading history from `history_path` when given.
    pub(crate) fn new(prompt: String, history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .completion_type(CompletionType::List)
            .edit_mode(EditMode::Emacs)
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(ReplHelper {
            hinter: HistoryHinter::new(),
        }));

        if let Some(path) = &history_path {
            // Missing on first run.
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            prompt,
            history_path,
        })
    }

    /// Read one line of input.
    pub(crate) fn readline(&mut self) -> ReadlineEvent {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if let Some(path) = &self.history_path
                    && let Err(e) = self.editor.save_history(path)
                {
                    tracing::debug!(error = %e, path = %path.display(), "failed to save history");
                }
                ReadlineEvent::Line(line)
            },
            Err(ReadlineError::Interrupted) => ReadlineEvent::Interrupted,
            Err(ReadlineError::Eof | _) => ReadlineEvent::Eof,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> Vec<String> {
        complete_command(line, line.len())
            .into_iter()
            .map(|p| p.replacement)
            .collect()
    }

    #[test]
    fn test_completes_command_prefix() {
        assert_eq!(replacements("tr"), vec!["truncate "]);
        assert_eq!(replacements("lo"), vec!["login ", "logout "]);
    }

    #[test]
    fn test_empty_prefix_offers_everything() {
        assert_eq!(replacements("").len(), COMMAND_WORDS.len());
    }

    #[test]
    fn test_no_completion_after_first_word() {
        assert!(replacements("append li").is_empty());
    }
}
