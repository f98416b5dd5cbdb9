// ---------------------------------------------------------------------------
// line_editor — rustyline wrapper for the chat shell
// ---------------------------------------------------------------------------
//
// Provides readline-style line editing for the session loop:
//   - Up/Down arrow: history cycling
//   - Ctrl-A / Ctrl-E: beginning / end of line
//   - Ctrl-K / Ctrl-U: kill to end / beginning of line
//   - Ctrl-W: delete word backward
//   - Ctrl-D: EOF
//   - Ctrl-C: interrupt (re-prompt)
//
// History is persisted to ~/.pythia_history (max 500 entries).

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor, EditMode};
use std::path::PathBuf;

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 500;

/// History file name (stored in user's home directory).
const HISTORY_FILE: &str = ".pythia_history";

/// Result of a single line read.
pub enum ReadResult {
    /// User entered a line of text.
    Line(String),
    /// User pressed Ctrl-C (interrupt).
    Interrupted,
    /// User pressed Ctrl-D or stdin closed (EOF).
    Eof,
}

/// Wrapper around rustyline's DefaultEditor configured for the chat shell.
pub struct LineEditor {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl LineEditor {
    /// Create a new line editor with Emacs-mode keybindings.
    ///
    /// Loads history from `~/.pythia_history` if it exists. A missing,
    /// corrupt, or unreadable history file means empty history, not a crash.
    pub fn new() -> Self {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .max_history_size(MAX_HISTORY)
            .expect("valid history size")
            .auto_add_history(false) // blank lines and "quit" stay out
            .build();

        let mut editor = DefaultEditor::with_config(config)
            .expect("failed to create line editor");

        let history_path = dirs_home().map(|home| home.join(HISTORY_FILE));

        // Load existing history (ignore errors — corrupt/missing is fine)
        if let Some(ref path) = history_path {
            let _ = editor.load_history(path);
        }

        LineEditor {
            editor,
            history_path,
        }
    }

    /// Read a line with the given prompt string.
    ///
    /// The line is NOT automatically remembered — call [`LineEditor::remember`]
    /// for lines that belong in history.
    pub fn read_line(&mut self, prompt: &str) -> ReadResult {
        match self.editor.readline(prompt) {
            Ok(line) => ReadResult::Line(line),
            Err(ReadlineError::Interrupted) => ReadResult::Interrupted,
            Err(ReadlineError::Eof) => ReadResult::Eof,
            Err(_) => ReadResult::Eof, // treat other errors as EOF
        }
    }

    /// Add a line to the in-memory history and persist to disk.
    ///
    /// Silently ignores errors (e.g. unwritable history file).
    pub fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
        if let Some(ref path) = self.history_path {
            let _ = self.editor.save_history(path);
        }
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    // Use $HOME on Unix (covers macOS + Linux)
    std::env::var_os("HOME").map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
