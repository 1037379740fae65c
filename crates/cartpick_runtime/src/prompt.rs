//! Manual picks confirmed at the terminal.

use cartpick_foundation::{Error, ErrorKind, Query, Result};
use cartpick_strategy::ManualResume;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

/// Waits for the user to press Enter after picking by hand.
///
/// Ctrl+C and Ctrl+D also resume. A terminal read error is logged and
/// treated as a resume, since a manual pick cannot fail.
pub struct TerminalResume {
    editor: Editor<(), DefaultHistory>,
}

impl TerminalResume {
    /// Opens the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder().auto_add_history(false).build();
        let editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        Ok(Self { editor })
    }
}

impl ManualResume for TerminalResume {
    fn wait_for_resume(&mut self, query: &Query) {
        let prompt = format!(
            "Choose the product for '{query}' manually, then press Enter to continue "
        );
        match self.editor.readline(&prompt) {
            Ok(_) => {}
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                tracing::debug!(query = %query, "manual pick ended without Enter");
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "terminal read failed; resuming");
            }
        }
    }
}
