//! Yes/no questions.

use super::console::Terminal;
use super::error::SessionError;
use std::io::Write;
use tracing::instrument;

/// Asks a yes/no question, showing the default answer in upper case.
///
/// An answer starting with `y` or `n` (any case) decides; anything else,
/// including an empty line, takes `default`.
///
/// # Errors
///
/// Returns an input-closed [`SessionError`] at end-of-file and an I/O error
/// if the terminal fails.
#[instrument(skip(terminal))]
pub fn prompt_bool(
    terminal: &mut dyn Terminal,
    question: &str,
    default: bool,
) -> Result<bool, SessionError> {
    let (yes, no) = if default { ('Y', 'n') } else { ('y', 'N') };
    write!(terminal, "{} [{}/{}]: ", question, yes, no)?;

    let line = terminal.read_line()?.ok_or_else(SessionError::input_closed)?;
    let answer = match line.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => true,
        Some('n') => false,
        _ => default,
    };
    Ok(answer)
}
