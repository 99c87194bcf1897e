//! Interactive terminal detection.

use is_terminal::IsTerminal;
use once_cell::sync::OnceCell;

static STDOUT_IS_TTY: OnceCell<bool> = OnceCell::new();

/// Return `true` if standard output is an interactive terminal.
///
/// Computed on first call and cached for the lifetime of the process.
pub fn is_interactive_terminal() -> bool {
    *STDOUT_IS_TTY.get_or_init(|| {
        let tty = std::io::stdout().is_terminal();
        tracing::debug!(tty, "Detected stdout terminal capability");
        tty
    })
}
