//! The real terminal: standard output.

use super::{capability::is_interactive_terminal, Terminal, WindowSize};
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::{atomic::AtomicBool, Arc};
use terminal_size::{terminal_size_of, Height, Width};

/// Held while any stdout console has a session, so stdout carries at most
/// one progress line.
static STDOUT_LOCK: Lazy<Arc<AtomicBool>> = Lazy::new(|| Arc::new(AtomicBool::new(false)));

/// [`Terminal`] backed by the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTerminal;

impl StdoutTerminal {
    /// Create a new [`StdoutTerminal`].
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for StdoutTerminal {
    fn is_interactive(&self) -> bool {
        is_interactive_terminal()
    }

    fn window_size(&self) -> Option<WindowSize> {
        let (Width(columns), Height(rows)) = terminal_size_of(io::stdout())?;
        Some(WindowSize::new(columns, rows))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }

    fn line_lock(&self) -> Option<Arc<AtomicBool>> {
        Some(Arc::clone(&STDOUT_LOCK))
    }
}
