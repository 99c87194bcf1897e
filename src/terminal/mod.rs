//! Terminal capability abstraction.
//!
//! The console never talks to stdout directly. Everything it needs from the
//! terminal goes through the [`Terminal`] trait so that the layout and redraw
//! logic can be driven by an in-memory terminal in tests.
//!
//! # Examples
//!
//! ```rust
//! use ttybar::terminal::{StdoutTerminal, Terminal};
//!
//! let terminal = StdoutTerminal::new();
//! if terminal.is_interactive() {
//!     println!("size: {:?}", terminal.window_size());
//! }
//! ```

pub(crate) mod capability;
pub(crate) mod stdout;

pub use capability::is_interactive_terminal;
pub use stdout::StdoutTerminal;

use std::io;
use std::sync::{atomic::AtomicBool, Arc};

/// Save cursor position (`ESC 7`).
pub const SAVE_CURSOR: &[u8] = &[0x1B, 0x37];
/// Restore cursor position (`ESC 8`).
pub const RESTORE_CURSOR: &[u8] = &[0x1B, 0x38];

/// Raw window size as reported by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of columns, `0` if the terminal did not say.
    pub columns: u16,
    /// Number of rows, `0` if the terminal did not say.
    pub rows: u16,
}

impl WindowSize {
    /// Create a new [`WindowSize`].
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }
}

/// What the console needs from an output terminal.
pub trait Terminal: Send {
    /// Return `true` if the output is an interactive terminal.
    ///
    /// Implementations should answer from a cached value; this is called on
    /// every console operation.
    fn is_interactive(&self) -> bool;

    /// Query the current window size, `None` if the query failed.
    fn window_size(&self) -> Option<WindowSize>;

    /// Write raw bytes to the terminal.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Flush anything buffered.
    fn flush(&mut self) -> io::Result<()>;

    /// Lock flag shared by every console drawing on the same output.
    ///
    /// `None` gives each console its own flag.
    fn line_lock(&self) -> Option<Arc<AtomicBool>> {
        None
    }
}

impl<T: Terminal + ?Sized> Terminal for Box<T> {
    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }

    fn window_size(&self) -> Option<WindowSize> {
        (**self).window_size()
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn line_lock(&self) -> Option<Arc<AtomicBool>> {
        (**self).line_lock()
    }
}
