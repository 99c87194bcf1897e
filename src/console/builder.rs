//! Builder pattern implementation for creating Console instances.
//!
//! # Examples
//!
//! ```rust
//! use ttybar::ConsoleBuilder;
//!
//! let console = ConsoleBuilder::new()
//!     .max_columns(120)
//!     .watch_resize(false)
//!     .build();
//! assert!(!console.is_locked());
//! ```

use super::{config::ConsoleConfig, console::Console};
use crate::geometry::GeometryPolicy;
use crate::layout::MIN_SUPPORTED_BAR_WIDTH;
use crate::terminal::{StdoutTerminal, Terminal};

/// A builder used to create a [`Console`].
#[derive(Debug, Default)]
pub struct ConsoleBuilder {
    config: ConsoleConfig,
}

impl ConsoleBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ConsoleBuilder::default()
    }

    /// Set the narrowest terminal a bar is drawn on.
    ///
    /// Values below the width of the braces plus the percentage field are
    /// raised to that width.
    pub fn min_bar_width(mut self, min_bar_width: u16) -> Self {
        self.config.min_bar_width = min_bar_width.max(MIN_SUPPORTED_BAR_WIDTH);
        self
    }

    /// Set the width used when the terminal size cannot be queried.
    pub fn default_columns(mut self, columns: u16) -> Self {
        self.config.geometry.default_columns = columns.max(1);
        self
    }

    /// Set the upper bound for the terminal width.
    ///
    /// Capped at [`GeometryPolicy::MAX_COLUMNS`].
    pub fn max_columns(mut self, columns: u16) -> Self {
        self.config.geometry.max_columns = columns.clamp(1, GeometryPolicy::MAX_COLUMNS);
        self
    }

    /// Set the height used when the terminal size cannot be queried.
    pub fn default_rows(mut self, rows: u16) -> Self {
        self.config.geometry.default_rows = rows.max(1);
        self
    }

    /// Enable or disable watching for terminal resizes.
    pub fn watch_resize(mut self, watch: bool) -> Self {
        self.config.watch_resize = watch;
        self
    }

    /// Create the [`Console`] on standard output.
    ///
    /// All stdout consoles share one lock.
    pub fn build(self) -> Console<StdoutTerminal> {
        self.build_with(StdoutTerminal::new())
    }

    /// Create the [`Console`] on the given terminal.
    pub fn build_with<T: Terminal>(self, terminal: T) -> Console<T> {
        Console::with_config(terminal, self.config)
    }
}
