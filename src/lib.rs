//! Ttybar draws a single-line progress bar that updates in place on an
//! interactive terminal and follows window resizes.
//!
//! # Quick Start
//!
//! ```rust
//! use ttybar::{Console, ConsoleSession};
//!
//! let console = Console::global();
//! let mut session = ConsoleSession::new();
//! console.acquire(&mut session);
//! for pct in 0..=100 {
//!     console.render_text_percent(Some("Receiving objects"), pct);
//! }
//! console.release(&mut session);
//! ```
//!
//! When standard output is not a terminal every call above does nothing.
//!
//! # Module Organization
//!
//! - [`console`] - The `Console` context, sessions and the progress renderer
//! - [`error`] - Contract violations reported by the checked `try_*` methods
//! - [`geometry`] - Cached terminal size and resize notification
//! - [`layout`] - Fixed-width layout of the label and bar
//! - [`terminal`] - Terminal capability abstraction and the stdout terminal

pub mod console;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod terminal;

pub use console::{Console, ConsoleBuilder, ConsoleConfig, ConsoleSession, SessionGuard};
pub use error::{Error, Result};
pub use geometry::{GeometryCache, GeometryPolicy, ResizeNotifier};
pub use layout::{compose_line, BarLayout, MIN_BAR_WIDTH};
pub use terminal::{is_interactive_terminal, StdoutTerminal, Terminal, WindowSize};
