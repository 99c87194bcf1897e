//! Console session and progress renderer.
//!
//! A [`Console`] owns one terminal line. A caller takes it with
//! [`Console::acquire`], redraws it any number of times with
//! [`Console::render_text_percent`], and hands it back with
//! [`Console::release`]. The last bar stays on screen.
//!
//! # Examples
//!
//! ## Using the process-wide console
//!
//! ```rust
//! use ttybar::{Console, ConsoleSession};
//!
//! let console = Console::global();
//! let mut session = ConsoleSession::new();
//! console.acquire(&mut session);
//! console.render_text_percent(Some("Writing objects"), 42);
//! console.release(&mut session);
//! ```
//!
//! ## Scoped session
//!
//! ```rust
//! use ttybar::ConsoleBuilder;
//!
//! let console = ConsoleBuilder::new().min_bar_width(20).build();
//! let progress = console.session();
//! progress.render_text_percent(None, 100);
//! progress.finish();
//! ```

pub(crate) mod builder;
pub(crate) mod config;
#[allow(clippy::module_inception)]
pub(crate) mod console;
pub(crate) mod session;

pub use builder::ConsoleBuilder;
pub use config::ConsoleConfig;
pub use console::Console;
pub use session::{ConsoleSession, SessionGuard};
