//! Session handles and the memoized render state.

use super::console::Console;
use crate::terminal::Terminal;
use std::ops::Deref;
use tracing::debug;

/// Exclusive ownership of the console's progress line.
///
/// Created unlocked. [`Console::acquire`] locks it, [`Console::release`]
/// unlocks it again, after which it may be acquired anew.
#[derive(Debug, Default)]
pub struct ConsoleSession {
    pub(crate) locked: bool,
}

impl ConsoleSession {
    /// Create an unlocked session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` while this session holds the console.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// Last (label, percentage) pair written to the terminal.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    text: Option<String>,
    percentage: Option<u32>,
}

impl RenderState {
    pub(crate) fn matches(&self, text: Option<&str>, percentage: u32) -> bool {
        self.percentage == Some(percentage) && self.text.as_deref() == text
    }

    pub(crate) fn update(&mut self, text: Option<&str>, percentage: u32) {
        match (&mut self.text, text) {
            (Some(current), Some(new)) => {
                current.clear();
                current.push_str(new);
            }
            (current, new) => *current = new.map(str::to_owned),
        }
        self.percentage = Some(percentage);
    }

    pub(crate) fn reset(&mut self) {
        self.text = None;
        self.percentage = None;
    }
}

/// A locked session that releases the console when dropped.
///
/// Returned by [`Console::session`]. Derefs to the console, so rendering
/// goes through the guard.
///
/// ```rust
/// use ttybar::Console;
///
/// let console = Console::stdout();
/// {
///     let progress = console.session();
///     progress.render_text_percent(Some("Checking out"), 10);
///     progress.render_text_percent(Some("Checking out"), 100);
/// }
/// assert!(!console.is_locked());
/// ```
pub struct SessionGuard<'a, T: Terminal> {
    console: &'a Console<T>,
    session: ConsoleSession,
}

impl<'a, T: Terminal> SessionGuard<'a, T> {
    pub(crate) fn new(console: &'a Console<T>, session: ConsoleSession) -> Self {
        Self { console, session }
    }

    /// Release the console now instead of at the end of the scope.
    pub fn finish(self) {}
}

impl<T: Terminal> Deref for SessionGuard<'_, T> {
    type Target = Console<T>;

    fn deref(&self) -> &Self::Target {
        self.console
    }
}

impl<T: Terminal> std::fmt::Debug for SessionGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("console", self.console)
            .field("session", &self.session)
            .finish()
    }
}

impl<T: Terminal> Drop for SessionGuard<'_, T> {
    fn drop(&mut self) {
        if self.session.is_locked() {
            if let Err(e) = self.console.try_release(&mut self.session) {
                debug!(error = %e, "Failed to release console session");
            }
        }
    }
}
