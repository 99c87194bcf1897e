//! Configuration structures and defaults for the console.

use crate::geometry::GeometryPolicy;
use crate::layout::MIN_BAR_WIDTH;

/// Configuration structure for the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Narrowest terminal a bar is drawn on. Narrower terminals get nothing.
    pub min_bar_width: u16,
    /// Fallbacks and limits for the terminal size.
    pub geometry: GeometryPolicy,
    /// Hook the window-change signal on first acquire.
    pub watch_resize: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            min_bar_width: MIN_BAR_WIDTH,
            geometry: GeometryPolicy::default(),
            watch_resize: true,
        }
    }
}
