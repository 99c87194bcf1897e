//! Terminal geometry cache.
//!
//! The column count is read on every redraw, so it is cached instead of
//! querying the terminal each frame. A resize notification only marks the
//! cache dirty; the next read re-queries the terminal.
//!
//! # Examples
//!
//! ```rust
//! use ttybar::geometry::{GeometryCache, GeometryPolicy};
//! use ttybar::terminal::StdoutTerminal;
//!
//! let cache = GeometryCache::new(GeometryPolicy::default());
//! let columns = cache.columns(&StdoutTerminal::new());
//! assert!((1..=256).contains(&columns));
//! ```

pub(crate) mod resize;

pub use resize::ResizeNotifier;

use crate::terminal::Terminal;
use std::sync::{
    atomic::{AtomicBool, AtomicU16, Ordering},
    Arc,
};
use tracing::debug;

/// Fallbacks and limits applied to raw window size queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryPolicy {
    /// Width used when the query fails or reports zero columns.
    pub default_columns: u16,
    /// Upper bound for the reported width.
    pub max_columns: u16,
    /// Height used when the query fails or reports zero rows.
    pub default_rows: u16,
}

impl Default for GeometryPolicy {
    fn default() -> Self {
        Self {
            default_columns: Self::DEFAULT_COLUMNS,
            max_columns: Self::MAX_COLUMNS,
            default_rows: Self::DEFAULT_ROWS,
        }
    }
}

impl GeometryPolicy {
    pub const DEFAULT_COLUMNS: u16 = 80;
    pub const MAX_COLUMNS: u16 = 256;
    pub const DEFAULT_ROWS: u16 = 24;

    /// Turn a raw column count into the width the renderer works with.
    ///
    /// `None` and `0` become `default_columns`, then the result is capped at
    /// `max_columns`. Narrow widths are kept as-is.
    pub fn clamp_columns(&self, raw: Option<u16>) -> u16 {
        let columns = match raw {
            Some(c) if c > 0 => c,
            _ => self.default_columns,
        };
        columns.min(self.max_columns)
    }

    /// Turn a raw row count into a usable height.
    pub fn clamp_rows(&self, raw: Option<u16>) -> u16 {
        match raw {
            Some(r) if r > 0 => r,
            _ => self.default_rows,
        }
    }
}

/// Cached terminal width and height.
///
/// A cached value of `0` means "not cached". The dirty flag is shared with a
/// [`ResizeNotifier`], which may set it from a signal handler.
#[derive(Debug)]
pub struct GeometryCache {
    columns: AtomicU16,
    rows: AtomicU16,
    dirty: Arc<AtomicBool>,
    policy: GeometryPolicy,
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new(GeometryPolicy::default())
    }
}

impl GeometryCache {
    /// Create an empty cache. The first read queries the terminal.
    pub fn new(policy: GeometryPolicy) -> Self {
        Self {
            columns: AtomicU16::new(0),
            rows: AtomicU16::new(0),
            dirty: Arc::new(AtomicBool::new(false)),
            policy,
        }
    }

    /// Get the policy applied to raw queries.
    pub fn policy(&self) -> &GeometryPolicy {
        &self.policy
    }

    /// Current column count, querying `terminal` only if the cache is empty
    /// or a resize has been signalled since the last read.
    pub fn columns(&self, terminal: &dyn Terminal) -> u16 {
        self.consume_resize();

        let cached = self.columns.load(Ordering::Acquire);
        if cached != 0 {
            return cached;
        }

        let raw = terminal.window_size().map(|size| size.columns);
        let columns = self.policy.clamp_columns(raw);
        debug!(?raw, columns, "Queried terminal width");
        self.columns.store(columns, Ordering::Release);
        columns
    }

    /// Current row count. Cached and invalidated like [`columns`](Self::columns).
    pub fn rows(&self, terminal: &dyn Terminal) -> u16 {
        self.consume_resize();

        let cached = self.rows.load(Ordering::Acquire);
        if cached != 0 {
            return cached;
        }

        let raw = terminal.window_size().map(|size| size.rows);
        let rows = self.policy.clamp_rows(raw);
        debug!(?raw, rows, "Queried terminal height");
        self.rows.store(rows, Ordering::Release);
        rows
    }

    /// Drop the cached geometry so the next read re-queries the terminal.
    ///
    /// Only performs atomic stores: no I/O, no allocation, no locking.
    pub fn invalidate(&self) {
        self.columns.store(0, Ordering::Release);
        self.rows.store(0, Ordering::Release);
    }

    /// Return `true` if a resize was signalled and not yet consumed by a read.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Create a notifier that marks this cache dirty.
    pub fn notifier(&self) -> ResizeNotifier {
        ResizeNotifier::new(Arc::clone(&self.dirty))
    }

    fn consume_resize(&self) {
        if self.dirty.swap(false, Ordering::AcqRel) {
            self.invalidate();
        }
    }
}
