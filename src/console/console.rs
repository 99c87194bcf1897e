//! Represents the console context.

use super::{
    builder::ConsoleBuilder,
    config::ConsoleConfig,
    session::{ConsoleSession, RenderState, SessionGuard},
};
use crate::error::{Error, Result};
use crate::geometry::{GeometryCache, ResizeNotifier};
use crate::layout::{compose_line, MIN_SUPPORTED_BAR_WIDTH};
use crate::terminal::{StdoutTerminal, Terminal, RESTORE_CURSOR, SAVE_CURSOR};
use once_cell::sync::Lazy;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};
use tracing::{debug, trace};

static GLOBAL: Lazy<Console<StdoutTerminal>> = Lazy::new(Console::stdout);

/// Owner of one terminal's progress line.
///
/// At most one [`ConsoleSession`] can hold a console at a time. Every
/// operation is a silent no-op when the terminal is not interactive.
///
/// ```rust
/// use ttybar::{Console, ConsoleSession};
///
/// let console = Console::global();
/// let mut session = ConsoleSession::new();
/// console.acquire(&mut session);
/// for pct in (0..=100).step_by(25) {
///     console.render_text_percent(Some("Fetching objects"), pct);
/// }
/// console.release(&mut session);
/// ```
pub struct Console<T: Terminal = StdoutTerminal> {
    /// Where everything is written.
    terminal: Mutex<T>,
    /// Captured once at construction.
    interactive: bool,
    /// Cached terminal width and height.
    geometry: GeometryCache,
    /// Marks `geometry` dirty on window resize.
    resize: ResizeNotifier,
    /// Set while a session holds the console. Shared by all consoles on
    /// the same output.
    locked: Arc<AtomicBool>,
    /// Last pair written, to skip identical redraws.
    state: Mutex<RenderState>,
    config: ConsoleConfig,
}

impl<T: Terminal> std::fmt::Debug for Console<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("interactive", &self.interactive)
            .field("geometry", &self.geometry)
            .field("resize", &self.resize)
            .field("locked", &self.locked)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Console<StdoutTerminal> {
    /// The process-wide console on standard output.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// A console on standard output with the default configuration.
    ///
    /// Shares its lock with every other stdout console, including
    /// [`Console::global`].
    pub fn stdout() -> Self {
        ConsoleBuilder::new().build()
    }
}

impl<T: Terminal> Console<T> {
    /// Create a console on `terminal` with the default configuration.
    pub fn new(terminal: T) -> Self {
        Self::with_config(terminal, ConsoleConfig::default())
    }

    /// Create a console on `terminal`.
    ///
    /// Consoles on terminals that report a [`Terminal::line_lock`] share it;
    /// at most one session holds any of them at a time.
    pub fn with_config(terminal: T, mut config: ConsoleConfig) -> Self {
        config.min_bar_width = config.min_bar_width.max(MIN_SUPPORTED_BAR_WIDTH);
        let interactive = terminal.is_interactive();
        let locked = terminal
            .line_lock()
            .unwrap_or_else(|| Arc::new(AtomicBool::new(false)));
        let geometry = GeometryCache::new(config.geometry);
        let resize = geometry.notifier();
        Self {
            terminal: Mutex::new(terminal),
            interactive,
            geometry,
            resize,
            locked,
            state: Mutex::new(RenderState::default()),
            config,
        }
    }

    /// Get the console configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Return `true` if the terminal is interactive.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Return `true` while a session holds the console.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Current terminal width, clamped by the geometry policy.
    pub fn columns(&self) -> u16 {
        self.geometry.columns(&*lock(&self.terminal))
    }

    /// Current terminal height.
    pub fn rows(&self) -> u16 {
        self.geometry.rows(&*lock(&self.terminal))
    }

    /// The geometry cache backing [`columns`](Self::columns).
    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// The notifier hooked to window resizes.
    pub fn resize_notifier(&self) -> &ResizeNotifier {
        &self.resize
    }

    /// Take the progress line for `session`.
    ///
    /// Starts a fresh line and saves the cursor there; every redraw returns
    /// to that spot.
    ///
    /// # Panics
    ///
    /// Panics if the console or `session` is already locked. See
    /// [`try_acquire`](Self::try_acquire) for the checked form.
    #[track_caller]
    pub fn acquire(&self, session: &mut ConsoleSession) {
        if let Err(e) = self.try_acquire(session) {
            panic!("{e}");
        }
    }

    /// Checked form of [`acquire`](Self::acquire).
    ///
    /// # Errors
    ///
    /// [`Error::SessionAlreadyLocked`] if `session` already holds the
    /// console, [`Error::AlreadyLocked`] if another session does.
    pub fn try_acquire(&self, session: &mut ConsoleSession) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        if session.locked {
            return Err(Error::SessionAlreadyLocked);
        }
        if self
            .locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::AlreadyLocked);
        }
        session.locked = true;

        lock(&self.state).reset();
        if self.config.watch_resize {
            self.resize.register();
        }

        debug!("Acquired console");
        let mut frame = vec![b'\n'];
        frame.extend_from_slice(SAVE_CURSOR);
        emit(&mut *lock(&self.terminal), &frame);
        Ok(())
    }

    /// Redraw the progress line with `text` followed by a bar at `percentage`.
    ///
    /// `None` and an empty string both mean no label. Nothing is written if
    /// the pair equals the last one drawn or if the terminal is narrower
    /// than the configured minimum bar width.
    ///
    /// # Panics
    ///
    /// Panics if `percentage` is above 100 or the console is not locked.
    #[track_caller]
    pub fn render_text_percent(&self, text: Option<&str>, percentage: u32) {
        if let Err(e) = self.try_render_text_percent(text, percentage) {
            panic!("{e}");
        }
    }

    /// Checked form of [`render_text_percent`](Self::render_text_percent).
    ///
    /// # Errors
    ///
    /// [`Error::PercentageOutOfRange`] if `percentage` is above 100,
    /// [`Error::NotLocked`] if no session holds the console.
    pub fn try_render_text_percent(&self, text: Option<&str>, percentage: u32) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        if percentage > 100 {
            return Err(Error::PercentageOutOfRange(percentage));
        }
        if !self.is_locked() {
            return Err(Error::NotLocked);
        }

        let text = text.filter(|t| !t.is_empty());
        let mut state = lock(&self.state);
        if state.matches(text, percentage) {
            trace!(percentage, "Skipping identical redraw");
            return Ok(());
        }

        let mut terminal = lock(&self.terminal);
        let columns = self.geometry.columns(&*terminal);
        let Some(line) = compose_line(text, percentage, columns, self.config.min_bar_width) else {
            trace!(columns, "Terminal too narrow for a progress bar");
            return Ok(());
        };

        let mut frame = Vec::with_capacity(RESTORE_CURSOR.len() + line.len());
        frame.extend_from_slice(RESTORE_CURSOR);
        frame.extend_from_slice(&line);
        emit(&mut *terminal, &frame);

        state.update(text, percentage);
        Ok(())
    }

    /// Give the progress line back, leaving the last bar on screen.
    ///
    /// # Panics
    ///
    /// Panics if `session` does not hold the console.
    #[track_caller]
    pub fn release(&self, session: &mut ConsoleSession) {
        if let Err(e) = self.try_release(session) {
            panic!("{e}");
        }
    }

    /// Checked form of [`release`](Self::release).
    ///
    /// # Errors
    ///
    /// [`Error::NotLocked`] if `session` does not hold the console.
    pub fn try_release(&self, session: &mut ConsoleSession) -> Result<()> {
        if !self.interactive {
            return Ok(());
        }
        if !session.locked || !self.is_locked() {
            return Err(Error::NotLocked);
        }

        lock(&self.state).reset();
        emit(&mut *lock(&self.terminal), b"\n");

        session.locked = false;
        self.locked.store(false, Ordering::Release);
        debug!("Released console");
        Ok(())
    }

    /// Acquire a new session and return a guard that releases it when dropped.
    ///
    /// # Panics
    ///
    /// Panics if the console is already locked.
    #[track_caller]
    pub fn session(&self) -> SessionGuard<'_, T> {
        let mut session = ConsoleSession::new();
        self.acquire(&mut session);
        SessionGuard::new(self, session)
    }
}

/// Best-effort write and flush. Failures are logged and dropped.
fn emit<T: Terminal + ?Sized>(terminal: &mut T, bytes: &[u8]) {
    let result = terminal.write_all(bytes).and_then(|()| terminal.flush());
    if let Err(e) = result {
        debug!(error = %e, "Ignoring terminal write failure");
    }
}

fn lock<U>(mutex: &Mutex<U>) -> MutexGuard<'_, U> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
