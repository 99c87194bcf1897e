//! Resize notification.
//!
//! On unix the notifier hooks `SIGWINCH`. The handler installed by
//! `signal_hook::flag::register` does a single atomic store into the cache's
//! dirty flag, which is all that is allowed in signal context.

use once_cell::sync::OnceCell;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::debug;

#[cfg(unix)]
type Registration = Option<signal_hook::SigId>;
#[cfg(not(unix))]
type Registration = ();

/// Marks a [`GeometryCache`](super::GeometryCache) dirty when the terminal
/// window changes size.
#[derive(Debug)]
pub struct ResizeNotifier {
    flag: Arc<AtomicBool>,
    registration: OnceCell<Registration>,
}

impl ResizeNotifier {
    pub(crate) fn new(flag: Arc<AtomicBool>) -> Self {
        Self {
            flag,
            registration: OnceCell::new(),
        }
    }

    /// Hook the window-change signal. Only the first call registers; later
    /// calls return immediately.
    ///
    /// A failed registration is logged and never retried: the cache then only
    /// refreshes on explicit invalidation.
    pub fn register(&self) {
        self.registration.get_or_init(|| self.install());
    }

    /// Return `true` once [`register`](Self::register) has run.
    pub fn is_registered(&self) -> bool {
        self.registration.get().is_some()
    }

    /// Signal a resize by hand, exactly as the signal handler would.
    pub fn notify(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[cfg(unix)]
    fn install(&self) -> Registration {
        use signal_hook::consts::SIGWINCH;

        match signal_hook::flag::register(SIGWINCH, Arc::clone(&self.flag)) {
            Ok(id) => {
                debug!("Registered SIGWINCH handler");
                Some(id)
            }
            Err(e) => {
                debug!(error = %e, "Failed to register SIGWINCH handler");
                None
            }
        }
    }

    #[cfg(unix)]
    fn uninstall(&self) {
        if let Some(Some(id)) = self.registration.get() {
            signal_hook::low_level::unregister(*id);
        }
    }

    #[cfg(not(unix))]
    fn install(&self) -> Registration {
        debug!("Resize notifications are not supported on this platform");
    }

    #[cfg(not(unix))]
    fn uninstall(&self) {}
}

impl Drop for ResizeNotifier {
    fn drop(&mut self) {
        self.uninstall();
    }
}
