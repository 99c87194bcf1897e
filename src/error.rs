//! Error handling for the ttybar library.
//!
//! Only caller bugs are represented here. Terminal I/O failures, failed size
//! queries and non-interactive output are absorbed by the console and never
//! reach the caller.

use thiserror::Error;

/// Contract violations that can happen when driving a [`Console`](crate::Console).
///
/// The `try_*` methods of the console return these; the plain methods panic
/// with the same message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Another session already owns the progress line.
    #[error("console is already locked by another session")]
    AlreadyLocked,

    /// The session passed to `acquire` is already holding the lock.
    #[error("console session is already locked")]
    SessionAlreadyLocked,

    /// Render or release was called without a matching acquire.
    ///
    /// Also returned when releasing through a session handle that is not the
    /// one holding the lock.
    #[error("console is not locked")]
    NotLocked,

    /// The percentage passed to a render call is above 100.
    #[error("percentage {0} is out of range (expected 0..=100)")]
    PercentageOutOfRange(u32),
}

/// Result type alias for console operations that check their calling contract.
pub type Result<T> = std::result::Result<T, Error>;
