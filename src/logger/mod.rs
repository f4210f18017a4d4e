//! The logger object callers hold — immutable configuration around a locked
//! writer core, so any number of threads can emit through one instance.

mod builder;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::flags::Flags;
use crate::fmt;
use crate::output::Sink;
use chrono::Local;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An active logging object that generates lines of output to a sink.
///
/// Each emit makes a single write call, so concurrent callers never
/// interleave bytes within a line. Timestamps and caller locations are
/// captured before the lock is taken: a thread that stamps first may still
/// write second, a deliberate relaxation that keeps slow lock handoffs from
/// skewing every queued line's time.
pub struct Logger {
    prefix: String,
    flags: Flags,
    inner: Mutex<Inner>,
}

/// Everything mutable lives behind the lock: the sink handle, and a scratch
/// buffer reused across emits to avoid a per-call allocation.
struct Inner {
    sink: Sink,
    buf: Vec<u8>,
}

impl Logger {
    /// Direct construction would expose sink internals — the builder provides
    /// a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Formats and writes one line: header per the enabled flags, then the
    /// message, terminated by exactly one newline.
    ///
    /// # Errors
    /// Any sink write failure is returned to the caller; the line is lost
    /// either way. There is no retry and no buffering across calls.
    #[track_caller]
    pub fn emit(&self, msg: &str) -> Result<(), Error> {
        self.output(Location::caller(), msg)
    }

    /// Development-time diagnostics.
    ///
    /// # Errors
    /// Same contract as [`Logger::emit`].
    #[track_caller]
    pub fn debug(&self, msg: &str) -> Result<(), Error> {
        self.output(Location::caller(), msg)
    }

    /// Normal operational milestones.
    ///
    /// # Errors
    /// Same contract as [`Logger::emit`].
    #[track_caller]
    pub fn info(&self, msg: &str) -> Result<(), Error> {
        self.output(Location::caller(), msg)
    }

    /// Non-fatal anomalies.
    ///
    /// # Errors
    /// Same contract as [`Logger::emit`].
    #[track_caller]
    pub fn warn(&self, msg: &str) -> Result<(), Error> {
        self.output(Location::caller(), msg)
    }

    /// Unrecoverable failures.
    ///
    /// # Errors
    /// Same contract as [`Logger::emit`].
    #[track_caller]
    pub fn error(&self, msg: &str) -> Result<(), Error> {
        self.output(Location::caller(), msg)
    }

    fn output(&self, caller: &'static Location<'static>, msg: &str) -> Result<(), Error> {
        // Stamp before queueing on the lock so a blocked writer keeps the
        // time of its call, not of its turn.
        let now = Local::now();
        let caller = (caller.file(), caller.line());

        let mut guard = self.lock();
        let inner = &mut *guard;
        inner.buf.clear();
        fmt::format_header(&mut inner.buf, &self.prefix, self.flags, now, Some(caller));
        fmt::push_message(&mut inner.buf, msg);
        inner.sink.commit(now, &mut inner.buf)
    }

    /// File sinks may hold kernel-buffered tail data on abrupt exit without
    /// an explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    pub fn flush(&self) -> Result<(), Error> {
        self.lock().sink.flush()
    }

    /// Tests and diagnostics need to see which header fields are active.
    #[must_use]
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// The string prepended verbatim to every line.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Effective rotation threshold in bytes; `None` for non-file sinks.
    #[must_use]
    pub fn rotate_threshold(&self) -> Option<u64> {
        self.lock().sink.rotate_threshold()
    }

    /// A panic while holding the lock cannot leave the buffer in a state
    /// that breaks later lines — every emit clears it first — so poisoning
    /// is ignored rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
