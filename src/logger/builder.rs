//! Stepwise construction of a [`Logger`], covering all three sink shapes:
//! arbitrary writer, plain file, and rolling file with an explicit threshold.

use super::{Inner, Logger};
use crate::error::Error;
use crate::flags::Flags;
use crate::output::{DEFAULT_ROTATE_AT, MIN_ROTATE_AT, RollingFile, Sink};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Builder for [`Logger`]. Defaults: empty prefix, [`Flags::STD`], stderr.
pub struct LoggerBuilder {
    prefix: String,
    flags: Flags,
    target: Target,
    rotate_at: Option<u64>,
}

enum Target {
    Stderr,
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            flags: Flags::STD,
            target: Target::Stderr,
            rotate_at: None,
        }
    }

    /// Fixed string prepended verbatim to every line.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Header fields to render; immutable once the logger is built.
    #[must_use]
    pub const fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Sends output to an arbitrary byte stream. Writer sinks never rotate.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.target = Target::Writer(Box::new(writer));
        self
    }

    /// Sends output to a file, opened for append and created if absent.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.target = Target::File(path.into());
        self
    }

    /// Rotation threshold in bytes; only meaningful for file targets.
    ///
    /// Values below [`MIN_ROTATE_AT`] are silently replaced by
    /// [`DEFAULT_ROTATE_AT`], which is also what file targets get when no
    /// threshold is configured at all.
    #[must_use]
    pub const fn rotate_at(mut self, bytes: u64) -> Self {
        self.rotate_at = Some(bytes);
        self
    }

    /// Opens the sink and assembles the logger.
    ///
    /// # Errors
    /// Surfaces the failure when a file target cannot be opened for append;
    /// no logger is created.
    pub fn build(self) -> Result<Logger, Error> {
        let sink = match self.target {
            Target::Stderr => Sink::Writer(Box::new(io::stderr())),
            Target::Writer(w) => Sink::Writer(w),
            Target::File(path) => {
                Sink::File(RollingFile::open(path, effective_threshold(self.rotate_at))?)
            }
        };
        Ok(Logger {
            prefix: self.prefix,
            flags: self.flags,
            inner: Mutex::new(Inner {
                sink,
                buf: Vec::new(),
            }),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn effective_threshold(requested: Option<u64>) -> u64 {
    match requested {
        Some(bytes) if bytes >= MIN_ROTATE_AT => bytes,
        _ => DEFAULT_ROTATE_AT,
    }
}
