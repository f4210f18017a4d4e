//! Output sinks. A logger writes either to an arbitrary byte stream or to a
//! file that rolls over once it grows past a size threshold.

mod rotate;

pub(crate) use rotate::RollingFile;

use crate::error::Error;
use chrono::{DateTime, Local};
use std::io::Write;

/// Configured thresholds below [`MIN_ROTATE_AT`] are silently replaced by this.
pub const DEFAULT_ROTATE_AT: u64 = 10 * 1024 * 1024;

/// Smallest accepted rotation threshold.
pub const MIN_ROTATE_AT: u64 = 1024 * 1024;

/// Exactly one logger owns a sink at a time; rotation is the only operation
/// allowed to replace the underlying handle, and only for the file variant.
pub(crate) enum Sink {
    Writer(Box<dyn Write + Send>),
    File(RollingFile),
}

impl Sink {
    /// Writes one fully formatted line, rolling the file first when the
    /// pending bytes push it over its threshold.
    pub(crate) fn commit(&mut self, now: DateTime<Local>, buf: &mut Vec<u8>) -> Result<(), Error> {
        match self {
            Self::Writer(w) => Ok(w.write_all(buf)?),
            Self::File(f) => {
                f.roll_if_needed(now, buf)?;
                f.write_all(buf)
            }
        }
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        match self {
            Self::Writer(w) => Ok(w.flush()?),
            Self::File(f) => f.flush(),
        }
    }

    /// `None` for non-file sinks, which never rotate.
    pub(crate) fn rotate_threshold(&self) -> Option<u64> {
        match self {
            Self::Writer(_) => None,
            Self::File(f) => Some(f.rotate_at()),
        }
    }
}
