//! Size-triggered rotation for file-backed sinks.
//!
//! The rotation decision runs before the pending write commits, so a retired
//! file never exceeds the threshold by more than one message: the line that
//! pushed the counter over becomes the first content of the fresh file.

use crate::error::Error;
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A file sink that renames itself away and reopens at the original path once
/// it has accumulated more than `rotate_at` bytes.
pub(crate) struct RollingFile {
    path: PathBuf,
    rotate_at: u64,
    /// Bytes committed to the current file generation, seeded from the size
    /// of whatever the open appended to.
    written: u64,
    /// `None` only after a failed rotation has already closed the old handle.
    file: Option<File>,
}

impl RollingFile {
    /// Opens (creating if absent) the file in append mode.
    ///
    /// # Errors
    /// Surfaces the open failure; no logger is constructed on top of it.
    pub(crate) fn open(path: impl Into<PathBuf>, rotate_at: u64) -> Result<Self, Error> {
        let path = path.into();
        let file = append_handle(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            rotate_at,
            written,
            file: Some(file),
        })
    }

    pub(crate) const fn rotate_at(&self) -> u64 {
        self.rotate_at
    }

    /// Counts `buf` against the threshold and rolls the file when exceeded.
    ///
    /// Close and rename problems degrade to warning lines appended to `buf`
    /// itself, visible in the log stream. Failure to open the fresh file is
    /// fatal for this sink: the old handle is already closed, and every
    /// later write reports [`Error::SinkClosed`].
    pub(crate) fn roll_if_needed(
        &mut self,
        now: DateTime<Local>,
        buf: &mut Vec<u8>,
    ) -> Result<(), Error> {
        self.written += buf.len() as u64;
        if self.written <= self.rotate_at {
            return Ok(());
        }

        // Close before rename — some platforms refuse to rename a file that
        // still has open handles. Dropping the handle reports nothing, so
        // sync first to surface close-time errors.
        if let Some(file) = self.file.take()
            && let Err(e) = file.sync_all()
        {
            push_warning(buf, &format!("sync before close failed: {e}"));
        }

        let rotated = suffixed(&self.path, &now.format("%Y%m%d-%H%M%S").to_string());
        if let Err(e) = fs::rename(&self.path, &rotated) {
            push_warning(buf, &format!("rename to {} failed: {e}", rotated.display()));
            let fallback = suffixed(&self.path, &now.timestamp().to_string());
            if let Err(e) = fs::rename(&self.path, &fallback) {
                push_warning(buf, &format!("fallback rename failed: {e}"));
            }
        }

        let file = append_handle(&self.path)?;
        self.file = Some(file);
        // The pending line becomes the first content of the new file.
        self.written = buf.len() as u64;
        Ok(())
    }

    pub(crate) fn write_all(&mut self, buf: &[u8]) -> Result<(), Error> {
        match &mut self.file {
            Some(file) => Ok(file.write_all(buf)?),
            None => Err(Error::SinkClosed),
        }
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        match &mut self.file {
            Some(file) => Ok(file.flush()?),
            None => Err(Error::SinkClosed),
        }
    }
}

fn append_handle(path: &Path) -> Result<File, Error> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// `app.log` becomes `app.log.20090123-012323`.
fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Degraded-but-alive rotation problems surface in the stream itself rather
/// than aborting the write that triggered them.
fn push_warning(buf: &mut Vec<u8>, msg: &str) {
    buf.extend_from_slice(b"[rollog] rotate: ");
    buf.extend_from_slice(msg.as_bytes());
    buf.push(b'\n');
}
