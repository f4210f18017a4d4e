//! TOML configuration for building a logger without touching the builder API.
//!
//! Every field carries `#[serde(default)]` so a completely empty config file
//! still produces a working stderr logger.

mod size;

pub use size::{format_size, parse_size};

use crate::error::Error;
use crate::flags::Flags;
use crate::logger::Logger;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level config schema:
///
/// ```toml
/// prefix = "svc: "
/// flags = ["date", "time", "shortfile"]
///
/// [file]
/// path = "/var/log/svc.log"
/// rotate_at = "10M"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Fixed string prepended to every line.
    pub prefix: String,
    /// Flag names; an empty list means the standard date + time header.
    pub flags: Vec<String>,
    /// Absent table means output goes to stderr.
    pub file: Option<FileConfig>,
}

/// File sinks have concerns a writer sink doesn't: a path and a threshold.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// An empty path behaves as if the whole table were absent.
    pub path: String,
    /// Human-readable size ("10M", "512K"); raw byte counts also parse.
    pub rotate_at: Option<String>,
}

impl Config {
    /// Reads and parses a config file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses config from an in-memory string — tests and embedders skip the
    /// filesystem round trip.
    ///
    /// # Errors
    /// Fails on invalid TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }

    /// Builds a logger from this config.
    ///
    /// # Errors
    /// Unknown flag names and malformed sizes are construction-time errors,
    /// as is a file path that cannot be opened for append.
    pub fn build_logger(&self) -> Result<Logger, Error> {
        let flags = if self.flags.is_empty() {
            Flags::default()
        } else {
            Flags::from_names(&self.flags)?
        };

        let mut builder = Logger::builder().prefix(self.prefix.clone()).flags(flags);
        if let Some(file) = &self.file
            && !file.path.is_empty()
        {
            builder = builder.file(&file.path);
            if let Some(size) = &file.rotate_at {
                let bytes = parse_size(size).ok_or_else(|| Error::InvalidSize(size.clone()))?;
                builder = builder.rotate_at(bytes);
            }
        }
        builder.build()
    }
}
