//! Unified error type for all rollog operations.

/// Error type for rollog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the underlying sink or the filesystem.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Unknown flag name in config.
    InvalidFlag(String),
    /// Unparseable rotation size in config.
    InvalidSize(String),
    /// The file sink was closed by a failed rotation; the logger can no longer write.
    SinkClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::InvalidFlag(name) => write!(f, "unknown flag: '{name}'"),
            Self::InvalidSize(size) => write!(f, "invalid size: '{size}'"),
            Self::SinkClosed => write!(f, "sink closed by a failed rotation"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
