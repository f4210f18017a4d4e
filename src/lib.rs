#![forbid(unsafe_code)]

//! `rollog` - Minimal thread-safe line logger with size-based file rotation.
//!
//! A small logging library with support for:
//! - Timestamped, caller-annotated line headers controlled by a flag bitset
//! - Serialized writes from concurrent threads onto one sink
//! - Size-triggered rotation when the sink is a file
//! - Builder pattern for programmatic configuration
//! - TOML configuration with human-readable rotation sizes
//!
//! # Example
//!
//! ```
//! use rollog::{Flags, Logger};
//!
//! let logger = Logger::builder()
//!     .prefix("app: ")
//!     .flags(Flags::DATE | Flags::TIME | Flags::SHORT_FILE)
//!     .build()?;
//!
//! logger.info("application started")?;
//! logger.warn("connection timeout")?;
//! # Ok::<(), rollog::Error>(())
//! ```
//!
//! Every emitted line follows the fixed field order
//! `<prefix><date ><time[.micros] ><file:line: ><message>` with exactly one
//! trailing newline.

pub mod config;
mod error;
pub mod flags;
pub mod fmt;
pub mod logger;
mod output;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use flags::Flags;
pub use logger::{Logger, LoggerBuilder};
pub use output::{DEFAULT_ROTATE_AT, MIN_ROTATE_AT};
