//! Header options that control which fields prefix each log line.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitset of independent header options — combined with `|`, fixed for the
/// lifetime of a logger.
///
/// There is no control over the order the fields appear; a line with all
/// options enabled looks like:
///
/// ```text
/// 2009/01/23 01:23:23.123123 /a/b/c/d.rs:23: message
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// No header fields at all — lines carry only the prefix and message.
    pub const NONE: Self = Self(0);
    /// The date: `2009/01/23`.
    pub const DATE: Self = Self(1);
    /// The time: `01:23:23`.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies the time field.
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full file path and line number: `/a/b/c/d.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// Final file name element and line number: `d.rs:23`. Overrides [`Flags::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Initial values for a standard logger: date and time.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);

    /// True when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when `self` and `other` share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// `|` in const contexts, where the operator impl is unavailable.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when no option is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Config files spell flags as a list of strings rather than a bitset.
    ///
    /// # Errors
    /// Returns [`ParseFlagError`] on the first unrecognized name.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ParseFlagError> {
        let mut flags = Self::NONE;
        for name in names {
            flags |= name.as_ref().parse()?;
        }
        Ok(flags)
    }
}

/// Date and time are what most loggers want by default.
impl Default for Flags {
    fn default() -> Self {
        Self::STD
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// Returned by `FromStr` so callers can report which name failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFlagError(String);

impl fmt::Display for ParseFlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown flag: '{}'", self.0)
    }
}

impl std::error::Error for ParseFlagError {}

impl From<ParseFlagError> for crate::Error {
    fn from(e: ParseFlagError) -> Self {
        Self::InvalidFlag(e.0)
    }
}

impl FromStr for Flags {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::DATE),
            "time" => Ok(Self::TIME),
            "microseconds" | "micros" => Ok(Self::MICROSECONDS),
            "longfile" => Ok(Self::LONG_FILE),
            "shortfile" => Ok(Self::SHORT_FILE),
            "std" => Ok(Self::STD),
            _ => Err(ParseFlagError(s.to_string())),
        }
    }
}
