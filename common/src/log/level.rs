//! Severity levels and thresholds.
//!
//! Numbering follows the usual RTOS convention: lower is more severe, and a
//! threshold lets through every level whose value is at or below its own.

use core::fmt;

/// Severity of a single message.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Level {
    /// Something failed
    Error = 1,
    /// Something looks wrong but work continues
    Warning = 2,
    /// Normal operation
    Info = 3,
    /// Development detail
    Debug = 4,
}

impl Level {
    /// All levels, most severe first.
    pub const ALL: [Level; 4] = [Level::Error, Level::Warning, Level::Info, Level::Debug];

    /// Three-letter tag used in console output (`err`, `wrn`, `inf`, `dbg`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "err",
            Self::Warning => "wrn",
            Self::Info => "inf",
            Self::Debug => "dbg",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Minimum severity a message needs to reach the backend.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LevelFilter {
    /// Nothing is emitted
    Off = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl LevelFilter {
    /// Whether `level` passes this threshold.
    #[inline]
    pub const fn allows(
        self,
        level: Level,
    ) -> bool {
        level as u8 <= self as u8
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Self::Error,
            Level::Warning => Self::Warning,
            Level::Info => Self::Info,
            Level::Debug => Self::Debug,
        }
    }
}
