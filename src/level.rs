//! Severity levels.
//!
//! Levels are totally ordered: `Debug < Info < Warn < Error`. A logger drops
//! every call whose level compares below its threshold.

use crate::color::Color;
use crate::error::LogError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Level {
    /// Verbose diagnostics
    Debug = 0,
    /// Normal operational messages
    #[default]
    Info = 1,
    /// Something unexpected that did not stop the caller
    Warn = 2,
    /// A failure
    Error = 3,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Number of distinct levels.
    pub const COUNT: usize = Self::ALL.len();

    /// Upper-case name printed in the line header.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Color applied to the header of lines at this level.
    pub const fn color(self) -> Color {
        match self {
            Level::Debug => Color::Blue,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
        }
    }

    /// Ordinal of the level (`Debug` is 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an arbitrary index into a level, wrapping modulo [`Level::COUNT`].
    ///
    /// `4` becomes `Debug`, `5` becomes `Info`, and so on. Out-of-range input
    /// is tolerated rather than rejected.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working, e.g. `{:<5}`.
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(Self::from_index(index));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

// Config files accept the same spellings as `FromStr`: any case, `warning`,
// and indices that wrap.
impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelVisitor)
    }
}

struct LevelVisitor;

impl Visitor<'_> for LevelVisitor {
    type Value = Level;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a level name (debug, info, warn, error) or a level index")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Level, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Level, E> {
        Ok(Level::from_index((value % Level::COUNT as u64) as usize))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Level, E> {
        u64::try_from(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            .and_then(|index| self.visit_u64(index))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl From<Level> for log::LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error => log::LevelFilter::Error,
        }
    }
}
