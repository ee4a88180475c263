// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log levels and record tags
//!
//! A [`Level`] is the verbosity threshold of a logger. A [`Tag`] marks what
//! kind of record is being written. A record is emitted when its tag's level
//! is at or below the threshold; `Print` and `Fatal` records always are.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use thiserror::Error;

/// Verbosity threshold, from silent to everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Off => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Parse a level name, falling back to `Debug` for unknown names
    pub fn parse_lossy(name: &str) -> Level {
        match name.parse() {
            Ok(level) => level,
            Err(e) => {
                tracing::warn!(error = %e, "default level debug will be used");
                Level::Debug
            }
        }
    }

    fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::Off,
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Level::Off),
            "error" => Ok(Level::Error),
            "warn" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Kind of a single log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Untagged output, never filtered
    Print,
    /// Written just before the process exits, never filtered
    Fatal,
    Error,
    Warn,
    Info,
    Debug,
}

impl Tag {
    /// Threshold this tag needs, or `None` if it is always emitted
    pub fn level(&self) -> Option<Level> {
        match self {
            Tag::Print | Tag::Fatal => None,
            Tag::Error => Some(Level::Error),
            Tag::Warn => Some(Level::Warn),
            Tag::Info => Some(Level::Info),
            Tag::Debug => Some(Level::Debug),
        }
    }

    /// Marker written in front of the message
    pub fn marker(&self) -> &'static str {
        match self {
            Tag::Print => "\t[LOG]",
            Tag::Fatal => "\t[PANIC]",
            Tag::Error => "\t[ERROR]",
            Tag::Warn => "\t[WARN]",
            Tag::Info => "\t[INFO]",
            Tag::Debug => "\t[DEBUG]",
        }
    }
}

/// Threshold that can be changed while other threads are logging
#[derive(Debug)]
pub struct AtomicLevel(AtomicU8);

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self(AtomicU8::new(level as u8))
    }

    pub fn load(&self) -> Level {
        Level::from_u8(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, level: Level) {
        self.0.store(level as u8, Ordering::Relaxed);
    }

    /// Whether a record with this tag passes the threshold
    pub fn enables(&self, tag: Tag) -> bool {
        match tag.level() {
            None => true,
            Some(needed) => needed <= self.load(),
        }
    }
}

impl Default for AtomicLevel {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
