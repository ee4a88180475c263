// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record header: prefix, timestamp, and caller location

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Deserialize;
use std::fmt::{self, Write};
use std::ops::{BitOr, BitOrAssign};
use std::panic::Location;

/// Which header fields precede each record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Vec<FlagName>")]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// `01:23:23.123123`, implies `TIME`
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line: `/a/b/c/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path component and line: `main.rs:23`; wins over `LONG_FILE`
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Timestamps in UTC rather than local time
    pub const UTC: Flags = Flags(1 << 5);
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

/// Flag names accepted in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagName {
    Date,
    Time,
    Microseconds,
    Longfile,
    Shortfile,
    Utc,
    Std,
}

impl From<FlagName> for Flags {
    fn from(name: FlagName) -> Flags {
        match name {
            FlagName::Date => Flags::DATE,
            FlagName::Time => Flags::TIME,
            FlagName::Microseconds => Flags::MICROSECONDS,
            FlagName::Longfile => Flags::LONG_FILE,
            FlagName::Shortfile => Flags::SHORT_FILE,
            FlagName::Utc => Flags::UTC,
            FlagName::Std => Flags::STD,
        }
    }
}

impl From<Vec<FlagName>> for Flags {
    fn from(names: Vec<FlagName>) -> Flags {
        names
            .into_iter()
            .fold(Flags::NONE, |acc, name| acc | Flags::from(name))
    }
}

/// Append the header for a record written at `now` from `location`
pub fn format_header(
    buf: &mut String,
    prefix: &str,
    flags: Flags,
    now: DateTime<Utc>,
    location: &Location<'_>,
) {
    buf.push_str(prefix);

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        if flags.contains(Flags::UTC) {
            push_timestamp(buf, flags, &now);
        } else {
            push_timestamp(buf, flags, &now.with_timezone(&Local));
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let file = location.file();
        let file = if flags.contains(Flags::SHORT_FILE) {
            file.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(file)
        } else {
            file
        };
        let _ = write!(buf, "{}:{}: ", file, location.line());
    }
}

fn push_timestamp<Tz: TimeZone>(buf: &mut String, flags: Flags, at: &DateTime<Tz>)
where
    Tz::Offset: fmt::Display,
{
    if flags.contains(Flags::DATE) {
        let _ = write!(buf, "{} ", at.format("%Y/%m/%d"));
    }
    if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
        let _ = write!(buf, "{}", at.format("%H:%M:%S"));
        if flags.contains(Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", at.format("%.6f"));
        }
        buf.push(' ');
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
