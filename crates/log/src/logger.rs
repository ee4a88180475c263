// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leveled logger over a closable sink
//!
//! There is no process-wide logger. Build one at startup and hand it to
//! whatever needs it, typically in an `Arc`.

use crate::header::{format_header, Flags};
use crate::level::{AtomicLevel, Level, Tag};
use chrono::Utc;
use fraglog_rolling::{FileSink, NopCloser, RollingError, RotatingFileWriter, WriteClose};
use std::fmt::{self, Write as _};
use std::io::{self, Write as _};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Stem used when the program name cannot be determined
const FALLBACK_NAME: &str = "fraglog";

/// A leveled logger writing whole records to one sink
pub struct Logger {
    inner: Mutex<Inner>,
    level: AtomicLevel,
}

struct Inner {
    out: Box<dyn WriteClose>,
    prefix: String,
    flags: Flags,
}

impl Logger {
    /// Create a logger with standard (date and time) header flags
    pub fn new(sink: impl WriteClose + 'static, prefix: impl Into<String>, level: Level) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out: Box::new(sink),
                prefix: prefix.into(),
                flags: Flags::STD,
            }),
            level: AtomicLevel::new(level),
        }
    }

    /// Logger on standard output at `Debug`
    pub fn stdout() -> Self {
        Self::new(NopCloser::new(io::stdout()), "", Level::Debug)
    }

    /// Logger appending to a single file
    pub fn file(path: impl Into<PathBuf>, level: Level) -> io::Result<Self> {
        Ok(Self::new(FileSink::open(path)?, "", level))
    }

    /// Logger over a rotating stream named after the running program
    ///
    /// Fragments land in `dir` as `<program>.<i>.log`. Records carry the
    /// caller's file and line.
    pub fn rolling(
        dir: impl AsRef<Path>,
        max_fragment_count: usize,
        max_fragment_size: u64,
        level: Level,
    ) -> Result<Self, RollingError> {
        let base_path = dir.as_ref().join(program_name());
        let writer = RotatingFileWriter::new(base_path, max_fragment_count, max_fragment_size)?;
        Ok(Self::new(writer, "", level).with_flags(Flags::STD | Flags::SHORT_FILE))
    }

    /// Replace the header flags
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.inner
            .get_mut()
            .unwrap_or_else(|e| e.into_inner())
            .flags = flags;
        self
    }

    pub fn flags(&self) -> Flags {
        self.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.lock().flags = flags;
    }

    pub fn prefix(&self) -> String {
        self.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.lock().prefix = prefix.into();
    }

    pub fn level(&self) -> Level {
        self.level.load()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level);
    }

    /// Whether a record with this tag would be written
    pub fn enabled(&self, tag: Tag) -> bool {
        self.level.enables(tag)
    }

    /// Write one record if its tag passes the level threshold
    ///
    /// The record is header, tag marker, then message, terminated by a
    /// newline if the message lacks one. It reaches the sink in a single
    /// `write_all`.
    #[track_caller]
    pub fn log(&self, tag: Tag, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled(tag) {
            return Ok(());
        }

        let location = Location::caller();
        let now = Utc::now();

        // Formatting runs user Display impls, which may log through self
        let mut message = String::new();
        let _ = message.write_fmt(args);

        let mut inner = self.lock();
        let mut record = String::with_capacity(message.len() + 64);
        format_header(&mut record, &inner.prefix, inner.flags, now, location);
        record.push_str(tag.marker());
        record.push_str(&message);
        if !record.ends_with('\n') {
            record.push('\n');
        }

        inner.out.write_all(record.as_bytes())
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Tag::Error, args);
    }

    #[track_caller]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Tag::Warn, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Tag::Info, args);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Tag::Debug, args);
    }

    /// Untagged record, written regardless of level
    #[track_caller]
    pub fn print(&self, args: fmt::Arguments<'_>) {
        let _ = self.log(Tag::Print, args);
    }

    /// Write a record, release the sink, and exit the process with status 1
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.log(Tag::Fatal, args);
        let _ = self.close();
        std::process::exit(1)
    }

    /// Close the underlying sink
    pub fn close(&self) -> io::Result<()> {
        self.lock().out.close()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("Logger")
            .field("prefix", &inner.prefix)
            .field("flags", &inner.flags)
            .field("level", &self.level.load())
            .finish_non_exhaustive()
    }
}

/// File name of the running program
pub fn program_name() -> String {
    let arg0 = std::env::args_os().next();
    arg0.as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
