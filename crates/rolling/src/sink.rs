// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Closable output sinks
//!
//! A logger writes through [`WriteClose`]. Plain writers that have nothing
//! to release are lifted into it with [`NopCloser`].

use crate::RotatingFileWriter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A byte sink that owns a releasable resource
pub trait WriteClose: Write + Send {
    /// Release the underlying resource
    fn close(&mut self) -> io::Result<()>;
}

/// Adapter giving any writer a no-op `close`
#[derive(Debug, Default)]
pub struct NopCloser<W> {
    inner: W,
}

impl<W> NopCloser<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for NopCloser<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Send> WriteClose for NopCloser<W> {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A single, never-rotated log file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if absent
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "file sink is closed"))
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl WriteClose for FileSink {
    fn close(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(file) => file.sync_all(),
            None => Ok(()),
        }
    }
}

impl WriteClose for RotatingFileWriter {
    fn close(&mut self) -> io::Result<()> {
        RotatingFileWriter::close(self).map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
