// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Size-bounded rotating file writer
//!
//! One logical log stream is split across fragment files
//! `<base>.0.log` .. `<base>.<max_fragment_count - 1>.log`. Fragment 0 is
//! always the active one. When it reaches the size ceiling the next write
//! drops the oldest fragment, shifts every other fragment one index older,
//! and starts a fresh fragment 0.
//!
//! The rename chain is best effort, not transactional: a crash between two
//! renames can leave a gap or a duplicate in the history. Missing files are
//! tolerated at every step so the next rotation proceeds normally.
//!
//! Only one writer may own a base path at a time. This is not enforced with
//! file locks.

use crate::fragment::{fragment_path, split_base_path};
use crate::RollingError;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Append-only writer over a set of size-bounded fragment files
#[derive(Debug)]
pub struct RotatingFileWriter {
    base_path: PathBuf,
    active_path: PathBuf,
    max_fragment_count: usize,
    max_fragment_size: u64,
    state: Mutex<WriterState>,
}

#[derive(Debug, Default)]
struct WriterState {
    file: Option<File>,
    fragment_size: u64,
    closed: bool,
}

impl RotatingFileWriter {
    /// Create a writer for the stream rooted at `base_path`
    ///
    /// Creates the parent directory if needed. No fragment is opened until
    /// the first write.
    pub fn new(
        base_path: impl Into<PathBuf>,
        max_fragment_count: usize,
        max_fragment_size: u64,
    ) -> Result<Self, RollingError> {
        let base_path = base_path.into();

        if max_fragment_count == 0 {
            return Err(RollingError::InvalidConfiguration(format!(
                "invalid max fragment count = {}",
                max_fragment_count
            )));
        }
        if max_fragment_size == 0 {
            return Err(RollingError::InvalidConfiguration(format!(
                "invalid max fragment size = {}",
                max_fragment_size
            )));
        }

        let (dir, _stem) = split_base_path(&base_path)?;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(&dir)?;
        }

        Ok(Self {
            active_path: fragment_path(&base_path, 0),
            base_path,
            max_fragment_count,
            max_fragment_size,
            state: Mutex::new(WriterState::default()),
        })
    }

    /// Append `data` to the active fragment, rotating first if it is full
    ///
    /// Returns the number of bytes written. On a failed append the error
    /// carries the bytes that did land (see [`RollingError::bytes_written`]),
    /// and they count toward the fragment size.
    pub fn append(&self, data: &[u8]) -> Result<usize, RollingError> {
        let mut state = self.lock();

        if state.closed {
            return Err(RollingError::Closed);
        }

        self.roll(&mut state)?;

        let Some(file) = state.file.as_mut() else {
            return Err(RollingError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no active fragment",
            )));
        };

        let (written, result) = write_counted(file, data);
        state.fragment_size += written as u64;

        match result {
            Ok(()) => Ok(written),
            Err(source) => Err(RollingError::Append { written, source }),
        }
    }

    /// Close the writer
    ///
    /// The first call releases the active fragment and returns any error
    /// from doing so. Later calls are no-ops. Every write after close fails
    /// with [`RollingError::Closed`].
    pub fn close(&self) -> Result<(), RollingError> {
        let mut state = self.lock();

        if state.closed {
            return Ok(());
        }

        state.closed = true;
        if let Some(file) = state.file.take() {
            file.sync_all()?;
        }
        Ok(())
    }

    /// Flush the active fragment, if one is open
    pub fn flush(&self) -> Result<(), RollingError> {
        let mut state = self.lock();
        if let Some(file) = state.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }

    /// Base path the fragment names are derived from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of fragment `index` of this stream
    pub fn fragment_path(&self, index: usize) -> PathBuf {
        fragment_path(&self.base_path, index)
    }

    pub fn max_fragment_count(&self) -> usize {
        self.max_fragment_count
    }

    pub fn max_fragment_size(&self) -> u64 {
        self.max_fragment_size
    }

    /// Bytes tracked for the active fragment
    pub fn active_fragment_size(&self) -> u64 {
        self.lock().fragment_size
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> MutexGuard<'_, WriterState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make sure an open, non-full fragment 0 is ready for the next append
    fn roll(&self, state: &mut WriterState) -> Result<(), RollingError> {
        let mut rotate = false;

        if state.file.is_some() {
            if state.fragment_size < self.max_fragment_size {
                return Ok(());
            }
            // Dropping the handle closes it
            state.file = None;
            state.fragment_size = 0;
            rotate = true;
        } else {
            match fs::metadata(&self.active_path) {
                Ok(meta) if meta.len() < self.max_fragment_size => {
                    state.fragment_size = meta.len();
                }
                Ok(_) => {
                    state.fragment_size = 0;
                    rotate = true;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    state.fragment_size = 0;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if rotate {
            self.shift_fragments()?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.active_path)?;
        state.file = Some(file);
        Ok(())
    }

    /// Drop the oldest fragment and rename every other one index older
    fn shift_fragments(&self) -> Result<(), RollingError> {
        let oldest = self.max_fragment_count - 1;
        ignore_not_found(fs::remove_file(self.fragment_path(oldest)))?;

        for index in (0..oldest).rev() {
            ignore_not_found(fs::rename(
                self.fragment_path(index),
                self.fragment_path(index + 1),
            ))?;
        }

        Ok(())
    }
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.append(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.bytes_written() > 0 => Ok(e.bytes_written()),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        RotatingFileWriter::flush(*self).map_err(Into::into)
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        RotatingFileWriter::flush(self).map_err(Into::into)
    }
}

fn ignore_not_found(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Write all of `data`, reporting how many bytes landed even on failure
fn write_counted(file: &mut File, data: &[u8]) -> (usize, io::Result<()>) {
    let mut written = 0;
    while written < data.len() {
        match file.write(&data[written..]) {
            Ok(0) => {
                return (
                    written,
                    Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write whole buffer",
                    )),
                )
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return (written, Err(e)),
        }
    }
    (written, Ok(()))
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
