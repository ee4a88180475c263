// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the rotating writer

use std::io;
use thiserror::Error;

/// Errors that can occur while building or writing a rotating log
#[derive(Debug, Error)]
pub enum RollingError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("rolling file is closed")]
    Closed,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("append failed after {written} bytes: {source}")]
    Append {
        written: usize,
        #[source]
        source: io::Error,
    },
}

impl RollingError {
    /// Bytes that reached the fragment before the failure
    pub fn bytes_written(&self) -> usize {
        match self {
            RollingError::Append { written, .. } => *written,
            _ => 0,
        }
    }
}

impl From<RollingError> for io::Error {
    fn from(err: RollingError) -> Self {
        match err {
            RollingError::Io(e) => e,
            RollingError::Append { source, .. } => source,
            RollingError::Closed => io::Error::new(io::ErrorKind::BrokenPipe, err),
            RollingError::InvalidConfiguration(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
        }
    }
}
