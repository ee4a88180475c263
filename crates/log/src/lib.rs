// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fraglog: leveled logging over a rotating file writer
//!
//! This crate provides:
//! - `Logger`, a leveled logger over any closable sink
//! - Record headers (prefix, timestamp, caller location)
//! - TOML configuration for rotating file loggers
//! - A `tracing` layer that writes into the same rotating files

mod macros;

pub mod config;
pub mod header;
pub mod level;
pub mod logger;
pub mod subscriber;

pub use config::{ConfigError, LogConfig};
pub use header::Flags;
pub use level::{AtomicLevel, Level, ParseLevelError, Tag};
pub use logger::{program_name, Logger};

// Re-export the writer so callers need only one dependency
pub use fraglog_rolling::{FileSink, NopCloser, RollingError, RotatingFileWriter, WriteClose};
