// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fraglog-rolling: size-bounded, auto-rotating log file writer
//!
//! This crate provides:
//! - `RotatingFileWriter`, an append-only writer that splits one log stream
//!   across numbered fragment files and rotates them by size
//! - The closable-sink capability (`WriteClose`) any logger can sit on top of

mod error;
pub mod fragment;
pub mod sink;
mod writer;

pub use error::RollingError;
pub use fragment::{fragment_path, split_base_path};
pub use sink::{FileSink, NopCloser, WriteClose};
pub use writer::RotatingFileWriter;
