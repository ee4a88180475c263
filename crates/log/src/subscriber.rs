// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tracing` output into a rotating log
//!
//! Events are formatted by `tracing-subscriber` and handed to a background
//! worker that owns the writer. Keep the returned guard alive: dropping it
//! flushes pending events.

use crate::config::ConfigError;
use fraglog_rolling::RotatingFileWriter;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Formatting layer writing plain-text events into `writer`
pub fn file_layer<S>(writer: RotatingFileWriter) -> (impl Layer<S>, WorkerGuard)
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let (non_blocking, guard) = tracing_appender::non_blocking(writer);
    let layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
    (layer, guard)
}

/// Install a global subscriber writing into `writer`
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`.
pub fn init(writer: RotatingFileWriter, default_filter: &str) -> Result<WorkerGuard, ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let (layer, guard) = file_layer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
#[path = "subscriber_tests.rs"]
mod tests;
