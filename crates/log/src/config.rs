// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger configuration loaded from TOML
//!
//! ```toml
//! dir = "/var/log/myapp"
//! name = "api"
//! max_fragments = 10
//! max_fragment_size = 67108864
//! level = "info"
//! flags = ["date", "time", "shortfile"]
//! ```

use crate::header::Flags;
use crate::level::Level;
use crate::logger::{program_name, Logger};
use fraglog_rolling::{RollingError, RotatingFileWriter};
use serde::{Deserialize, Deserializer};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides `dir`
pub const ENV_DIR: &str = "FRAGLOG_DIR";
/// Overrides `level`
pub const ENV_LEVEL: &str = "FRAGLOG_LEVEL";

const DEFAULT_MAX_FRAGMENTS: usize = 10;
const DEFAULT_MAX_FRAGMENT_SIZE: u64 = 64 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("rolling log error: {0}")]
    Rolling(#[from] RollingError),
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Settings for a rotating file logger
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Directory holding the fragments
    pub dir: PathBuf,
    /// Fragment stem; the program name when absent
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_fragments")]
    pub max_fragments: usize,
    /// Bytes per fragment before rotation
    #[serde(default = "default_max_fragment_size")]
    pub max_fragment_size: u64,
    #[serde(default, deserialize_with = "lossy_level")]
    pub level: Level,
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_flags")]
    pub flags: Flags,
}

fn default_max_fragments() -> usize {
    DEFAULT_MAX_FRAGMENTS
}

fn default_max_fragment_size() -> u64 {
    DEFAULT_MAX_FRAGMENT_SIZE
}

fn default_flags() -> Flags {
    Flags::STD | Flags::SHORT_FILE
}

fn lossy_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Level, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(Level::parse_lossy(&name))
}

impl LogConfig {
    /// Defaults for a stream in `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: None,
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            max_fragment_size: DEFAULT_MAX_FRAGMENT_SIZE,
            level: Level::default(),
            prefix: String::new(),
            flags: default_flags(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Apply `FRAGLOG_DIR` / `FRAGLOG_LEVEL` as returned by `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(ENV_DIR).filter(|d| !d.is_empty()) {
            self.dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = Level::parse_lossy(&level);
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_process_env(&mut self) {
        self.apply_env_overrides(|key| std::env::var(key).ok());
    }

    /// Base path the fragment names derive from
    pub fn base_path(&self) -> PathBuf {
        match &self.name {
            Some(name) => self.dir.join(name),
            None => self.dir.join(program_name()),
        }
    }

    /// Build a logger over a rotating writer
    pub fn build(&self) -> Result<Logger, ConfigError> {
        let writer = RotatingFileWriter::new(
            self.base_path(),
            self.max_fragments,
            self.max_fragment_size,
        )?;
        Ok(Logger::new(writer, self.prefix.clone(), self.level).with_flags(self.flags))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
