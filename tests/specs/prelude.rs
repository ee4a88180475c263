//! Shared helpers for specs

pub use fraglog::{Flags, Level, LogConfig, Logger, RollingError, RotatingFileWriter};

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding one log stream named `app`
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn base(&self) -> PathBuf {
        self.dir.path().join("app")
    }

    pub fn writer(&self, max_fragment_count: usize, max_fragment_size: u64) -> RotatingFileWriter {
        RotatingFileWriter::new(self.base(), max_fragment_count, max_fragment_size).unwrap()
    }

    pub fn fragment_path(&self, index: usize) -> PathBuf {
        fraglog_rolling::fragment_path(&self.base(), index)
    }

    /// Write a fragment directly, as a previous process would have
    pub fn seed(&self, index: usize, content: &str) {
        std::fs::write(self.fragment_path(index), content).unwrap();
    }

    pub fn fragment(&self, index: usize) -> String {
        std::fs::read_to_string(self.fragment_path(index)).unwrap()
    }

    /// Indices of fragment files present on disk
    pub fn fragments(&self) -> Vec<usize> {
        let mut found: Vec<usize> = std::fs::read_dir(self.path())
            .unwrap()
            .filter_map(|entry| {
                let name = entry.unwrap().file_name().to_string_lossy().into_owned();
                name.strip_prefix("app.")?
                    .strip_suffix(".log")?
                    .parse()
                    .ok()
            })
            .collect();
        found.sort_unstable();
        found
    }
}
