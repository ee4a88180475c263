// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fragment file naming
//!
//! Fragment `i` of a stream with base path `<base>` lives at `<base>.<i>.log`.
//! Fragment 0 is the one being appended to; higher indices are older.

use crate::RollingError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Path of fragment `index` for the given base path
pub fn fragment_path(base_path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(base_path.as_os_str());
    name.push(format!(".{}.log", index));
    PathBuf::from(name)
}

/// Split a base path into its directory and file stem
///
/// Fails when the path names a directory rather than a file: empty, ending
/// in a separator, or ending in `.`/`..`/a root.
pub fn split_base_path(base_path: &Path) -> Result<(PathBuf, OsString), RollingError> {
    let invalid = || {
        RollingError::InvalidConfiguration(format!(
            "invalid base path = {}, file name is required",
            base_path.display()
        ))
    };

    let raw = base_path.as_os_str().as_encoded_bytes();
    let last = raw
        .rsplit(|b| std::path::is_separator(char::from(*b)))
        .next()
        .unwrap_or_default();
    if last.is_empty() || last == b"." || last == b".." {
        return Err(invalid());
    }

    let stem = base_path.file_name().ok_or_else(invalid)?.to_os_string();
    let dir = base_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok((dir, stem))
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
