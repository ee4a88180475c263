//! Writer lifecycle specs
//!
//! Construction, resume across restarts, and close.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn zero_fragment_count_fails_before_touching_disk() {
    let logs = LogDir::new();
    let base = logs.path().join("nested").join("app");

    let err = RotatingFileWriter::new(&base, 0, 10).unwrap_err();

    assert!(matches!(err, RollingError::InvalidConfiguration(_)));
    assert!(!logs.path().join("nested").exists());
}

#[test]
fn directory_base_path_is_rejected() {
    let logs = LogDir::new();
    let base = format!("{}/", logs.path().display());

    let err = RotatingFileWriter::new(base, 3, 10).unwrap_err();

    assert!(err.to_string().contains("file name is required"));
}

#[test]
fn construction_opens_nothing() {
    let logs = LogDir::new();
    let _writer = logs.writer(3, 10);

    assert_eq!(logs.fragments(), Vec::<usize>::new());
}

#[test]
fn restart_appends_to_under_sized_fragment() {
    let logs = LogDir::new();
    logs.seed(0, "abc");

    let writer = logs.writer(3, 10);
    writer.append(b"def").unwrap();

    assert_eq!(logs.fragment(0), "abcdef");
    assert_eq!(writer.active_fragment_size(), 6);
    assert_eq!(logs.fragments(), vec![0]);
}

#[test]
fn restart_over_full_fragment_rotates() {
    let logs = LogDir::new();
    logs.seed(0, "0123456789");
    logs.seed(1, "older");

    let writer = logs.writer(3, 10);
    writer.append(b"new").unwrap();

    assert_eq!(logs.fragment(0), "new");
    assert_eq!(logs.fragment(1), "0123456789");
    assert_eq!(logs.fragment(2), "older");
}

#[test]
fn close_twice_then_write_fails() {
    let logs = LogDir::new();
    let writer = logs.writer(3, 10);
    writer.append(b"kept").unwrap();

    writer.close().unwrap();
    writer.close().unwrap();
    let err = writer.append(b"lost").unwrap_err();

    assert!(matches!(err, RollingError::Closed));
    assert_eq!(err.bytes_written(), 0);
    assert_eq!(logs.fragment(0), "kept");
}
