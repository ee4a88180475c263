//! Rotation specs
//!
//! Fragment ceiling, rename chain, and retention bound.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn rotates_when_ceiling_reached() {
    let logs = LogDir::new();
    let writer = logs.writer(3, 10);

    writer.append(b"12345").unwrap();
    assert_eq!(logs.fragment(0), "12345");
    assert_eq!(writer.active_fragment_size(), 5);

    writer.append(b"67890").unwrap();
    assert_eq!(logs.fragment(0), "1234567890");
    assert_eq!(writer.active_fragment_size(), 10);

    writer.append(b"X").unwrap();
    assert_eq!(logs.fragment(1), "1234567890");
    assert_eq!(logs.fragment(0), "X");
    assert_eq!(writer.active_fragment_size(), 1);
}

#[test]
fn rename_chain_shifts_sparse_history() {
    let logs = LogDir::new();
    logs.seed(0, "zero-full!");
    logs.seed(1, "one");

    let writer = logs.writer(5, 10);
    writer.append(b"fresh").unwrap();

    assert_eq!(logs.fragments(), vec![0, 1, 2]);
    assert_eq!(logs.fragment(0), "fresh");
    assert_eq!(logs.fragment(1), "zero-full!");
    assert_eq!(logs.fragment(2), "one");
}

#[test]
fn oldest_fragment_is_dropped_at_retention_limit() {
    let logs = LogDir::new();
    let writer = logs.writer(3, 4);

    for record in ["aaaa", "bbbb", "cccc", "dddd", "eeee"] {
        writer.append(record.as_bytes()).unwrap();
        assert!(logs.fragments().len() <= 3);
    }

    assert_eq!(logs.fragments(), vec![0, 1, 2]);
    assert_eq!(logs.fragment(0), "eeee");
    assert_eq!(logs.fragment(1), "dddd");
    assert_eq!(logs.fragment(2), "cccc");
}

#[test]
fn overshoot_is_bounded_by_one_write() {
    let logs = LogDir::new();
    let writer = logs.writer(10, 10);

    writer.append(b"123456789").unwrap();
    writer.append(b"abcdefghij").unwrap();
    writer.append(b"next").unwrap();

    assert_eq!(logs.fragment(1), "123456789abcdefghij");
    assert_eq!(logs.fragment(0), "next");
}
