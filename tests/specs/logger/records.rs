//! Logger record specs
//!
//! A logger over a rotating writer produces whole, filtered records.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn records_are_filtered_and_rotated() {
    let logs = LogDir::new();
    let logger = Logger::new(logs.writer(2, 32), "", Level::Info).with_flags(Flags::NONE);

    fraglog::debug!(logger, "not written");
    fraglog::info!(logger, "first record");
    fraglog::warn!(logger, "second record");
    fraglog::error!(logger, "third record");
    logger.close().unwrap();

    assert_eq!(logs.fragments(), vec![0, 1]);
    assert_eq!(
        logs.fragment(1),
        "\t[INFO]first record\n\t[WARN]second record\n"
    );
    assert_eq!(logs.fragment(0), "\t[ERROR]third record\n");
}

#[test]
fn header_carries_prefix_time_and_call_site() {
    let logs = LogDir::new();
    let logger = Logger::new(logs.writer(2, 1024), "svc ", Level::Debug)
        .with_flags(Flags::STD | Flags::SHORT_FILE | Flags::UTC);

    let line = line!() + 1;
    fraglog::info!(logger, "ready");
    logger.close().unwrap();

    let record = logs.fragment(0);
    let suffix = format!("records.rs:{}: \t[INFO]ready\n", line);
    assert!(record.starts_with("svc "), "{:?}", record);
    assert!(record.ends_with(&suffix), "{:?}", record);
    // "svc " + "YYYY/MM/DD HH:MM:SS " + suffix
    assert_eq!(record.len(), 4 + 20 + suffix.len());
}

#[test]
fn logging_after_close_reports_error() {
    let logs = LogDir::new();
    let logger = Logger::new(logs.writer(2, 1024), "", Level::Debug);

    logger.close().unwrap();
    let err = logger
        .log(fraglog::Tag::Info, format_args!("late"))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
}
