//! Logger configuration specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn toml_config_builds_rotating_logger() {
    let logs = LogDir::new();
    let path = logs.path().join("log.toml");
    std::fs::write(
        &path,
        format!(
            "dir = {:?}\nname = \"app\"\nmax_fragments = 2\nmax_fragment_size = 16\nlevel = \"warn\"\nflags = []\n",
            logs.path().display().to_string()
        ),
    )
    .unwrap();

    let logger = LogConfig::load(&path).unwrap().build().unwrap();
    fraglog::info!(logger, "filtered");
    fraglog::warn!(logger, "kept one");
    fraglog::error!(logger, "kept two");
    logger.close().unwrap();

    assert_eq!(logs.fragments(), vec![0, 1]);
    assert_eq!(logs.fragment(1), "\t[WARN]kept one\n");
    assert_eq!(logs.fragment(0), "\t[ERROR]kept two\n");
}

#[test]
fn invalid_config_values_surface_at_build() {
    let mut config = LogConfig::new(LogDir::new().path());
    config.max_fragments = 0;

    let err = config.build().unwrap_err();

    assert!(err.to_string().contains("max fragment count = 0"));
}
