//! Subscriber setup tests
//!
//! The global subscriber can be installed once per process, so this binary
//! holds a single test.
//!
//! Run with: cargo test -p integration-tests --test tracing_tests

use roster_common::telemetry::LOG_FILE_NAME;
use roster_common::{try_init_tracing_with_config, AppConfig, TracingError};
use serde_json::json;

#[test]
fn test_json_output_still_writes_plain_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let doc = json!({
        "coc_token": "coc-secret",
        "notion_token": "notion-secret",
        "clan_tag": "#2PP",
        "logs_dir": dir.path().join("logs"),
        "log_json": true,
        "log_level": "debug"
    });
    let tracing_config = AppConfig::from_json(&doc.to_string())
        .unwrap()
        .tracing_config()
        .unwrap();
    assert!(tracing_config.json);

    try_init_tracing_with_config(tracing_config.clone()).unwrap();
    tracing::warn!(clan = "#2PP", "subscriber ready");

    let content = std::fs::read_to_string(dir.path().join("logs").join(LOG_FILE_NAME)).unwrap();
    assert!(content.contains("subscriber ready"));
    assert!(!content.trim_start().starts_with('{'));

    assert!(matches!(
        try_init_tracing_with_config(tracing_config),
        Err(TracingError::AlreadyInitialized)
    ));
}
