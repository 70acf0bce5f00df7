//! Configuration specs
//!
//! Verify that bad payloads fail up front and start nothing.

use crate::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn empty_file_name_fails_and_starts_nothing() {
    let logs = LogDir::new();
    let payload = format!(r#"{{"filePath": "{}", "fileName": ""}}"#, logs.path().display());

    let result = Logger::from_json(LoggerOptions::new(), &payload);

    assert!(matches!(result, Err(LogError::Config(ConfigError::MissingFileName))));
    assert!(!logs.path().exists(), "no directory should be created");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_file_name_fails() {
    let result = Logger::from_json(LoggerOptions::new(), r#"{"filePath": "logs"}"#);
    assert!(matches!(result, Err(LogError::Config(ConfigError::MissingFileName))));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_payload_fails() {
    let result = Logger::from_json(LoggerOptions::new(), "");
    assert!(matches!(result, Err(LogError::Config(ConfigError::EmptyPayload))));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_payload_fails() {
    let result = Logger::from_json(LoggerOptions::new(), r#"{"fileName": "#);
    assert!(matches!(result, Err(LogError::Config(ConfigError::Json(_)))));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_mode_fails() {
    let result =
        Logger::from_json(LoggerOptions::new(), r#"{"mode": "syslog", "fileName": "a.log"}"#);
    assert!(matches!(
        result,
        Err(LogError::Config(ConfigError::UnsupportedMode(mode))) if mode == "syslog"
    ));
}

#[test]
fn configure_needs_a_runtime() {
    let logs = LogDir::new();
    let result = Logger::configure(LoggerOptions::new(), logs.config());
    assert!(matches!(result, Err(LogError::NoRuntime)));
    assert!(!logs.path().exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn full_payload_starts_a_working_logger() {
    let logs = LogDir::new();
    let payload = format!(
        r#"{{
            "filePath": "{}",
            "fileName": "{LOG_NAME}",
            "maxLine": 100000,
            "isAllowMaxLine": true,
            "maxSize": 536870912,
            "isAllowMaxSize": true,
            "maxDay": 7,
            "isAllowMaxDay": true
        }}"#,
        logs.path().display()
    );

    let logger = Logger::from_json(LoggerOptions::new(), &payload).unwrap();
    logger.info("started");
    logger.close().await.unwrap();

    let active = logs.active();
    assert!(active.ends_with("[I] started\n"), "{active:?}");
    assert!(logs.rotated_names().is_empty());
}
