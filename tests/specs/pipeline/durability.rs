//! Durability and shutdown specs
//!
//! Everything submitted before `close()` reaches the file; close is safe to
//! repeat; nothing is written afterwards.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test(flavor = "multi_thread")]
async fn nothing_is_lost_before_a_clean_close() {
    let logs = LogDir::new();
    let logger = Logger::configure(LoggerOptions::new(), logs.config()).unwrap();

    for i in 0..10_000 {
        logger.submit(&format!("entry {i}"), Level::Custom);
    }
    logger.close().await.unwrap();

    assert_eq!(logs.active(), numbered("entry ", 10_000));
    let stats = logger.stats();
    assert_eq!(stats.entries_submitted, 10_000);
    assert_eq!(stats.entries_written, 10_000);
    assert_eq!(stats.entries_dropped, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn second_close_is_a_no_op() {
    let logs = LogDir::new();
    let logger = Logger::configure(LoggerOptions::new(), logs.config()).unwrap();
    logger.submit("only", Level::Custom);

    logger.close().await.unwrap();
    let after_first = logs.active();
    logger.close().await.unwrap();

    assert_eq!(after_first, "only\n");
    assert_eq!(logs.active(), after_first);
}

#[tokio::test(flavor = "multi_thread")]
async fn lines_after_close_are_discarded() {
    let logs = LogDir::new();
    let logger = Logger::configure(LoggerOptions::new(), logs.config()).unwrap();
    logger.submit("before", Level::Custom);
    logger.close().await.unwrap();

    logger.submit("after", Level::Custom);
    logger.warn("after");

    assert_eq!(logs.active(), "before\n");
    assert_eq!(logger.stats().entries_dropped, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropping_every_handle_flushes_the_file() {
    let logs = LogDir::new();
    let logger = Logger::configure(LoggerOptions::new(), logs.config()).unwrap();
    logger.submit("one", Level::Custom);
    logger.submit("two", Level::Custom);
    drop(logger);

    wait_for("buffered lines on disk", || logs.active() == "one\ntwo\n").await;
}

#[tokio::test(flavor = "multi_thread")]
async fn write_failures_reach_the_reporter() {
    let reporter = RecordingReporter::new();
    let sink = MemorySink::new();
    let policy = RotationPolicy::never(FakeClock::new().now());
    let options = LoggerOptions::new().reporter(reporter.clone());
    let logger = Logger::with_sink(options, sink.clone(), policy).unwrap();

    sink.fail_next_writes(1);
    logger.submit("dropped by the sink", Level::Custom);
    wait_for("failed write", || logger.stats().write_errors == 1).await;
    logger.submit("kept", Level::Custom);
    logger.close().await.unwrap();

    assert_eq!(reporter.count(), 1);
    assert_eq!(sink.contents(), "kept\n");
}
