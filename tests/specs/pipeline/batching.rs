//! Batching specs
//!
//! Under load, many entries share one write call without changing the bytes
//! that reach the file.

use crate::prelude::*;
use crate::prelude::assert_eq;

const ENTRIES: usize = 10_000;

#[tokio::test(flavor = "multi_thread")]
async fn burst_coalesces_into_fewer_writes() {
    let sink = MemorySink::new();
    let policy = RotationPolicy::never(FakeClock::new().now());
    let options = LoggerOptions::new().capacity(ENTRIES);
    let logger = Logger::with_sink(options, sink.clone(), policy).unwrap();

    for i in 0..ENTRIES {
        logger.submit(&format!("entry {i}"), Level::Custom);
    }
    logger.close().await.unwrap();

    assert_eq!(sink.contents(), numbered("entry ", ENTRIES));
    let writes = sink.write_count();
    assert!(writes < ENTRIES, "expected coalescing, got {writes} writes for {ENTRIES} entries");

    let batched: usize = sink
        .calls()
        .iter()
        .map(|call| match call {
            SinkCall::Write { entry_count, .. } => *entry_count,
            _ => 0,
        })
        .sum();
    assert_eq!(batched, ENTRIES);
    assert_eq!(logger.stats().batches_written as usize, writes);
}

#[tokio::test(flavor = "multi_thread")]
async fn batched_file_matches_line_by_line_file() {
    let burst = LogDir::new();
    let trickle = LogDir::new();
    let fast = Logger::configure(LoggerOptions::new(), burst.config()).unwrap();
    let slow = Logger::configure(LoggerOptions::new(), trickle.config()).unwrap();

    for i in 0..200 {
        let text = format!("same bytes {i}");
        fast.submit(&text, Level::Custom);
        slow.submit_async(&text, Level::Custom).await;
        tokio::task::yield_now().await;
    }
    fast.close().await.unwrap();
    slow.close().await.unwrap();

    assert_eq!(burst.active(), trickle.active());
}
