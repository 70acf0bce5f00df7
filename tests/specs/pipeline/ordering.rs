//! Ordering specs
//!
//! Concurrent producers interleave, but each producer's own lines stay in
//! submission order.

use std::sync::Arc;

use crate::prelude::*;
use crate::prelude::assert_eq;

const PRODUCERS: usize = 8;
const PER_PRODUCER: usize = 1_000;

fn produce(logger: Arc<Logger>) -> Vec<std::thread::JoinHandle<()>> {
    (0..PRODUCERS)
        .map(|p| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for i in 0..PER_PRODUCER {
                    logger.submit(&format!("p{p} {i}"), Level::Custom);
                }
            })
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn each_producer_stream_keeps_its_order() {
    let logs = LogDir::new();
    let options = LoggerOptions::new().capacity(64);
    let logger = Arc::new(Logger::configure(options, logs.config()).unwrap());

    let producers = produce(Arc::clone(&logger));
    tokio::task::spawn_blocking(move || producers.into_iter().for_each(|p| p.join().unwrap()))
        .await
        .unwrap();
    logger.close().await.unwrap();

    let written = logs.active();
    assert_eq!(written.lines().count(), PRODUCERS * PER_PRODUCER);
    for p in 0..PRODUCERS {
        let prefix = format!("p{p} ");
        let seen: Vec<usize> = written
            .lines()
            .filter_map(|line| line.strip_prefix(&prefix))
            .map(|i| i.parse().unwrap())
            .collect();
        assert_eq!(seen, (0..PER_PRODUCER).collect::<Vec<_>>(), "producer {p}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn order_holds_across_rotated_files() {
    let logs = LogDir::new();
    let config = logs.config().is_allow_max_line(true).max_line(50);
    let logger = Logger::configure(LoggerOptions::new(), config).unwrap();

    for i in 0..500 {
        logger.submit(&format!("line {i}"), Level::Custom);
    }
    logger.close().await.unwrap();

    assert!(!logs.rotated_names().is_empty());
    assert_eq!(logs.all(), numbered("line ", 500));
}
