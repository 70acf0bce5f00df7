//! Age rotation specs
//!
//! Driven by a fake clock; the configured `maxDay` is the threshold.

use std::time::Duration;

use crate::prelude::*;
use crate::prelude::assert_eq;

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

fn day_limited(logs: &LogDir, days: u32, clock: &FakeClock) -> Logger<FakeClock> {
    let config = logs.config().is_allow_max_day(true).max_day(days);
    Logger::configure_with_clock(LoggerOptions::new(), config, clock.clone()).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn entry_past_max_age_rotates_with_clock_suffix() {
    let logs = LogDir::new();
    let clock = FakeClock::new();
    let logger = day_limited(&logs, 1, &clock);

    logger.submit("monday", Level::Custom);
    clock.advance(DAY + Duration::from_secs(1));
    logger.submit("tuesday", Level::Custom);
    logger.close().await.unwrap();

    let expected = format!("{LOG_NAME}.{}", format_rotation_suffix(&clock.now()));
    assert_eq!(logs.rotated_names(), vec![expected]);
    assert_eq!(logs.all(), "monday\ntuesday\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn configured_max_day_is_honored() {
    let logs = LogDir::new();
    let clock = FakeClock::new();
    let logger = day_limited(&logs, 3, &clock);

    logger.submit("start", Level::Custom);
    clock.advance(DAY * 2);
    logger.submit("two days in", Level::Custom);
    clock.advance(DAY * 2);
    logger.submit("four days in", Level::Custom);
    logger.close().await.unwrap();

    assert_eq!(logs.rotated_names().len(), 1);
    assert!(logs.rotated()[0].starts_with("start\ntwo days in\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn age_is_measured_from_the_last_rotation() {
    let logs = LogDir::new();
    let clock = FakeClock::new();
    let logger = day_limited(&logs, 1, &clock);

    logger.submit("a", Level::Custom);
    clock.advance(DAY * 2);
    logger.submit("b", Level::Custom);
    clock.advance(DAY / 2);
    logger.submit("c", Level::Custom);
    logger.close().await.unwrap();

    assert_eq!(logs.rotated_names().len(), 1);
    assert_eq!(logs.all(), "a\nb\nc\n");
}
