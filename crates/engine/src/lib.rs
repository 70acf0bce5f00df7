// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlog-engine: the asynchronous batching and write pipeline

mod batcher;
pub mod env;
mod error;
mod format;
mod handoff;
mod logger;
mod options;
mod report;
mod stats;
mod writer;

pub use error::LogError;
pub use format::{format_line, tagged};
pub use logger::Logger;
pub use options::{LoggerOptions, DEFAULT_CAPACITY};
#[cfg(any(test, feature = "test-support"))]
pub use report::RecordingReporter;
pub use report::{ErrorReporter, TracingReporter};
pub use stats::StatsSnapshot;

pub use rlog_core::{Clock, Level, SystemClock};
pub use rlog_storage::{FileSinkConfig, LogSink, RotationPolicy, SinkConfig, Thresholds};
