// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlog-storage: rotation policy and file persistence

mod config;
mod error;
mod file;
mod policy;
mod sink;

#[cfg(any(test, feature = "test-support"))]
pub mod memory;

pub use config::{
    FileSinkConfig, SinkConfig, SinkParts, DEFAULT_MAX_DAY, DEFAULT_MAX_LINE, DEFAULT_MAX_SIZE,
};
pub use error::{ConfigError, SinkError};
pub use file::FileSink;
pub use policy::{RotationCounters, RotationPolicy, RotationTrigger, Thresholds};
pub use sink::LogSink;
