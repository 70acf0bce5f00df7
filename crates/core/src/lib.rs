// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rlog-core: values, levels, and time handling shared by the rlog crates

pub mod macros;

pub mod clock;
pub mod entry;
pub mod level;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use entry::{LogBatch, LogEntry};
pub use level::{AtomicLevel, Level, ParseLevelError};
pub use time_fmt::{format_line_time, format_rotation_suffix};
