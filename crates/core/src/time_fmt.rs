// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formats used in log lines and rotated file names.

use chrono::{DateTime, Local};

/// Millisecond precision, used as the line prefix: `2026-01-30 08:14:09.123`
pub const LINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Nanosecond precision, filesystem-safe: `2026-01-30_08-14-09.123456789`
pub const ROTATION_FORMAT: &str = "%Y-%m-%d_%H-%M-%S%.9f";

/// Format a timestamp for the start of a log line.
pub fn format_line_time(at: &DateTime<Local>) -> String {
    at.format(LINE_FORMAT).to_string()
}

/// Format a rotation instant for use as a file name suffix.
pub fn format_rotation_suffix(at: &DateTime<Local>) -> String {
    at.format(ROTATION_FORMAT).to_string()
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
