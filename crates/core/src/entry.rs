// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Values that flow through the pipeline: single entries and write batches.

use chrono::{DateTime, Local};

/// One submitted log line with its arrival time.
///
/// The text already carries its trailing newline and any formatting prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self { text: text.into(), timestamp }
    }

    /// Size in bytes, as counted by the size threshold.
    pub fn byte_len(&self) -> u64 {
        self.text.len() as u64
    }
}

/// A contiguous run of entries written with a single sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBatch {
    /// Entry texts concatenated in arrival order
    pub text: String,
    /// Timestamp of the newest entry folded into the batch
    pub timestamp: DateTime<Local>,
    pub entry_count: usize,
    /// The file must be rotated once this batch has been written
    pub forces_rotation: bool,
}

impl LogBatch {
    /// A batch holding exactly one entry.
    pub fn single(entry: LogEntry, forces_rotation: bool) -> Self {
        Self { text: entry.text, timestamp: entry.timestamp, entry_count: 1, forces_rotation }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
