// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline counters shared between the logger handle and its tasks.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub(crate) struct PipelineStats {
    entries_submitted: AtomicU64,
    entries_dropped: AtomicU64,
    entries_written: AtomicU64,
    batches_written: AtomicU64,
    bytes_written: AtomicU64,
    rotations: AtomicU64,
    write_errors: AtomicU64,
}

impl PipelineStats {
    pub(crate) fn record_submitted(&self) {
        self.entries_submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_dropped(&self, count: u64) {
        self.entries_dropped.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn record_batch(&self, entries: usize, bytes: usize) {
        self.batches_written.fetch_add(1, Ordering::Relaxed);
        self.entries_written.fetch_add(entries as u64, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_rotation(&self) {
        self.rotations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_error(&self) {
        self.write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            entries_submitted: self.entries_submitted.load(Ordering::Relaxed),
            entries_dropped: self.entries_dropped.load(Ordering::Relaxed),
            entries_written: self.entries_written.load(Ordering::Relaxed),
            batches_written: self.batches_written.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            write_errors: self.write_errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the pipeline counters.
///
/// `write_errors` counts every failed sink call (open, write, rotate, close).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub entries_submitted: u64,
    pub entries_dropped: u64,
    pub entries_written: u64,
    pub batches_written: u64,
    pub bytes_written: u64,
    pub rotations: u64,
    pub write_errors: u64,
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
