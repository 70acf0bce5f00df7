// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rotation policy: decides when the active file crosses a rotation boundary.
//!
//! Each entry is run through an ordered, short-circuiting chain:
//!
//! 1. **Age**: `entry.timestamp - anchor > max_age`. Counters untouched.
//! 2. **Lines**: `lines += 1`, then `lines > max_lines`.
//! 3. **Bytes**: `bytes += len(text)`, then `bytes > max_bytes`.
//!
//! A stage runs only when it is enabled and no earlier stage triggered. When
//! one triggers, both counters drop to zero and the anchor moves to the
//! entry's timestamp, so the triggering entry counts toward neither the old
//! nor the new cycle for the stages it skipped.

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};
use rlog_core::LogEntry;

/// Rotation thresholds; `None` disables a stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thresholds {
    pub max_lines: Option<u64>,
    pub max_bytes: Option<u64>,
    pub max_age: Option<Duration>,
}

/// Running totals since the last rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCounters {
    pub lines: u64,
    pub bytes: u64,
    pub anchor: DateTime<Local>,
}

/// Which stage of the chain crossed its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationTrigger {
    Age,
    Lines,
    Bytes,
}

rlog_core::named_enum! {
    RotationTrigger {
        Age => "age",
        Lines => "lines",
        Bytes => "bytes",
    }
}

#[derive(Debug, Clone)]
pub struct RotationPolicy {
    thresholds: Thresholds,
    counters: RotationCounters,
}

impl RotationPolicy {
    pub fn new(thresholds: Thresholds, anchor: DateTime<Local>) -> Self {
        Self { thresholds, counters: RotationCounters { lines: 0, bytes: 0, anchor } }
    }

    /// A policy that never rotates.
    pub fn never(anchor: DateTime<Local>) -> Self {
        Self::new(Thresholds::default(), anchor)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn counters(&self) -> &RotationCounters {
        &self.counters
    }

    /// Run `entry` through the chain; true when a rotation boundary is crossed.
    pub fn evaluate(&mut self, entry: &LogEntry) -> bool {
        self.check(entry).is_some()
    }

    /// Like [`evaluate`](Self::evaluate), reporting which stage triggered.
    pub fn check(&mut self, entry: &LogEntry) -> Option<RotationTrigger> {
        let trigger = self
            .age_stage(entry)
            .or_else(|| self.lines_stage())
            .or_else(|| self.bytes_stage(entry));
        if trigger.is_some() {
            self.counters = RotationCounters { lines: 0, bytes: 0, anchor: entry.timestamp };
        }
        trigger
    }

    fn age_stage(&self, entry: &LogEntry) -> Option<RotationTrigger> {
        let max_age = self.thresholds.max_age?;
        let max_age = TimeDelta::from_std(max_age).unwrap_or(TimeDelta::MAX);
        (entry.timestamp.signed_duration_since(self.counters.anchor) > max_age)
            .then_some(RotationTrigger::Age)
    }

    fn lines_stage(&mut self) -> Option<RotationTrigger> {
        let max_lines = self.thresholds.max_lines?;
        self.counters.lines += 1;
        (self.counters.lines > max_lines).then_some(RotationTrigger::Lines)
    }

    fn bytes_stage(&mut self, entry: &LogEntry) -> Option<RotationTrigger> {
        let max_bytes = self.thresholds.max_bytes?;
        self.counters.bytes += entry.byte_len();
        (self.counters.bytes > max_bytes).then_some(RotationTrigger::Bytes)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
