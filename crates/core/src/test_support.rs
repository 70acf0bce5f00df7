// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use chrono::{DateTime, Local, TimeDelta, TimeZone};

use crate::LogEntry;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for pipeline values.
pub mod strategies {
    use proptest::prelude::*;

    /// A single log line: printable text plus the trailing newline.
    pub fn arb_line() -> impl Strategy<Value = String> {
        "[ -~]{0,40}".prop_map(|s| format!("{s}\n"))
    }

    /// Per-entry gaps in seconds between consecutive entries.
    pub fn arb_gaps(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..100_000, 1..max_len)
    }
}

// ── Entry factory functions ─────────────────────────────────────────────

/// Fixed origin for deterministic timestamps.
pub fn epoch() -> DateTime<Local> {
    Local.timestamp_opt(1_769_760_849, 0).single().unwrap_or_else(Local::now)
}

/// `epoch()` shifted by `secs` seconds.
pub fn at_secs(secs: i64) -> DateTime<Local> {
    epoch() + TimeDelta::seconds(secs)
}

/// An entry stamped `secs` seconds after `epoch()`.
pub fn entry_at(text: &str, secs: i64) -> LogEntry {
    LogEntry::new(text, at_secs(secs))
}
