// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use rlog_core::Level;

/// Minimum level override (`RLOG_LEVEL`), e.g. `warn`. Unparseable values are ignored.
pub fn level() -> Option<Level> {
    std::env::var("RLOG_LEVEL").ok().and_then(|s| s.parse::<Level>().ok())
}

/// Ingestion queue capacity override (`RLOG_QUEUE_CAPACITY`)
pub fn queue_capacity() -> Option<usize> {
    std::env::var("RLOG_QUEUE_CAPACITY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
