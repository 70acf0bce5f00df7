// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::sync::Arc;

use rlog_core::Level;

use crate::env;
use crate::report::{ErrorReporter, TracingReporter};

/// Default ingestion queue capacity.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Pipeline settings that are not part of the sink payload.
#[derive(Clone)]
pub struct LoggerOptions {
    pub(crate) capacity: usize,
    pub(crate) level: Level,
    pub(crate) reporter: Arc<dyn ErrorReporter>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: Level::Custom,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Defaults with `RLOG_LEVEL` / `RLOG_QUEUE_CAPACITY` applied.
    pub fn from_env() -> Self {
        let mut options = Self::new();
        if let Some(level) = env::level() {
            options.level = level;
        }
        if let Some(capacity) = env::queue_capacity() {
            options.capacity = capacity;
        }
        options
    }

    rlog_core::setters! {
        /// Ingestion queue capacity; `submit` blocks once it is full
        capacity: usize,
        /// Minimum level for the severity methods
        level: Level,
    }

    pub fn reporter(mut self, reporter: impl ErrorReporter) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    pub(crate) fn capacity_value(&self) -> usize {
        self.capacity
    }

    pub(crate) fn level_value(&self) -> Level {
        self.level
    }
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("capacity", &self.capacity)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
