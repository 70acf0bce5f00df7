// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The logger handle: ingestion, severity gating, and lifecycle.
//!
//! ```text
//! submit ──► ingestion queue ──► batching task ──► write task ──► sink
//!            (flume, bounded)    (blocking pool) ◄─ flush ─ (blocking pool)
//! ```
//!
//! Producers only format the line and enqueue it; all file I/O happens on
//! the write task. Share the handle across threads behind an `Arc`.

use std::future::Future;
use std::panic::Location;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rlog_core::{AtomicLevel, Clock, Level, LogEntry, SystemClock};
use rlog_storage::{LogSink, RotationPolicy, SinkConfig, SinkParts};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::batcher::Batcher;
use crate::error::LogError;
use crate::format::{format_line, tagged};
use crate::handoff::Ingest;
use crate::options::LoggerOptions;
use crate::stats::{PipelineStats, StatsSnapshot};
use crate::writer::Writer;

pub struct Logger<C: Clock = SystemClock> {
    entries: flume::Sender<Ingest>,
    clock: C,
    level: AtomicLevel,
    closed: AtomicBool,
    stats: Arc<PipelineStats>,
}

impl Logger<SystemClock> {
    /// Open the configured sink and start the pipeline on the current tokio runtime.
    ///
    /// Configuration and sink-open failures are returned before any task is
    /// spawned.
    pub fn configure(
        options: LoggerOptions,
        config: impl Into<SinkConfig>,
    ) -> Result<Self, LogError> {
        Self::configure_with_clock(options, config, SystemClock)
    }

    /// [`Logger::configure`] from a JSON payload such as
    /// `{"filePath": "logs", "fileName": "app.log", "maxLine": 50000}`.
    pub fn from_json(options: LoggerOptions, payload: &str) -> Result<Self, LogError> {
        Self::configure(options, SinkConfig::from_json(payload)?)
    }

    /// Start the pipeline over a caller-provided sink.
    pub fn with_sink(
        options: LoggerOptions,
        sink: impl LogSink,
        policy: RotationPolicy,
    ) -> Result<Self, LogError> {
        Self::with_sink_and_clock(options, sink, policy, SystemClock)
    }
}

impl<C: Clock> Logger<C> {
    pub fn configure_with_clock(
        options: LoggerOptions,
        config: impl Into<SinkConfig>,
        clock: C,
    ) -> Result<Self, LogError> {
        let config = config.into();
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| LogError::NoRuntime)?;
        let SinkParts { sink, policy } = config.build(clock.clone())?;
        Ok(Self::start(&runtime, options, sink, policy, clock))
    }

    pub fn with_sink_and_clock(
        options: LoggerOptions,
        sink: impl LogSink,
        policy: RotationPolicy,
        clock: C,
    ) -> Result<Self, LogError> {
        let runtime = Handle::try_current().map_err(|_| LogError::NoRuntime)?;
        Ok(Self::start(&runtime, options, Box::new(sink), policy, clock))
    }

    fn start(
        runtime: &Handle,
        options: LoggerOptions,
        sink: Box<dyn LogSink>,
        policy: RotationPolicy,
        clock: C,
    ) -> Self {
        let (entries_tx, entries_rx) = flume::bounded(options.capacity_value());
        let (requests_tx, requests_rx) = flume::bounded(1);
        let stats = Arc::new(PipelineStats::default());

        let thresholds = *policy.thresholds();
        let batcher = Batcher::new(entries_rx, requests_rx, policy, Arc::clone(&stats));
        let reporter = Arc::clone(&options.reporter);
        let writer = Writer::new(sink, requests_tx, reporter, Arc::clone(&stats));
        runtime.spawn_blocking(move || batcher.run());
        runtime.spawn_blocking(move || writer.run());

        tracing::info!(
            capacity = options.capacity_value(),
            level = %options.level_value(),
            max_lines = ?thresholds.max_lines,
            max_bytes = ?thresholds.max_bytes,
            max_age = ?thresholds.max_age,
            "log pipeline started"
        );

        Self {
            entries: entries_tx,
            clock,
            level: AtomicLevel::new(options.level_value()),
            closed: AtomicBool::new(false),
            stats,
        }
    }

    /// Enqueue a line, blocking while the queue is full.
    ///
    /// Lines at any level other than `Custom` get the timestamp and caller
    /// prefix. Not gated by the minimum level.
    ///
    /// Safe to call from runtime workers: both pipeline tasks live on the
    /// blocking pool. Async callers can use [`Logger::submit_async`] to yield
    /// instead of parking the worker.
    #[track_caller]
    pub fn submit(&self, text: &str, level: Level) {
        if self.reject_after_close() {
            return;
        }
        let entry = self.entry(text, level, Location::caller());
        if self.entries.send(Ingest::Entry(entry)).is_ok() {
            self.stats.record_submitted();
        } else {
            self.lost();
        }
    }

    /// [`Logger::submit`] that waits for queue space asynchronously.
    #[track_caller]
    pub fn submit_async(&self, text: &str, level: Level) -> impl Future<Output = ()> + '_ {
        let caller = Location::caller();
        let entry = (!self.reject_after_close()).then(|| self.entry(text, level, caller));
        async move {
            let Some(entry) = entry else {
                return;
            };
            if self.entries.send_async(Ingest::Entry(entry)).await.is_ok() {
                self.stats.record_submitted();
            } else {
                self.lost();
            }
        }
    }

    #[track_caller]
    pub fn error(&self, text: &str) {
        self.leveled(Level::Error, text);
    }

    #[track_caller]
    pub fn warn(&self, text: &str) {
        self.leveled(Level::Warn, text);
    }

    #[track_caller]
    pub fn info(&self, text: &str) {
        self.leveled(Level::Info, text);
    }

    #[track_caller]
    pub fn debug(&self, text: &str) {
        self.leveled(Level::Debug, text);
    }

    /// Current minimum level for the severity methods.
    pub fn level(&self) -> Level {
        self.level.get()
    }

    /// Change the minimum level for the severity methods.
    pub fn set_level(&self, level: Level) {
        self.level.set(level);
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Flush everything submitted so far, close the sink, and stop the pipeline.
    ///
    /// Returns the first error from the final write or the sink close. Later
    /// calls return `Ok(())` without doing anything.
    pub async fn close(&self) -> Result<(), LogError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let (done, finished) = oneshot::channel();
        if self.entries.send_async(Ingest::Close(done)).await.is_err() {
            tracing::debug!("log pipeline already stopped");
            return Ok(());
        }
        let result = finished.await.map_err(|_| LogError::PipelineStopped)?;
        let stats = self.stats.snapshot();
        tracing::info!(
            entries = stats.entries_written,
            rotations = stats.rotations,
            errors = stats.write_errors,
            "log pipeline closed"
        );
        result
    }

    #[track_caller]
    fn leveled(&self, level: Level, text: &str) {
        if level.passes(self.level()) {
            self.submit(&tagged(level, text), level);
        }
    }

    fn entry(&self, text: &str, level: Level, caller: &Location<'_>) -> LogEntry {
        let now = self.clock.now();
        LogEntry::new(format_line(text, level, &now, caller), now)
    }

    fn reject_after_close(&self) -> bool {
        if self.is_closed() {
            self.stats.record_dropped(1);
            return true;
        }
        false
    }

    fn lost(&self) {
        self.stats.record_dropped(1);
        tracing::debug!("log pipeline stopped; entry dropped");
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
