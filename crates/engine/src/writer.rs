// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write task: the only code that touches the sink.
//!
//! Runs on tokio's blocking pool. Each cycle asks the batching task for work,
//! writes it, and rotates afterwards when the batch closed out a file.
//! Failures are reported and counted; nothing is retried or re-queued.

use std::sync::Arc;

use rlog_core::LogBatch;
use rlog_storage::{LogSink, SinkError};
use tokio::sync::oneshot;

use crate::error::LogError;
use crate::handoff::{FlushRequest, Handoff};
use crate::report::ErrorReporter;
use crate::stats::PipelineStats;

pub(crate) struct Writer {
    sink: Box<dyn LogSink>,
    requests: flume::Sender<FlushRequest>,
    reporter: Arc<dyn ErrorReporter>,
    stats: Arc<PipelineStats>,
}

impl Writer {
    pub(crate) fn new(
        sink: Box<dyn LogSink>,
        requests: flume::Sender<FlushRequest>,
        reporter: Arc<dyn ErrorReporter>,
        stats: Arc<PipelineStats>,
    ) -> Self {
        Self { sink, requests, reporter, stats }
    }

    /// Blocking loop; returns once the pipeline is closed or the batching task is gone.
    pub(crate) fn run(mut self) {
        loop {
            let (reply, response) = oneshot::channel();
            if self.requests.send(reply).is_err() {
                break;
            }
            let Ok(handoff) = response.blocking_recv() else {
                break;
            };
            match handoff {
                Handoff::Batch(batch) => self.persist(&batch),
                Handoff::Close { remaining, done } => {
                    let result = self.shutdown(remaining);
                    match done {
                        Some(done) => {
                            let _ = done.send(result);
                        }
                        None => {
                            if let Err(e) = result {
                                self.report(e);
                            }
                        }
                    }
                    tracing::debug!("write task stopped");
                    return;
                }
            }
        }
        if let Err(e) = self.sink.close() {
            self.report(e.into());
        }
        tracing::debug!("write task stopped; batching task gone");
    }

    fn persist(&mut self, batch: &LogBatch) {
        if !batch.is_empty() {
            if let Err(e) = self.write(batch) {
                self.report(e.into());
            }
        }
        if batch.forces_rotation {
            match self.sink.rotate() {
                Ok(()) => self.stats.record_rotation(),
                Err(e) => self.report(e.into()),
            }
        }
    }

    fn write(&mut self, batch: &LogBatch) -> Result<(), SinkError> {
        if !self.sink.is_open() {
            self.sink.open()?;
        }
        self.sink.write(batch)?;
        self.stats.record_batch(batch.entry_count, batch.text.len());
        Ok(())
    }

    /// Write the remainder and close the sink; the first error wins.
    fn shutdown(&mut self, remaining: Option<LogBatch>) -> Result<(), LogError> {
        let written = match remaining {
            Some(batch) if !batch.is_empty() => self.write(&batch),
            _ => Ok(()),
        };
        let closed = self.sink.close();
        if written.is_err() {
            self.stats.record_error();
        }
        if closed.is_err() {
            self.stats.record_error();
        }
        written.and(closed)?;
        Ok(())
    }

    fn report(&self, error: LogError) {
        self.stats.record_error();
        self.reporter.report(&error);
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
