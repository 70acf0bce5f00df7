// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batching task: folds queued entries into batches and decides rotation.
//!
//! The write task drives the pace. It sends one [`FlushRequest`] at a time and
//! the batching task answers each with exactly one [`Handoff`]. Between
//! requests, arriving entries accumulate in the buffer, so a slow disk leads to
//! fewer, larger writes.
//!
//! When an entry crosses a rotation threshold, everything buffered before it
//! goes out on the next request marked `forces_rotation`, and the entry starts
//! the next file.
//!
//! The loop blocks on its channels, so it runs on the blocking pool and keeps
//! draining the queue even while every runtime worker is parked in `submit`.

use std::sync::Arc;

use chrono::{DateTime, Local};
use rlog_core::{LogBatch, LogEntry};
use rlog_storage::RotationPolicy;
use crate::handoff::{CloseReply, FlushRequest, Handoff, Ingest};
use crate::stats::PipelineStats;

/// Entries folded since the last hand-off.
#[derive(Debug, Default)]
pub(crate) struct BatchBuffer {
    text: String,
    newest: Option<DateTime<Local>>,
    entry_count: usize,
}

impl BatchBuffer {
    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.text.push_str(&entry.text);
        self.newest = Some(entry.timestamp);
        self.entry_count += 1;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.newest.is_none()
    }

    /// Take the buffered entries, if any, leaving the buffer empty.
    pub(crate) fn drain(&mut self) -> Option<LogBatch> {
        let timestamp = self.newest.take()?;
        let entry_count = std::mem::take(&mut self.entry_count);
        Some(LogBatch {
            text: std::mem::take(&mut self.text),
            timestamp,
            entry_count,
            forces_rotation: false,
        })
    }

    /// Take the buffer as a rotation batch. Empty buffers still produce one,
    /// stamped `at`, so the rotation is not lost.
    pub(crate) fn drain_for_rotation(&mut self, at: DateTime<Local>) -> LogBatch {
        match self.drain() {
            Some(batch) => LogBatch { forces_rotation: true, ..batch },
            None => LogBatch {
                text: String::new(),
                timestamp: at,
                entry_count: 0,
                forces_rotation: true,
            },
        }
    }
}

enum Step {
    Continue,
    Stop,
}

/// Whichever channel became ready first.
enum Event {
    Request(Option<FlushRequest>),
    Message(Option<Ingest>),
}

pub(crate) struct Batcher {
    entries: flume::Receiver<Ingest>,
    requests: flume::Receiver<FlushRequest>,
    policy: RotationPolicy,
    buffer: BatchBuffer,
    stats: Arc<PipelineStats>,
}

impl Batcher {
    pub(crate) fn new(
        entries: flume::Receiver<Ingest>,
        requests: flume::Receiver<FlushRequest>,
        policy: RotationPolicy,
        stats: Arc<PipelineStats>,
    ) -> Self {
        Self { entries, requests, policy, buffer: BatchBuffer::default(), stats }
    }

    /// Blocking loop; returns once the pipeline is closed or the write task is gone.
    pub(crate) fn run(mut self) {
        loop {
            let event = flume::Selector::new()
                .recv(&self.requests, |request| Event::Request(request.ok()))
                .recv(&self.entries, |message| Event::Message(message.ok()))
                .wait();
            let step = match event {
                Event::Request(Some(reply)) => self.answer(reply),
                Event::Request(None) => Step::Stop,
                Event::Message(message) => self.receive(message),
            };
            if let Step::Stop = step {
                break;
            }
        }
        if let Some(batch) = self.buffer.drain() {
            tracing::warn!(
                entries = batch.entry_count,
                "write task gone; buffered entries discarded"
            );
            self.stats.record_dropped(batch.entry_count as u64);
        }
        let late = self.entries.drain().filter(|m| matches!(m, Ingest::Entry(_))).count();
        if late > 0 {
            self.stats.record_dropped(late as u64);
        }
        tracing::debug!("batching task stopped");
    }

    /// Answer a flush request. An empty buffer waits for the next entry.
    fn answer(&mut self, reply: FlushRequest) -> Step {
        if let Some(batch) = self.buffer.drain() {
            let _ = reply.send(Handoff::Batch(batch));
            return Step::Continue;
        }
        match self.entries.recv() {
            Ok(Ingest::Entry(entry)) => {
                let rotate = self.evaluate(&entry);
                let _ = reply.send(Handoff::Batch(LogBatch::single(entry, rotate)));
                Step::Continue
            }
            Ok(Ingest::Close(done)) => {
                let _ = reply.send(Handoff::Close { remaining: None, done: Some(done) });
                Step::Stop
            }
            Err(_) => {
                let _ = reply.send(Handoff::Close { remaining: None, done: None });
                Step::Stop
            }
        }
    }

    /// Fold one queue message into the buffer.
    fn receive(&mut self, message: Option<Ingest>) -> Step {
        match message {
            Some(Ingest::Entry(entry)) => {
                if self.evaluate(&entry) {
                    let Ok(reply) = self.requests.recv() else {
                        self.buffer.push(entry);
                        return Step::Stop;
                    };
                    let batch = self.buffer.drain_for_rotation(entry.timestamp);
                    let _ = reply.send(Handoff::Batch(batch));
                }
                self.buffer.push(entry);
                Step::Continue
            }
            Some(Ingest::Close(done)) => self.finish(Some(done)),
            None => self.finish(None),
        }
    }

    fn finish(&mut self, done: Option<CloseReply>) -> Step {
        let Ok(reply) = self.requests.recv() else {
            return Step::Stop;
        };
        let remaining = self.buffer.drain();
        let _ = reply.send(Handoff::Close { remaining, done });
        Step::Stop
    }

    fn evaluate(&mut self, entry: &LogEntry) -> bool {
        match self.policy.check(entry) {
            Some(trigger) => {
                tracing::debug!(%trigger, "rotation threshold crossed");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "batcher_tests.rs"]
mod tests;
