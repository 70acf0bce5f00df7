// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory sink that records every call, for pipeline tests.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use rlog_core::LogBatch;

use crate::error::SinkError;
use crate::sink::LogSink;

/// One observed sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Open,
    Write { text: String, entry_count: usize },
    Rotate,
    Close,
}

#[derive(Default)]
struct Inner {
    calls: Vec<SinkCall>,
    open: bool,
    fail_writes: usize,
    fail_rotations: usize,
}

/// Holds writers while paused.
#[derive(Default)]
struct Gate {
    paused: Mutex<bool>,
    resumed: Condvar,
}

impl Gate {
    fn pass(&self) {
        let mut paused = self.paused.lock();
        while *paused {
            self.resumed.wait(&mut paused);
        }
    }
}

/// Cloneable handle; clones share the same recording.
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Inner>>,
    gate: Arc<Gate>,
}

impl MemorySink {
    /// A sink that is already open.
    pub fn new() -> Self {
        let sink = Self::default();
        sink.inner.lock().open = true;
        sink
    }

    pub fn calls(&self) -> Vec<SinkCall> {
        self.inner.lock().calls.clone()
    }

    /// Text of every successful write, concatenated in order.
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Write { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Written text split into files at each rotation.
    pub fn files(&self) -> Vec<String> {
        let mut files = vec![String::new()];
        for call in self.inner.lock().calls.iter() {
            match call {
                SinkCall::Write { text, .. } => {
                    if let Some(current) = files.last_mut() {
                        current.push_str(text);
                    }
                }
                SinkCall::Rotate => files.push(String::new()),
                SinkCall::Open | SinkCall::Close => {}
            }
        }
        files
    }

    pub fn write_count(&self) -> usize {
        self.count(|c| matches!(c, SinkCall::Write { .. }))
    }

    pub fn rotation_count(&self) -> usize {
        self.count(|c| matches!(c, SinkCall::Rotate))
    }

    pub fn close_count(&self) -> usize {
        self.count(|c| matches!(c, SinkCall::Close))
    }

    /// Fail the next `n` writes.
    pub fn fail_next_writes(&self, n: usize) {
        self.inner.lock().fail_writes += n;
    }

    /// Fail the next `n` rotations, leaving the sink closed like a failed rename.
    pub fn fail_next_rotations(&self, n: usize) {
        self.inner.lock().fail_rotations += n;
    }

    /// Make writes block until [`MemorySink::resume_writes`], like a stalled disk.
    pub fn pause_writes(&self) {
        *self.gate.paused.lock() = true;
    }

    pub fn resume_writes(&self) {
        *self.gate.paused.lock() = false;
        self.gate.resumed.notify_all();
    }

    fn count(&self, pred: impl Fn(&SinkCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| pred(c)).count()
    }
}

fn injected(kind: &str) -> io::Error {
    io::Error::other(format!("injected {kind} failure"))
}

impl LogSink for MemorySink {
    fn open(&mut self) -> Result<(), SinkError> {
        let mut inner = self.inner.lock();
        if !inner.open {
            inner.open = true;
            inner.calls.push(SinkCall::Open);
        }
        Ok(())
    }

    fn write(&mut self, batch: &LogBatch) -> Result<(), SinkError> {
        self.gate.pass();
        let mut inner = self.inner.lock();
        if !inner.open {
            return Err(SinkError::Closed);
        }
        if inner.fail_writes > 0 {
            inner.fail_writes -= 1;
            return Err(SinkError::Write { path: PathBuf::from("memory"), source: injected("write") });
        }
        inner
            .calls
            .push(SinkCall::Write { text: batch.text.clone(), entry_count: batch.entry_count });
        Ok(())
    }

    fn rotate(&mut self) -> Result<(), SinkError> {
        let mut inner = self.inner.lock();
        if inner.fail_rotations > 0 {
            inner.fail_rotations -= 1;
            inner.open = false;
            return Err(SinkError::Rename {
                from: PathBuf::from("memory"),
                to: PathBuf::from("memory.rotated"),
                source: injected("rename"),
            });
        }
        inner.calls.push(SinkCall::Rotate);
        inner.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        let mut inner = self.inner.lock();
        if inner.open {
            inner.open = false;
            inner.calls.push(SinkCall::Close);
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.inner.lock().open
    }
}
