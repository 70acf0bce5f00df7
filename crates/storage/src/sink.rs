// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sink capability shared by every backend.

use rlog_core::LogBatch;

use crate::error::SinkError;

/// Destination for written batches.
///
/// A sink is driven by exactly one task, so methods take `&mut self` and no
/// internal locking is needed.
pub trait LogSink: Send + 'static {
    /// Open the destination. No-op when already open.
    fn open(&mut self) -> Result<(), SinkError>;

    /// Append the batch text. May buffer; does not force data to disk.
    fn write(&mut self, batch: &LogBatch) -> Result<(), SinkError>;

    /// Close the current destination, set it aside, and open a fresh one.
    fn rotate(&mut self) -> Result<(), SinkError>;

    /// Flush and release the destination. Idempotent.
    fn close(&mut self) -> Result<(), SinkError>;

    fn is_open(&self) -> bool;
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn open(&mut self) -> Result<(), SinkError> {
        (**self).open()
    }

    fn write(&mut self, batch: &LogBatch) -> Result<(), SinkError> {
        (**self).write(batch)
    }

    fn rotate(&mut self) -> Result<(), SinkError> {
        (**self).rotate()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }
}
