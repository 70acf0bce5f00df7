// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Messages exchanged between the logger handle and the two pipeline tasks.

use rlog_core::{LogBatch, LogEntry};
use tokio::sync::oneshot;

use crate::error::LogError;

/// Reply channel for a close request.
pub(crate) type CloseReply = oneshot::Sender<Result<(), LogError>>;

/// Item on the ingestion queue.
#[derive(Debug)]
pub(crate) enum Ingest {
    Entry(LogEntry),
    /// Queued behind every entry submitted before it.
    Close(CloseReply),
}

/// Answer to one flush request.
#[derive(Debug)]
pub(crate) enum Handoff {
    Batch(LogBatch),
    /// Last answer: write `remaining`, close the sink, reply on `done` if set.
    Close { remaining: Option<LogBatch>, done: Option<CloseReply> },
}

/// A flush request is the sender the batching task answers on.
pub(crate) type FlushRequest = oneshot::Sender<Handoff>;
