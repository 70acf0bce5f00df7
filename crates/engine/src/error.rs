// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced by the log pipeline.

use rlog_storage::{ConfigError, SinkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("no tokio runtime is running; configure the logger from within one")]
    NoRuntime,

    #[error("log pipeline stopped before the request completed")]
    PipelineStopped,
}
