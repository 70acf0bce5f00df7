// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sink configuration and file I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration payload errors. Fatal: nothing is opened or started.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration payload is empty")]
    EmptyPayload,

    #[error("invalid configuration payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration must have a fileName")]
    MissingFileName,

    #[error("unsupported sink mode \"{0}\"")]
    UnsupportedMode(String),
}

/// Filesystem errors raised by a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write log file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush log file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("log sink is closed")]
    Closed,
}
