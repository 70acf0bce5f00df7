// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sink configuration payloads.
//!
//! The file sink is configured from a JSON object such as:
//!
//! ```json
//! {"filePath": "logs", "fileName": "action.log",
//!  "maxLine": 10, "isAllowMaxLine": false,
//!  "maxSize": 1000000, "isAllowMaxSize": true,
//!  "maxDay": 7, "isAllowMaxDay": false}
//! ```
//!
//! Absent keys keep their defaults. An optional `"mode"` key selects the
//! backend; only `"file"` exists.

use std::path::PathBuf;
use std::time::Duration;

use rlog_core::Clock;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SinkError};
use crate::file::FileSink;
use crate::policy::{RotationPolicy, Thresholds};
use crate::sink::LogSink;

pub const DEFAULT_MAX_LINE: u64 = 100_000;
pub const DEFAULT_MAX_SIZE: u64 = 512 * 1024 * 1024;
pub const DEFAULT_MAX_DAY: u32 = 7;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// File sink settings and rotation thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSinkConfig {
    /// Directory holding the active and rotated files
    pub file_path: PathBuf,
    /// Active file name inside `file_path`
    pub file_name: String,
    pub max_line: u64,
    pub is_allow_max_line: bool,
    /// Bytes
    pub max_size: u64,
    pub is_allow_max_size: bool,
    /// Days since the last rotation
    pub max_day: u32,
    pub is_allow_max_day: bool,
}

impl Default for FileSinkConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("."),
            file_name: String::new(),
            max_line: DEFAULT_MAX_LINE,
            is_allow_max_line: true,
            max_size: DEFAULT_MAX_SIZE,
            is_allow_max_size: true,
            max_day: DEFAULT_MAX_DAY,
            is_allow_max_day: true,
        }
    }
}

impl FileSinkConfig {
    /// Config for `<dir>/<name>` with default thresholds.
    pub fn new(file_path: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { file_path: file_path.into(), file_name: file_name.into(), ..Self::default() }
    }

    /// Parse and validate a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        Self::from_value(parse_payload(payload)?)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let mut config: FileSinkConfig = serde_json::from_value(value)?;
        if config.file_path.as_os_str().is_empty() {
            config.file_path = PathBuf::from(".");
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::MissingFileName);
        }
        Ok(())
    }

    /// Enabled thresholds; disabled groups map to `None`.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            max_lines: self.is_allow_max_line.then_some(self.max_line),
            max_bytes: self.is_allow_max_size.then_some(self.max_size),
            max_age: self
                .is_allow_max_day
                .then(|| Duration::from_secs(u64::from(self.max_day) * SECS_PER_DAY)),
        }
    }

    pub fn active_path(&self) -> PathBuf {
        self.file_path.join(&self.file_name)
    }

    rlog_core::setters! {
        max_line: u64,
        is_allow_max_line: bool,
        /// Bytes per file before rotating
        max_size: u64,
        is_allow_max_size: bool,
        /// Days per file before rotating
        max_day: u32,
        is_allow_max_day: bool,
    }
}

/// Closed set of sink backends, selected by the payload's `mode` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    File(FileSinkConfig),
}

/// An opened sink and the policy that decides its rotations.
pub struct SinkParts {
    pub sink: Box<dyn LogSink>,
    pub policy: RotationPolicy,
}

impl SinkConfig {
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        let value = parse_payload(payload)?;
        let mode = value.get("mode").and_then(serde_json::Value::as_str).unwrap_or("file");
        match mode {
            "file" => Ok(SinkConfig::File(FileSinkConfig::from_value(value)?)),
            other => Err(ConfigError::UnsupportedMode(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            SinkConfig::File(config) => config.validate(),
        }
    }

    /// Open the sink and create its rotation policy anchored at `clock.now()`.
    pub fn build<C: Clock>(&self, clock: C) -> Result<SinkParts, SinkError> {
        match self {
            SinkConfig::File(config) => {
                tracing::debug!(path = %config.active_path().display(), "opening log file");
                let policy = RotationPolicy::new(config.thresholds(), clock.now());
                let mut sink = FileSink::new(&config.file_path, &config.file_name, clock);
                sink.open()?;
                Ok(SinkParts { sink: Box::new(sink), policy })
            }
        }
    }
}

impl From<FileSinkConfig> for SinkConfig {
    fn from(config: FileSinkConfig) -> Self {
        SinkConfig::File(config)
    }
}

fn parse_payload(payload: &str) -> Result<serde_json::Value, ConfigError> {
    if payload.trim().is_empty() {
        return Err(ConfigError::EmptyPayload);
    }
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
