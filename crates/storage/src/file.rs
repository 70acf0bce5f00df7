// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Buffered, rotating file sink.
//!
//! Writes to `<dir>/<name>` through a `BufWriter`. Rotation renames the
//! active file to `<name>.<rotation instant>` and reopens `<name>`:
//!
//! ```text
//! logs/
//! ├── action.log                                  # active
//! ├── action.log.2026-01-30_08-14-09.123456789    # rotated
//! └── action.log.2026-01-31_10-02-44.000317001
//! ```
//!
//! Rotated files are never deleted here.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rlog_core::{format_rotation_suffix, Clock, LogBatch};

use crate::error::SinkError;
use crate::sink::LogSink;

pub struct FileSink<C: Clock> {
    dir: PathBuf,
    name: String,
    clock: C,
    writer: Option<BufWriter<File>>,
}

impl<C: Clock> FileSink<C> {
    /// Create a closed sink for `<dir>/<name>`; call [`LogSink::open`] before writing.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>, clock: C) -> Self {
        Self { dir: dir.into(), name: name.into(), clock, writer: None }
    }

    pub fn active_path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// First free `<name>.<suffix>` (then `<name>.<suffix>-0001`, ...).
    ///
    /// The counter is zero-padded so name order stays rotation order.
    fn rotated_path(&self) -> PathBuf {
        let base = format!("{}.{}", self.name, format_rotation_suffix(&self.clock.now()));
        let mut candidate = self.dir.join(&base);
        let mut n = 1u32;
        while candidate.exists() {
            candidate = self.dir.join(format!("{base}-{n:04}"));
            n += 1;
        }
        candidate
    }

    fn flush_and_drop(&mut self) -> Result<(), SinkError> {
        let Some(mut writer) = self.writer.take() else {
            return Ok(());
        };
        writer.flush().map_err(|source| SinkError::Flush { path: self.active_path(), source })
    }
}

impl<C: Clock> LogSink for FileSink<C> {
    fn open(&mut self) -> Result<(), SinkError> {
        if self.writer.is_some() {
            return Ok(());
        }
        create_dir(&self.dir)?;
        let path = self.active_path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open { path, source })?;
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    fn write(&mut self, batch: &LogBatch) -> Result<(), SinkError> {
        let writer = self.writer.as_mut().ok_or(SinkError::Closed)?;
        writer
            .write_all(batch.text.as_bytes())
            .map_err(|source| SinkError::Write { path: self.dir.join(&self.name), source })?;
        Ok(())
    }

    fn rotate(&mut self) -> Result<(), SinkError> {
        self.flush_and_drop()?;
        let from = self.active_path();
        let to = self.rotated_path();
        fs::rename(&from, &to).map_err(|source| SinkError::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        tracing::info!(from = %from.display(), to = %to.display(), "rotated log file");
        self.open()
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.flush_and_drop()
    }

    fn is_open(&self) -> bool {
        self.writer.is_some()
    }
}

impl<C: Clock> Drop for FileSink<C> {
    fn drop(&mut self) {
        if let Err(e) = self.flush_and_drop() {
            tracing::warn!(error = %e, "failed to flush log file on drop");
        }
    }
}

fn create_dir(dir: &Path) -> Result<(), SinkError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .map_err(|source| SinkError::CreateDir { path: dir.to_path_buf(), source })
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
