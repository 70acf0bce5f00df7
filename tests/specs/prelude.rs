//! Shared helpers for the rlog specs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use rlog_core::{format_rotation_suffix, Clock, FakeClock};
pub use rlog_engine::{
    FileSinkConfig, Level, LogError, Logger, LoggerOptions, RecordingReporter, RotationPolicy,
    Thresholds,
};
pub use rlog_storage::memory::{MemorySink, SinkCall};
pub use rlog_storage::ConfigError;
pub use similar_asserts::assert_eq;
pub use tempfile::TempDir;

pub const LOG_NAME: &str = "app.log";

/// A temporary log directory holding `app.log` and its rotations.
pub struct LogDir {
    temp: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self { temp: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> PathBuf {
        self.temp.path().join("logs")
    }

    /// File config with every rotation threshold disabled.
    pub fn config(&self) -> FileSinkConfig {
        FileSinkConfig::new(self.path(), LOG_NAME)
            .is_allow_max_line(false)
            .is_allow_max_size(false)
            .is_allow_max_day(false)
    }

    pub fn active(&self) -> String {
        read(&self.path().join(LOG_NAME))
    }

    /// Rotated file names, oldest first.
    pub fn rotated_names(&self) -> Vec<String> {
        let Ok(dir) = fs::read_dir(self.path()) else {
            return Vec::new();
        };
        let prefix = format!("{LOG_NAME}.");
        let mut names: Vec<String> = dir
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(&prefix))
            .collect();
        names.sort();
        names
    }

    /// Contents of each rotated file, oldest first.
    pub fn rotated(&self) -> Vec<String> {
        self.rotated_names().iter().map(|n| read(&self.path().join(n))).collect()
    }

    /// Everything ever written: rotated files in order, then the active file.
    pub fn all(&self) -> String {
        let mut all = self.rotated().concat();
        all.push_str(&self.active());
        all
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

/// `count` numbered lines, `"<prefix><i>\n"`.
pub fn numbered(prefix: &str, count: usize) -> String {
    (0..count).map(|i| format!("{prefix}{i}\n")).collect()
}

/// Poll `cond` until it holds or five seconds pass.
pub async fn wait_for(what: &str, cond: impl Fn() -> bool) {
    let waited = tokio::time::timeout(Duration::from_secs(5), async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(waited.is_ok(), "timed out waiting for {what}");
}
