// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity levels and their line tags.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Severity of a submitted line.
///
/// Ordered from least to most severe. `Custom` is the sentinel for
/// level-agnostic lines: they are written verbatim, without the timestamp
/// and caller prefix, and a minimum level of `Custom` lets everything through.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Custom,
    Debug,
    Info,
    Warn,
    Error,
}

crate::named_enum! {
    Level {
        Custom => "custom",
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
    }
}

impl Level {
    /// Tag prepended to the message by the severity API, e.g. `[W]`.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Level::Custom => None,
            Level::Debug => Some("[D]"),
            Level::Info => Some("[I]"),
            Level::Warn => Some("[W]"),
            Level::Error => Some("[E]"),
        }
    }

    /// Whether a line at `self` passes a minimum of `min`.
    pub fn passes(self, min: Level) -> bool {
        self >= min
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(raw: u8) -> Level {
        match raw {
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Custom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected custom, debug, info, warn or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom" => Ok(Level::Custom),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// A [`Level`] that can be swapped at runtime from any thread.
#[derive(Debug, Default)]
pub struct AtomicLevel(std::sync::atomic::AtomicU8);

impl AtomicLevel {
    pub fn new(level: Level) -> Self {
        Self(std::sync::atomic::AtomicU8::new(level.as_u8()))
    }

    pub fn get(&self) -> Level {
        Level::from_u8(self.0.load(std::sync::atomic::Ordering::Relaxed))
    }

    pub fn set(&self, level: Level) {
        self.0.store(level.as_u8(), std::sync::atomic::Ordering::Relaxed);
    }
}

#[cfg(test)]
#[path = "level_tests.rs"]
mod tests;
