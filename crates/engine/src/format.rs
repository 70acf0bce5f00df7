// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line layout for submitted text.
//!
//! ```text
//! 2026-01-30 08:14:09.123 [main.rs:42] [W] disk nearly full
//! ```
//!
//! `Level::Custom` lines are written verbatim. Every line ends with `\n`.

use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Local};
use rlog_core::{format_line_time, Level};

/// Render one line for the ingestion queue.
pub fn format_line(
    text: &str,
    level: Level,
    at: &DateTime<Local>,
    caller: &Location<'_>,
) -> String {
    if level == Level::Custom {
        return format!("{text}\n");
    }
    let file = Path::new(caller.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("???");
    format!("{} [{}:{}] {}\n", format_line_time(at), file, caller.line(), text)
}

/// Prepend the severity tag, e.g. `[E] message`.
pub fn tagged(level: Level, text: &str) -> String {
    match level.tag() {
        Some(tag) => format!("{tag} {text}"),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
