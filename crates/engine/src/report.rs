// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where steady-state pipeline failures go.
//!
//! Once the pipeline is running there is no caller to return a write or
//! rotation error to, so the write task hands each failure to an
//! [`ErrorReporter`] and moves on.

use crate::error::LogError;

pub trait ErrorReporter: Send + Sync + 'static {
    fn report(&self, error: &LogError);
}

/// Default reporter: one `tracing` warning per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &LogError) {
        tracing::warn!(error = %error, "log pipeline I/O failure");
    }
}

impl<F> ErrorReporter for F
where
    F: Fn(&LogError) + Send + Sync + 'static,
{
    fn report(&self, error: &LogError) {
        self(error)
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingReporter;

#[cfg(any(test, feature = "test-support"))]
mod recording {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::ErrorReporter;
    use crate::error::LogError;

    /// Keeps the message of every reported error. Clones share the record.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingReporter {
        messages: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().clone()
        }

        pub fn count(&self) -> usize {
            self.messages.lock().len()
        }
    }

    impl ErrorReporter for RecordingReporter {
        fn report(&self, error: &LogError) {
            self.messages.lock().push(error.to_string());
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
