//! Scheduler error types.

use thiserror::Error;

/// Errors that can occur while creating a scheduler backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No tokio runtime is running on the current thread.
    #[error("no tokio runtime is available on the current thread")]
    NoRuntime,
}

impl SchedulerError {
    /// Returns true if this error is due to a missing runtime.
    #[must_use]
    pub fn is_no_runtime(&self) -> bool {
        matches!(self, Self::NoRuntime)
    }

    /// Returns a short suggestion for resolving this error.
    #[must_use]
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::NoRuntime => {
                "create the timer inside a tokio runtime, pass a runtime handle, or use ThreadScheduler"
            }
        }
    }
}
