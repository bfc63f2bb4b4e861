//! Scheduler backed by a tokio runtime.

use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tracing::trace;

use super::error::SchedulerError;
use super::handle::{Disarm, ScheduleHandle};
use super::{Callback, Scheduler};
use crate::types::as_millis_u64;

/// Runs each armed callback in its own tokio task via `tokio::time::sleep_until`.
///
/// The clock follows tokio's, so paused-time tests (`start_paused`) apply
/// to both the deadline and the elapsed-time bookkeeping.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto the given runtime.
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Creates a scheduler for the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::NoRuntime` when called outside a runtime.
    pub fn current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Instant {
        // tokio::time::Instant::now() reads the runtime's clock only when
        // called from inside it.
        let _guard = self.runtime.enter();
        tokio::time::Instant::now().into_std()
    }

    fn arm(&self, delay: Duration, callback: Callback) -> ScheduleHandle {
        let handle = ScheduleHandle::pending();
        let latch = handle.latch();
        // The deadline counts from this call, not from the task's first poll.
        let deadline = {
            let _guard = self.runtime.enter();
            tokio::time::Instant::now() + delay
        };

        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if latch.try_fire() {
                trace!(delay_ms = as_millis_u64(delay), "scheduled callback firing");
                callback();
            }
        });

        handle.with_disarm(Disarm::Task(task.abort_handle()))
    }
}
