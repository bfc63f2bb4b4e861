//! Host scheduling primitives for the pausable timer.
//!
//! A [`Scheduler`] is the only thing the timer needs from its environment:
//! a monotonic clock and a way to run a callback once after a delay, with
//! the option to cancel before it fires.
//!
//! # Backends
//!
//! ```text
//! ┌──────────────────┐
//! │    Scheduler     │ ← arm / cancel / now
//! └────────┬─────────┘
//!          │
//!          ├────▶ TokioScheduler   (task + tokio::time::sleep_until)
//!          ├────▶ ThreadScheduler  (thread + crossbeam select)
//!          └────▶ MockScheduler    (manual clock, manual firing)
//! ```

mod error;
mod handle;
mod runtime;
mod thread;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub use error::SchedulerError;
pub use handle::{Latch, ScheduleHandle};
pub use runtime::TokioScheduler;
pub use thread::ThreadScheduler;

/// Callback run by a scheduler when an armed request fires.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Trait for one-shot deferred execution backends.
///
/// Implementations must claim the handle's latch with
/// [`Latch::try_fire`] before running the callback, so that
/// [`Scheduler::cancel`] returning false reliably means the callback
/// could not be prevented.
pub trait Scheduler: Send + Sync {
    /// Returns the current monotonic time.
    fn now(&self) -> Instant {
        Instant::now()
    }

    /// Runs `callback` once after `delay`, on the backend's own context.
    fn arm(&self, delay: Duration, callback: Callback) -> ScheduleHandle;

    /// Cancels an armed request.
    ///
    /// Returns true if the callback was prevented from running.
    fn cancel(&self, handle: &ScheduleHandle) -> bool {
        handle.cancel()
    }
}

// ============================================================================
// MockScheduler
// ============================================================================

struct MockEntry {
    deadline: Instant,
    latch: std::sync::Arc<Latch>,
    callback: Option<Callback>,
}

struct MockState {
    now: Instant,
    entries: Vec<MockEntry>,
    armed: Vec<Duration>,
}

/// A firing that has claimed its latch but not yet run its callback.
///
/// Lets tests hold an expiration "in flight" while calling into the timer.
pub struct ClaimedFiring {
    callback: Callback,
}

impl ClaimedFiring {
    /// Runs the claimed callback.
    pub fn run(self) {
        (self.callback)()
    }
}

/// Mock scheduler for testing, driven by a manual clock.
///
/// Nothing fires until the test calls [`advance`](Self::advance),
/// [`fire_next`](Self::fire_next) or [`claim_next`](Self::claim_next).
/// Callbacks always run on the calling thread, outside the internal lock.
pub struct MockScheduler {
    state: Mutex<MockState>,
}

impl Default for MockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl MockScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                now: Instant::now(),
                entries: Vec::new(),
                armed: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Moves the clock forward and fires every request that came due.
    ///
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let due = {
            let mut state = self.lock();
            state.now += by;
            let now = state.now;
            take_claimed(&mut state, |entry| entry.deadline <= now)
        };
        let count = due.len();
        for firing in due {
            firing.run();
        }
        count
    }

    /// Moves the clock forward without firing anything, leaving overdue
    /// requests pending until the next `advance` or `fire_next`.
    pub fn advance_clock(&self, by: Duration) {
        self.lock().now += by;
    }

    /// Claims the earliest pending request without running it.
    pub fn claim_next(&self) -> Option<ClaimedFiring> {
        let mut state = self.lock();
        state.entries.retain(|entry| entry.latch.is_pending());
        let index = state
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| entry.deadline)
            .map(|(index, _)| index)?;
        let mut entry = state.entries.remove(index);
        if !entry.latch.try_fire() {
            return None;
        }
        entry.callback.take().map(|callback| ClaimedFiring { callback })
    }

    /// Fires the earliest pending request immediately, ignoring its deadline.
    ///
    /// Returns true if a callback ran.
    pub fn fire_next(&self) -> bool {
        match self.claim_next() {
            Some(firing) => {
                firing.run();
                true
            }
            None => false,
        }
    }

    /// Number of requests that are still pending.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.latch.is_pending())
            .count()
    }

    /// Delays of every `arm` call so far, in order.
    #[must_use]
    pub fn armed_durations(&self) -> Vec<Duration> {
        self.lock().armed.clone()
    }
}

fn take_claimed(
    state: &mut MockState,
    mut is_due: impl FnMut(&MockEntry) -> bool,
) -> Vec<ClaimedFiring> {
    let mut pending = Vec::with_capacity(state.entries.len());
    let mut due = Vec::new();
    for mut entry in state.entries.drain(..) {
        if !entry.latch.is_pending() {
            continue;
        }
        if is_due(&entry) {
            if entry.latch.try_fire() {
                if let Some(callback) = entry.callback.take() {
                    due.push((entry.deadline, ClaimedFiring { callback }));
                }
            }
        } else {
            pending.push(entry);
        }
    }
    state.entries = pending;
    due.sort_by_key(|(deadline, _)| *deadline);
    due.into_iter().map(|(_, firing)| firing).collect()
}

impl Scheduler for MockScheduler {
    fn now(&self) -> Instant {
        self.lock().now
    }

    fn arm(&self, delay: Duration, callback: Callback) -> ScheduleHandle {
        let handle = ScheduleHandle::pending();
        let mut state = self.lock();
        state.entries.retain(|entry| entry.latch.is_pending());
        let deadline = state.now + delay;
        state.armed.push(delay);
        state.entries.push(MockEntry {
            deadline,
            latch: handle.latch(),
            callback: Some(callback),
        });
        handle
    }
}

impl std::fmt::Debug for MockScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockScheduler")
            .field("armed_count", &self.armed_count())
            .finish_non_exhaustive()
    }
}
