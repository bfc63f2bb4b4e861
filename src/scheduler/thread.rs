//! Scheduler backed by plain OS threads.

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{at, bounded, select};
use tracing::{error, trace};

use super::handle::{Disarm, ScheduleHandle};
use super::{Callback, Scheduler};
use crate::types::as_millis_u64;

/// Runs each armed callback on a dedicated background thread.
///
/// Needs no async runtime. The thread waits on a `crossbeam_channel::select!`
/// between its deadline and a cancel signal, so a cancelled arming releases
/// its thread right away.
///
/// If the OS refuses to spawn the thread, the error is logged and the
/// returned handle stays pending without ever firing. The owning timer
/// stays Active; `pause`, `stop` and `restart` still cancel it cleanly,
/// and a later `start` or `restart` tries to spawn again.
#[derive(Debug, Clone, Default)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn arm(&self, delay: Duration, callback: Callback) -> ScheduleHandle {
        let (cancel_tx, cancel_rx) = bounded::<()>(1);
        let handle = ScheduleHandle::pending();
        let latch = handle.latch();
        // The deadline counts from this call, not from when the thread starts.
        let fire_at = Instant::now() + delay;

        let spawned = thread::Builder::new()
            .name("pausable-timer".to_string())
            .spawn(move || {
                let cancelled = select! {
                    recv(cancel_rx) -> msg => msg.is_ok(),
                    recv(at(fire_at)) -> _ => false,
                };
                if cancelled {
                    return;
                }
                // A dropped handle disconnects the channel early; wait out the delay.
                thread::sleep(fire_at.saturating_duration_since(Instant::now()));
                if latch.try_fire() {
                    trace!(delay_ms = as_millis_u64(delay), "scheduled callback firing");
                    callback();
                }
            });

        if let Err(e) = spawned {
            error!(error = %e, "failed to spawn timer thread, arming will never fire");
        }

        handle.with_disarm(Disarm::Thread(cancel_tx))
    }
}
