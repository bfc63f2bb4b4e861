//! Pausable one-shot timer.
//!
//! This module provides the timer state machine:
//! - State transitions (Idle → Active → Expired, with Pause back to Idle)
//! - Remaining-duration bookkeeping across pauses
//! - Exactly-once expiration delivery (channel first, then callback)
//!
//! # Concurrency
//!
//! Owner operations take `&mut self`, so only one caller drives the state
//! machine. The expiration handler runs on the scheduler's context and
//! shares a small cycle record with the owner. Every arming bumps the
//! cycle's generation; a handler whose generation is stale does nothing.
//!
//! # Dropping
//!
//! Dropping an Active timer cancels its armed request, so neither the
//! channel nor the callback sees anything afterwards.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use tracing::{debug, warn};

use crate::scheduler::{ScheduleHandle, Scheduler};
use crate::types::{as_millis_u64, TimerConfig, TimerError, TimerSnapshot, TimerState};

const DEFAULT_NAME: &str = "timer";

/// Callback invoked on natural expiration.
pub type ExpireCallback = Arc<dyn Fn() + Send + Sync + 'static>;

// ============================================================================
// Shared expiration state
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Cycle {
    generation: u64,
    state: TimerState,
}

/// State reachable from both the owner and the expiration handler.
struct Shared {
    name: RwLock<String>,
    cycle: Mutex<Cycle>,
    scheduler: Arc<dyn Scheduler>,
    notify_tx: Sender<Instant>,
    on_expire: Option<ExpireCallback>,
}

impl Shared {
    fn cycle(&self) -> MutexGuard<'_, Cycle> {
        // Cycle is plain data, so a poisoned lock is still consistent.
        self.cycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn name(&self) -> String {
        self.name
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Expiration handler for the arming identified by `generation`.
    fn expire(&self, generation: u64) {
        {
            let mut cycle = self.cycle();
            if cycle.generation != generation {
                debug!(
                    timer = %self.name(),
                    generation,
                    current = cycle.generation,
                    "discarding superseded expiration"
                );
                return;
            }
            cycle.state = TimerState::Expired;
        }

        let fired_at = self.scheduler.now();
        match self.notify_tx.try_send(fired_at) {
            Ok(()) => debug!(timer = %self.name(), generation, "timer expired"),
            Err(TrySendError::Full(_)) => {
                warn!(timer = %self.name(), generation, "expiration slot already full, dropping notification")
            }
            Err(TrySendError::Disconnected(_)) => {}
        }

        if let Some(on_expire) = &self.on_expire {
            on_expire();
        }
    }
}

// ============================================================================
// PausableTimer
// ============================================================================

/// A one-shot timer that can be paused, resumed, stopped and restarted.
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use pausable_timer::{PausableTimer, ThreadScheduler};
///
/// let mut timer = PausableTimer::new(Duration::from_secs(1), Arc::new(ThreadScheduler::new()));
/// timer.start();
/// timer.pause();
/// timer.start();
/// let fired_at = timer.expirations().recv().unwrap();
/// # let _ = fired_at;
/// ```
pub struct PausableTimer {
    shared: Arc<Shared>,
    remaining: Duration,
    started_at: Option<Instant>,
    handle: Option<ScheduleHandle>,
    notify_rx: Receiver<Instant>,
}

impl PausableTimer {
    /// Creates an Idle timer that only reports expiration on its channel.
    pub fn new(duration: Duration, scheduler: Arc<dyn Scheduler>) -> Self {
        Self::build(DEFAULT_NAME.to_string(), duration, scheduler, None)
    }

    /// Creates an Idle timer that also runs `on_expire` after each natural
    /// expiration, on the scheduler's context.
    pub fn with_callback<F>(
        duration: Duration,
        scheduler: Arc<dyn Scheduler>,
        on_expire: F,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::build(
            DEFAULT_NAME.to_string(),
            duration,
            scheduler,
            Some(Arc::new(on_expire)),
        )
    }

    /// Creates an Idle timer from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if the configuration is invalid.
    pub fn from_config(
        config: &TimerConfig,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, TimerError> {
        config.validate()?;
        let name = config.name.clone().unwrap_or_else(|| DEFAULT_NAME.to_string());
        Ok(Self::build(name, config.duration, scheduler, None))
    }

    fn build(
        name: String,
        duration: Duration,
        scheduler: Arc<dyn Scheduler>,
        on_expire: Option<ExpireCallback>,
    ) -> Self {
        let (notify_tx, notify_rx) = bounded(1);
        Self {
            shared: Arc::new(Shared {
                name: RwLock::new(name),
                cycle: Mutex::new(Cycle {
                    generation: 0,
                    state: TimerState::Idle,
                }),
                scheduler,
                notify_tx,
                on_expire,
            }),
            remaining: duration,
            started_at: None,
            handle: None,
            notify_rx,
        }
    }

    /// Sets the name used in log output.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.rename(name);
        self
    }

    /// Renames the timer. Takes effect for an armed expiration too.
    pub fn rename(&self, name: impl Into<String>) {
        *self
            .shared
            .name
            .write()
            .unwrap_or_else(PoisonError::into_inner) = name.into();
    }

    /// Starts (or resumes) the countdown of the remaining duration.
    ///
    /// Returns false without doing anything unless the timer is Idle.
    pub fn start(&mut self) -> bool {
        let generation = {
            let mut cycle = self.shared.cycle();
            if cycle.state != TimerState::Idle {
                return false;
            }
            begin_cycle(&mut cycle)
        };

        self.started_at = Some(self.shared.scheduler.now());
        self.arm(generation);
        debug!(
            timer = %self.shared.name(),
            generation,
            remaining_ms = as_millis_u64(self.remaining),
            "timer started"
        );
        true
    }

    /// Pauses an Active timer, keeping the unelapsed part of the duration.
    ///
    /// Returns false if the timer was not Active, or if the expiration had
    /// already begun; in the latter case the timer is Expired.
    pub fn pause(&mut self) -> bool {
        if self.state() != TimerState::Active {
            return false;
        }

        let now = self.shared.scheduler.now();
        if !self.disarm() {
            self.shared.cycle().state = TimerState::Expired;
            debug!(timer = %self.shared.name(), "pause lost the race with expiration");
            return false;
        }
        self.shared.cycle().state = TimerState::Idle;

        let elapsed = self
            .started_at
            .map(|started_at| now.saturating_duration_since(started_at))
            .unwrap_or_default();
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.started_at = Some(now);
        debug!(
            timer = %self.shared.name(),
            elapsed_ms = as_millis_u64(elapsed),
            remaining_ms = as_millis_u64(self.remaining),
            "timer paused"
        );
        true
    }

    /// Stops an Active timer without delivering a notification.
    ///
    /// Returns false if the timer was not Active. Also returns false when
    /// the expiration had already begun: the timer is Expired either way,
    /// but that expiration is still delivered.
    pub fn stop(&mut self) -> bool {
        if self.state() != TimerState::Active {
            return false;
        }

        self.started_at = Some(self.shared.scheduler.now());
        let cancelled = self.disarm();
        self.shared.cycle().state = TimerState::Expired;
        debug!(timer = %self.shared.name(), cancelled, "timer stopped");
        cancelled
    }

    /// Rearms the timer with a new duration, from any state.
    ///
    /// Any live arming is cancelled first and its expiration, if already
    /// in flight, is not reported as belonging to the new arming.
    pub fn restart(&mut self, duration: Duration) {
        self.disarm();
        self.remaining = duration;
        self.started_at = Some(self.shared.scheduler.now());

        let generation = begin_cycle(&mut self.shared.cycle());
        self.arm(generation);
        debug!(
            timer = %self.shared.name(),
            remaining_ms = as_millis_u64(duration),
            generation,
            "timer restarted"
        );
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.shared.cycle().state
    }

    /// Remaining duration as of the last transition.
    ///
    /// While Active this does not shrink; it is updated on pause.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// When the timer last entered or left the Active state.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn name(&self) -> String {
        self.shared.name()
    }

    /// Single-slot channel receiving the expiration instant.
    pub fn expirations(&self) -> &Receiver<Instant> {
        &self.notify_rx
    }

    /// Returns an owned receiver for the expiration channel, for waiting on
    /// another thread while the owner keeps driving the timer.
    pub fn subscribe(&self) -> Receiver<Instant> {
        self.notify_rx.clone()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from_timer(self)
    }

    fn arm(&mut self, generation: u64) {
        let shared = Arc::clone(&self.shared);
        let handle = self
            .shared
            .scheduler
            .arm(self.remaining, Box::new(move || shared.expire(generation)));
        self.handle = Some(handle);
    }

    /// Cancels and releases the armed handle. Returns true if the pending
    /// expiration was prevented.
    fn disarm(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => self.shared.scheduler.cancel(&handle),
            None => false,
        }
    }
}

fn begin_cycle(cycle: &mut Cycle) -> u64 {
    cycle.generation += 1;
    cycle.state = TimerState::Active;
    cycle.generation
}

impl Drop for PausableTimer {
    fn drop(&mut self) {
        if self.disarm() {
            debug!(timer = %self.shared.name(), "cancelled armed timer on drop");
        }
    }
}

impl std::fmt::Debug for PausableTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PausableTimer")
            .field("name", &self.shared.name())
            .field("state", &self.state())
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::MockScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn mock_timer(millis: u64) -> (PausableTimer, Arc<MockScheduler>) {
        let scheduler = Arc::new(MockScheduler::new());
        let timer = PausableTimer::new(Duration::from_millis(millis), scheduler.clone());
        (timer, scheduler)
    }

    fn counting_timer(millis: u64) -> (PausableTimer, Arc<MockScheduler>, Arc<AtomicUsize>) {
        let scheduler = Arc::new(MockScheduler::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timer = PausableTimer::with_callback(
            Duration::from_millis(millis),
            scheduler.clone(),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        (timer, scheduler, fired)
    }

    // ------------------------------------------------------------------------
    // Lifecycle Tests
    // ------------------------------------------------------------------------

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn test_new_timer_is_idle() {
            let (timer, scheduler) = mock_timer(100);

            assert_eq!(timer.state(), TimerState::Idle);
            assert_eq!(timer.remaining(), Duration::from_millis(100));
            assert!(timer.started_at().is_none());
            assert_eq!(timer.name(), "timer");
            assert_eq!(scheduler.armed_count(), 0);
        }

        #[test]
        fn test_start_arms_full_duration() {
            let (mut timer, scheduler) = mock_timer(100);

            assert!(timer.start());
            assert_eq!(timer.state(), TimerState::Active);
            assert_eq!(timer.started_at(), Some(scheduler.now()));
            assert_eq!(scheduler.armed_durations(), vec![Duration::from_millis(100)]);
            assert_eq!(scheduler.armed_count(), 1);
        }

        #[test]
        fn test_start_twice_is_noop() {
            let (mut timer, scheduler) = mock_timer(100);

            assert!(timer.start());
            assert!(!timer.start());
            assert_eq!(scheduler.armed_count(), 1);
        }

        #[test]
        fn test_natural_expiration() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            scheduler.advance(Duration::from_millis(99));
            assert_eq!(timer.state(), TimerState::Active);
            assert!(timer.expirations().try_recv().is_err());

            scheduler.advance(Duration::from_millis(1));
            assert_eq!(timer.state(), TimerState::Expired);
            assert_eq!(timer.expirations().try_recv().unwrap(), scheduler.now());
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_start_after_expiration_is_noop() {
            let (mut timer, scheduler) = mock_timer(10);
            timer.start();
            scheduler.advance(Duration::from_millis(10));

            assert!(!timer.start());
            assert_eq!(timer.state(), TimerState::Expired);
        }
    }

    // ------------------------------------------------------------------------
    // Pause Tests
    // ------------------------------------------------------------------------

    mod pause_tests {
        use super::*;

        #[test]
        fn test_pause_keeps_remaining_duration() {
            let (mut timer, scheduler) = mock_timer(1000);
            timer.start();
            scheduler.advance(Duration::from_millis(300));

            assert!(timer.pause());
            assert_eq!(timer.state(), TimerState::Idle);
            assert_eq!(timer.remaining(), Duration::from_millis(700));
            assert_eq!(scheduler.armed_count(), 0);
        }

        #[test]
        fn test_resume_arms_remaining_duration() {
            let (mut timer, scheduler, fired) = counting_timer(1000);
            timer.start();
            scheduler.advance(Duration::from_millis(300));
            timer.pause();

            // Time spent paused does not count.
            scheduler.advance(Duration::from_secs(10));
            assert_eq!(fired.load(Ordering::SeqCst), 0);

            assert!(timer.start());
            assert_eq!(
                scheduler.armed_durations(),
                vec![Duration::from_millis(1000), Duration::from_millis(700)]
            );

            scheduler.advance(Duration::from_millis(699));
            assert_eq!(fired.load(Ordering::SeqCst), 0);
            scheduler.advance(Duration::from_millis(1));
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_repeated_pauses_accumulate() {
            let (mut timer, scheduler) = mock_timer(1000);

            for _ in 0..3 {
                timer.start();
                scheduler.advance(Duration::from_millis(200));
                assert!(timer.pause());
            }

            assert_eq!(timer.remaining(), Duration::from_millis(400));
        }

        #[test]
        fn test_pause_when_idle_is_noop() {
            let (mut timer, _scheduler) = mock_timer(100);

            assert!(!timer.pause());
            assert_eq!(timer.state(), TimerState::Idle);
        }

        #[test]
        fn test_pause_when_expired_is_noop() {
            let (mut timer, _scheduler) = mock_timer(100);
            timer.start();
            timer.stop();

            assert!(!timer.pause());
            assert_eq!(timer.state(), TimerState::Expired);
        }

        #[test]
        fn test_pause_loses_race_with_expiration() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            let firing = scheduler.claim_next().unwrap();
            assert!(!timer.pause());
            assert_eq!(timer.state(), TimerState::Expired);
            assert_eq!(timer.remaining(), Duration::from_millis(100));

            // The in-flight expiration still completes and is delivered once.
            firing.run();
            assert_eq!(timer.state(), TimerState::Expired);
            assert!(timer.expirations().try_recv().is_ok());
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_pause_after_missed_deadline_clamps_to_zero() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            // The deadline passes but the firing has not been claimed yet.
            scheduler.advance_clock(Duration::from_millis(150));
            assert!(timer.pause());
            assert_eq!(timer.remaining(), Duration::ZERO);

            assert!(timer.start());
            assert_eq!(scheduler.armed_durations().last(), Some(&Duration::ZERO));
            assert_eq!(scheduler.advance(Duration::ZERO), 1);
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_zero_remaining_fires_immediately_on_start() {
            let (mut timer, scheduler, fired) = counting_timer(0);

            assert!(timer.start());
            assert_eq!(scheduler.advance(Duration::ZERO), 1);
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Stop Tests
    // ------------------------------------------------------------------------

    mod stop_tests {
        use super::*;

        #[test]
        fn test_stop_prevents_notification() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            assert!(timer.stop());
            assert_eq!(timer.state(), TimerState::Expired);

            scheduler.advance(Duration::from_secs(1));
            assert!(timer.expirations().try_recv().is_err());
            assert_eq!(fired.load(Ordering::SeqCst), 0);
        }

        #[test]
        fn test_stop_records_timestamp() {
            let (mut timer, scheduler) = mock_timer(100);
            timer.start();
            scheduler.advance(Duration::from_millis(40));

            timer.stop();
            assert_eq!(timer.started_at(), Some(scheduler.now()));
        }

        #[test]
        fn test_stop_twice() {
            let (mut timer, _scheduler) = mock_timer(100);
            timer.start();

            assert!(timer.stop());
            assert!(!timer.stop());
        }

        #[test]
        fn test_stop_when_idle_is_noop() {
            let (mut timer, _scheduler) = mock_timer(100);

            assert!(!timer.stop());
            assert_eq!(timer.state(), TimerState::Idle);
        }

        #[test]
        fn test_stop_loses_race_with_expiration() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            let firing = scheduler.claim_next().unwrap();
            assert!(!timer.stop());
            assert_eq!(timer.state(), TimerState::Expired);

            firing.run();
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }
    }

    // ------------------------------------------------------------------------
    // Restart Tests
    // ------------------------------------------------------------------------

    mod restart_tests {
        use super::*;

        #[test]
        fn test_restart_from_idle() {
            let (mut timer, scheduler) = mock_timer(100);

            timer.restart(Duration::from_millis(50));
            assert_eq!(timer.state(), TimerState::Active);
            assert_eq!(timer.remaining(), Duration::from_millis(50));

            scheduler.advance(Duration::from_millis(50));
            assert_eq!(timer.state(), TimerState::Expired);
        }

        #[test]
        fn test_restart_from_expired() {
            let (mut timer, scheduler, fired) = counting_timer(10);
            timer.start();
            scheduler.advance(Duration::from_millis(10));
            assert!(timer.expirations().try_recv().is_ok());

            timer.restart(Duration::from_millis(20));
            assert_eq!(timer.state(), TimerState::Active);

            scheduler.advance(Duration::from_millis(20));
            assert_eq!(timer.state(), TimerState::Expired);
            assert!(timer.expirations().try_recv().is_ok());
            assert_eq!(fired.load(Ordering::SeqCst), 2);
        }

        #[test]
        fn test_restart_while_active_replaces_handle() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();
            scheduler.advance(Duration::from_millis(60));

            timer.restart(Duration::from_millis(100));
            assert_eq!(scheduler.armed_count(), 1);

            // The original deadline passes without firing.
            scheduler.advance(Duration::from_millis(40));
            assert_eq!(fired.load(Ordering::SeqCst), 0);
            assert_eq!(timer.state(), TimerState::Active);

            scheduler.advance(Duration::from_millis(60));
            assert_eq!(fired.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_superseded_expiration_is_discarded() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();

            let stale = scheduler.claim_next().unwrap();
            timer.restart(Duration::from_millis(100));
            stale.run();

            assert_eq!(timer.state(), TimerState::Active);
            assert!(timer.expirations().try_recv().is_err());
            assert_eq!(fired.load(Ordering::SeqCst), 0);
        }
    }

    // ------------------------------------------------------------------------
    // Notification Tests
    // ------------------------------------------------------------------------

    mod notification_tests {
        use super::*;

        #[test]
        fn test_notification_sent_before_callback() {
            let scheduler = Arc::new(MockScheduler::new());
            let seen = Arc::new(Mutex::new(None));
            let (handoff_tx, handoff_rx) = bounded::<Receiver<Instant>>(1);

            let observed = Arc::clone(&seen);
            let mut timer = PausableTimer::with_callback(
                Duration::from_millis(5),
                scheduler.clone(),
                move || {
                    if let Ok(rx) = handoff_rx.try_recv() {
                        *observed.lock().unwrap() = Some(rx.try_recv().is_ok());
                    }
                },
            );
            handoff_tx.send(timer.subscribe()).unwrap();

            timer.start();
            scheduler.advance(Duration::from_millis(5));

            assert_eq!(*seen.lock().unwrap(), Some(true));
        }

        #[test]
        fn test_single_slot_keeps_first_value() {
            let (mut timer, scheduler) = mock_timer(10);
            timer.start();
            scheduler.advance(Duration::from_millis(10));
            let first = scheduler.now();

            timer.restart(Duration::from_millis(10));
            scheduler.advance(Duration::from_millis(10));

            let rx = timer.expirations();
            assert_eq!(rx.try_recv().unwrap(), first);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_subscribe_shares_slot() {
            let (mut timer, scheduler) = mock_timer(10);
            let rx = timer.subscribe();
            timer.start();
            scheduler.advance(Duration::from_millis(10));

            assert!(rx.try_recv().is_ok());
            assert!(timer.expirations().try_recv().is_err());
        }
    }

    // ------------------------------------------------------------------------
    // Drop and Introspection Tests
    // ------------------------------------------------------------------------

    mod misc_tests {
        use super::*;

        #[test]
        fn test_drop_cancels_armed_handle() {
            let (mut timer, scheduler, fired) = counting_timer(100);
            timer.start();
            assert_eq!(scheduler.armed_count(), 1);

            drop(timer);
            assert_eq!(scheduler.armed_count(), 0);
            assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
            assert_eq!(fired.load(Ordering::SeqCst), 0);
        }

        #[test]
        fn test_from_config() {
            let scheduler = Arc::new(MockScheduler::new());
            let config = TimerConfig::new(Duration::from_millis(250)).with_name("lease");

            let timer = PausableTimer::from_config(&config, scheduler).unwrap();
            assert_eq!(timer.name(), "lease");
            assert_eq!(timer.remaining(), Duration::from_millis(250));
        }

        #[test]
        fn test_from_invalid_config() {
            let scheduler = Arc::new(MockScheduler::new());
            let result = PausableTimer::from_config(&TimerConfig::new(Duration::ZERO), scheduler);

            assert!(result.unwrap_err().is_config_error());
        }

        #[test]
        fn test_snapshot() {
            let (timer, scheduler) = mock_timer(1000);
            let mut timer = timer.with_name("door");
            timer.start();
            scheduler.advance(Duration::from_millis(250));
            timer.pause();

            let snapshot = timer.snapshot();
            assert_eq!(snapshot.name, "door");
            assert_eq!(snapshot.state, TimerState::Idle);
            assert_eq!(snapshot.remaining_ms, 750);
        }

        #[test]
        fn test_rename_while_armed() {
            let (mut timer, scheduler) = mock_timer(100);
            timer.start();

            timer.rename("lease");
            assert_eq!(timer.name(), "lease");

            scheduler.advance(Duration::from_millis(100));
            assert_eq!(timer.snapshot().name, "lease");
            assert_eq!(timer.state(), TimerState::Expired);
        }

        #[test]
        fn test_debug_impl() {
            let (timer, _scheduler) = mock_timer(10);
            let debug_str = format!("{:?}", timer);
            assert!(debug_str.contains("PausableTimer"));
            assert!(debug_str.contains("Idle"));
        }
    }
}
