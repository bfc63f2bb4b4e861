//! Pausable Timer Library
//!
//! A one-shot timer that, unlike a plain fire-once timer, can be paused
//! mid-flight and resumed with the time it had left. It includes:
//! - `timer`: the pause/resume/stop/restart state machine
//! - `scheduler`: the host one-shot primitive it builds on (tokio, threads, mock)
//! - `types`: state, configuration and snapshot types
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use pausable_timer::{PausableTimer, TokioScheduler};
//!
//! # async fn example() -> Result<(), pausable_timer::TimerError> {
//! let scheduler = Arc::new(TokioScheduler::current()?);
//! let mut timer = PausableTimer::with_callback(Duration::from_secs(1), scheduler, || {
//!     println!("expired");
//! });
//!
//! timer.start();
//! tokio::time::sleep(Duration::from_millis(300)).await;
//! timer.pause(); // 700ms left
//! timer.start();
//! # Ok(())
//! # }
//! ```

pub mod scheduler;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use scheduler::{
    Callback, MockScheduler, ScheduleHandle, Scheduler, SchedulerError, ThreadScheduler,
    TokioScheduler,
};
pub use timer::{ExpireCallback, PausableTimer};
pub use types::{TimerConfig, TimerError, TimerSnapshot, TimerState};
