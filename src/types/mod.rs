//! Core data types for the pausable timer.
//!
//! This module defines the data structures used for:
//! - Timer state tracking
//! - Timer configuration with validation
//! - Serializable snapshots for introspection

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scheduler::SchedulerError;

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of a [`PausableTimer`](crate::PausableTimer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// Not counting down: freshly created or paused
    #[default]
    Idle,
    /// Counting down with a live scheduled handle
    Active,
    /// Fired naturally or stopped
    Expired,
}

impl TimerState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Active => "active",
            TimerState::Expired => "expired",
        }
    }

    /// Returns true if the timer is counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerState::Active)
    }

    /// Returns true if the timer has reached its terminal state.
    pub fn is_expired(&self) -> bool {
        matches!(self, TimerState::Expired)
    }
}

// ============================================================================
// TimerError
// ============================================================================

/// Errors raised while building a timer.
///
/// State transitions themselves never fail; they report no-ops through
/// their boolean return value.
#[derive(Debug, Error)]
pub enum TimerError {
    /// The configuration did not pass validation.
    #[error("invalid timer configuration: {0}")]
    InvalidConfig(String),

    /// The scheduler backend could not be created.
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl TimerError {
    /// Returns true if this error comes from configuration validation.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for a pausable timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Initial countdown duration
    #[serde(rename = "durationMs", with = "duration_millis")]
    pub duration: Duration,
    /// Name used in log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(1),
            name: None,
        }
    }
}

impl TimerConfig {
    /// Creates a configuration with the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Sets the countdown duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the name used in log output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidConfig` if the duration is zero or the
    /// name is blank.
    pub fn validate(&self) -> Result<(), TimerError> {
        if self.duration.is_zero() {
            return Err(TimerError::InvalidConfig(
                "duration must be greater than zero".to_string(),
            ));
        }
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(TimerError::InvalidConfig(
                "name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub(crate) fn as_millis_u64(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(super::as_millis_u64(*duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// Point-in-time view of a timer, suitable for logging or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Timer name
    pub name: String,
    /// Current state
    pub state: TimerState,
    /// Remaining milliseconds as of the last transition
    #[serde(rename = "remainingMs")]
    pub remaining_ms: u64,
}

impl TimerSnapshot {
    /// Creates a snapshot from a timer.
    pub fn from_timer(timer: &crate::PausableTimer) -> Self {
        Self {
            name: timer.name(),
            state: timer.state(),
            remaining_ms: as_millis_u64(timer.remaining()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
