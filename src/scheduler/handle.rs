//! Cancellable handle for one armed scheduling request.
//!
//! Every handle wraps a one-shot latch that moves from `Pending` to either
//! `Fired` or `Cancelled` exactly once. The backend must win `try_fire`
//! before running the callback and `cancel` must win `try_cancel`, so a
//! failed cancel always means the callback is running or has run.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crossbeam_channel::Sender;
use tokio::task::AbortHandle;

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// Shared one-shot latch between a handle and its armed callback.
#[derive(Debug, Default)]
pub struct Latch(AtomicU8);

impl Latch {
    /// Claims the latch for firing. Returns false if it was cancelled.
    pub fn try_fire(&self) -> bool {
        self.0
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Claims the latch for cancellation. Returns false if firing won.
    pub fn try_cancel(&self) -> bool {
        self.0
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire) == PENDING
    }

    pub fn is_fired(&self) -> bool {
        self.0.load(Ordering::Acquire) == FIRED
    }
}

/// Backend-specific resource released after a successful cancel.
#[derive(Debug)]
pub(crate) enum Disarm {
    None,
    Task(AbortHandle),
    Thread(Sender<()>),
}

/// Opaque, cancellable reference to one armed scheduling request.
#[derive(Debug)]
pub struct ScheduleHandle {
    latch: Arc<Latch>,
    disarm: Disarm,
}

impl ScheduleHandle {
    /// Creates a pending handle with no backend resource attached.
    pub fn pending() -> Self {
        Self {
            latch: Arc::new(Latch::default()),
            disarm: Disarm::None,
        }
    }

    pub(crate) fn with_disarm(mut self, disarm: Disarm) -> Self {
        self.disarm = disarm;
        self
    }

    /// Returns the latch to be moved into the armed callback.
    pub fn latch(&self) -> Arc<Latch> {
        Arc::clone(&self.latch)
    }

    /// Returns true while the callback has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.latch.is_pending()
    }

    /// Prevents the callback from running.
    ///
    /// Returns false if the callback already started (or finished) running.
    pub fn cancel(&self) -> bool {
        if !self.latch.try_cancel() {
            return false;
        }
        match &self.disarm {
            Disarm::None => {}
            Disarm::Task(abort) => abort.abort(),
            Disarm::Thread(wake) => {
                // The thread exits on its own once the deadline passes.
                let _ = wake.try_send(());
            }
        }
        true
    }
}
