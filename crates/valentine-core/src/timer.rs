//! Cancel-on-drop timers.
//!
//! Every interval or timeout is owned by a [`TimerGuard`]. Dropping the guard
//! (or calling [`TimerGuard::abort`]) stops the underlying task, so a timer
//! can never outlive the screen or session that started it.
//!
//! [`DeferredSlot`] holds at most one pending deferred action: scheduling a
//! new one cancels the previous. It is generic over [`Cancel`] so the UI can
//! slot its own task handles into the same discipline.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A handle to deferred work that can be cancelled.
pub trait Cancel {
    fn cancel(self);
}

/// Owns a spawned timer task and aborts it when dropped.
#[derive(Debug)]
#[must_use = "dropping a TimerGuard cancels its timer"]
pub struct TimerGuard {
    handle: Option<JoinHandle<()>>,
}

impl TimerGuard {
    /// Spawn `fut` on the current tokio runtime and guard it.
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(fut)),
        }
    }

    /// Stop the timer now.
    pub fn abort(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// True once the task has run to completion or been aborted.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Cancel for TimerGuard {
    fn cancel(self) {
        self.abort();
    }
}

/// Run `f` every `period`, starting one full period from now.
///
/// Callbacks run one at a time; a late tick is delayed rather than bunched,
/// so ticks never overlap or burst.
pub fn every<F>(period: Duration, mut f: F) -> TimerGuard
where
    F: FnMut() + Send + 'static,
{
    TimerGuard::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            f();
        }
    })
}

/// Run `f` once after `delay`.
pub fn after<F>(delay: Duration, f: F) -> TimerGuard
where
    F: FnOnce() + Send + 'static,
{
    TimerGuard::spawn(async move {
        time::sleep(delay).await;
        f();
    })
}

/// At most one pending deferred action.
#[derive(Debug)]
pub struct DeferredSlot<H: Cancel> {
    pending: Option<H>,
}

impl<H: Cancel> DeferredSlot<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replace the pending action, cancelling the previous one.
    pub fn schedule(&mut self, handle: H) {
        if let Some(previous) = self.pending.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: Cancel> Default for DeferredSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}
