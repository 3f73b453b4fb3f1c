//! # Notify queue.
//!
//! [`NotifyQueue`] holds the pending (name, payload) pairs behind
//! [`Emitter::notify`](crate::Emitter::notify) and the state that keeps the
//! batching invariant: while the queue is non-empty, exactly one timer is
//! armed for it.
//!
//! ## Rules
//! - A push while a timer is armed coalesces onto it; the existing handle is
//!   returned so every caller in the batch can cancel the same flush.
//! - A push while the flush is draining joins the in-flight batch
//!   (drain-to-empty); the handle returned is the spent one.
//! - A push on an idle queue (first ever, after a completed flush, or after
//!   a cancel) arms a fresh timer. Cancelling drops the timer, **not** the
//!   queued items: they flush with the next push's timer.
//! - The drain loop takes the lock once per item, so handlers invoked from a
//!   flush may push re-entrantly.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::Value;

use crate::timer::TimerHandle;

/// One deferred notification.
pub(crate) struct PendingNotice {
    pub(crate) name: String,
    pub(crate) payload: Option<Value>,
}

/// Deferred-dispatch queue with single-timer batching.
pub(crate) struct NotifyQueue {
    state: Mutex<QueueState>,
}

struct QueueState {
    pending: VecDeque<PendingNotice>,
    timer: Option<TimerHandle>,
    flushing: bool,
}

impl NotifyQueue {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                pending: VecDeque::new(),
                timer: None,
                flushing: false,
            }),
        }
    }

    /// Enqueues a notice and returns the timer handle covering it.
    ///
    /// `arm` runs under the queue lock when no timer covers the batch yet;
    /// it must schedule the flush and return its handle.
    pub(crate) fn push_with(
        &self,
        name: String,
        payload: Option<Value>,
        arm: impl FnOnce() -> TimerHandle,
    ) -> TimerHandle {
        let mut state = self.state.lock();
        state.pending.push_back(PendingNotice { name, payload });

        if state.flushing {
            if let Some(handle) = &state.timer {
                return handle.clone();
            }
        }
        if let Some(handle) = &state.timer {
            if handle.is_running() {
                return handle.clone();
            }
        }
        let handle = arm();
        state.timer = Some(handle.clone());
        handle
    }

    /// Marks the drain as in progress so concurrent pushes join the batch.
    pub(crate) fn begin_flush(&self) {
        self.state.lock().flushing = true;
    }

    /// Takes the next notice, releasing the lock before the caller
    /// evaluates it.
    pub(crate) fn pop(&self) -> Option<PendingNotice> {
        self.state.lock().pending.pop_front()
    }

    /// Ends the drain; returns `true` when items slipped in after the final
    /// pop, meaning the caller must arm a fresh timer for them.
    pub(crate) fn end_flush(&self) -> bool {
        let mut state = self.state.lock();
        state.flushing = false;
        !state.pending.is_empty()
    }

    /// Records the timer armed for a leftover batch (see [`Self::end_flush`]).
    pub(crate) fn record(&self, handle: TimerHandle) {
        self.state.lock().timer = Some(handle);
    }

    /// Queue depth, for tests.
    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.state.lock().pending.len()
    }
}
