//! # Timer handle.
//!
//! [`TimerHandle`] is the cancellable unit returned by
//! [`Scheduler::schedule`](crate::Scheduler::schedule) and by
//! [`Emitter::notify`](crate::Emitter::notify). It stays armed until the
//! callback fires or someone cancels it, whichever comes first.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

/// Handle for one armed one-shot callback.
///
/// ### Properties
/// - **Cloneable**: clones share the same armed state; cancelling any clone
///   cancels the callback.
/// - **Single consumption**: the arm is consumed exactly once, by the fire
///   or by the first cancel; later cancels are no-ops.
#[derive(Clone, Debug)]
pub struct TimerHandle {
    inner: Arc<HandleInner>,
}

#[derive(Debug)]
struct HandleInner {
    armed: AtomicBool,
    token: CancellationToken,
}

impl TimerHandle {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(HandleInner {
                armed: AtomicBool::new(true),
                token: CancellationToken::new(),
            }),
        }
    }

    /// Cancels the pending callback.
    ///
    /// Idempotent: a second cancel, or a cancel after the callback already
    /// ran, does nothing.
    pub fn cancel(&self) {
        if self.inner.armed.swap(false, Ordering::SeqCst) {
            self.inner.token.cancel();
        }
    }

    /// Returns `true` while the callback is still pending.
    pub fn is_running(&self) -> bool {
        self.inner.armed.load(Ordering::SeqCst)
    }

    /// Consumes the arm at fire time.
    ///
    /// Returns `true` exactly once, and only if the handle was not cancelled
    /// first; schedulers must skip the callback when this returns `false`.
    pub(crate) fn begin_fire(&self) -> bool {
        self.inner.armed.swap(false, Ordering::SeqCst)
    }

    /// Token observed by async schedulers to abandon the sleep on cancel.
    pub(crate) fn token(&self) -> &CancellationToken {
        &self.inner.token
    }

    /// Whether two handles cover the same armed callback, for tests.
    #[cfg(test)]
    pub(crate) fn inner_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
