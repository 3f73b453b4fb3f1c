//! # Tokio-backed scheduler.
//!
//! [`TokioScheduler`] arms callbacks as spawned tasks that race
//! `tokio::time::sleep` against the handle's cancellation token. This is the
//! default scheduler installed by
//! [`EmitterBuilder::build`](crate::EmitterBuilder::build).
//!
//! ### Notes
//! - Callbacks run on a runtime worker thread, not on the thread that armed
//!   them.
//! - [`TokioScheduler::new`] binds to the current runtime and therefore must
//!   be called from within one; use [`TokioScheduler::with_handle`] to bind
//!   an explicit runtime from the outside.

use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::timer::handle::TimerHandle;
use crate::timer::scheduler::{ScheduledFn, Scheduler};

/// Production scheduler riding the tokio timer.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Binds a scheduler to the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn new() -> Self {
        Self {
            handle: Handle::current(),
        }
    }

    /// Binds a scheduler to an explicit runtime handle.
    pub fn with_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: ScheduledFn) -> TimerHandle {
        let handle = TimerHandle::new();
        let armed = handle.clone();
        self.handle.spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    if armed.begin_fire() {
                        callback();
                    }
                }
                _ = armed.token().cancelled() => {}
            }
        });
        handle
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_schedule_fires_after_delay() {
        let scheduler = TokioScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let probe = fired.clone();

        let handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert!(handle.is_running());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1, "callback should fire once");
        assert!(!handle.is_running(), "handle must disarm after firing");
    }

    #[tokio::test]
    async fn test_cancel_prevents_fire() {
        let scheduler = TokioScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let probe = fired.clone();

        let handle = scheduler.schedule(
            Duration::from_millis(50),
            Box::new(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }),
        );
        handle.cancel();

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(
            fired.load(Ordering::SeqCst),
            0,
            "cancelled callback must not run"
        );
    }
}
