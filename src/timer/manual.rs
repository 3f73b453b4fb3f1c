//! # Manually driven scheduler.
//!
//! [`ManualScheduler`] holds armed callbacks against a virtual clock that
//! only moves when a test calls [`ManualScheduler::advance`]. Deterministic
//! replacement for [`TokioScheduler`](crate::TokioScheduler) in tests and
//! demos that exercise notify batching or the triple-click window.
//!
//! ## Rules
//! - `advance` fires every due callback in due order (insertion order on
//!   ties), each outside the internal lock, so a callback may re-enter the
//!   scheduler.
//! - A callback scheduled during `advance` fires within the same call if its
//!   due time still falls inside the advanced window.
//! - Cancelled entries are discarded silently when their due time comes.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::timer::handle::TimerHandle;
use crate::timer::scheduler::{ScheduledFn, Scheduler};

/// Virtual-clock scheduler for tests.
pub struct ManualScheduler {
    inner: Mutex<ManualState>,
}

struct ManualState {
    now: Instant,
    queue: Vec<ManualEntry>,
}

struct ManualEntry {
    due: Instant,
    handle: TimerHandle,
    callback: ScheduledFn,
}

impl ManualScheduler {
    /// Creates a scheduler with its virtual clock anchored at the real now.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ManualState {
                now: Instant::now(),
                queue: Vec::new(),
            }),
        }
    }

    /// Moves the virtual clock forward, firing every callback that comes due.
    ///
    /// Callbacks run outside the internal lock, in due order; ties fire in
    /// insertion order. The clock lands exactly `delta` past where it was,
    /// stepping through each fired entry's due time on the way.
    pub fn advance(&self, delta: Duration) {
        let target = self.inner.lock().now + delta;
        loop {
            let next = {
                let mut state = self.inner.lock();
                let due_idx = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.due <= target)
                    .min_by_key(|(_, entry)| entry.due)
                    .map(|(idx, _)| idx);
                match due_idx {
                    Some(idx) => {
                        let entry = state.queue.remove(idx);
                        state.now = state.now.max(entry.due);
                        Some(entry)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            match next {
                Some(entry) => {
                    if entry.handle.begin_fire() {
                        (entry.callback)();
                    }
                }
                None => break,
            }
        }
    }

    /// Number of armed entries still awaiting their due time.
    pub fn armed(&self) -> usize {
        self.inner
            .lock()
            .queue
            .iter()
            .filter(|entry| entry.handle.is_running())
            .count()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: ScheduledFn) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut state = self.inner.lock();
        let due = state.now + delay;
        state.queue.push(ManualEntry {
            due,
            handle: handle.clone(),
            callback,
        });
        handle
    }

    fn now(&self) -> Instant {
        self.inner.lock().now
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let c = Arc::new(AtomicUsize::new(0));
        (c.clone(), c)
    }

    #[test]
    fn test_fires_only_once_due() {
        let scheduler = ManualScheduler::new();
        let (fired, probe) = counter();
        scheduler.schedule(
            Duration::from_millis(30),
            Box::new(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }),
        );

        scheduler.advance(Duration::from_millis(29));
        assert_eq!(fired.load(Ordering::SeqCst), 0, "not due yet at 29ms");

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(fired.load(Ordering::SeqCst), 1, "due exactly at 30ms");

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(fired.load(Ordering::SeqCst), 1, "one-shot must not refire");
    }

    #[test]
    fn test_cancel_discards_entry() {
        let scheduler = ManualScheduler::new();
        let (fired, probe) = counter();
        let handle = scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }),
        );
        assert_eq!(scheduler.armed(), 1);

        handle.cancel();
        assert_eq!(scheduler.armed(), 0, "cancelled entry no longer armed");

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_fires_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let late = order.clone();
        scheduler.schedule(
            Duration::from_millis(20),
            Box::new(move || late.lock().push("late")),
        );
        let early = order.clone();
        scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || early.lock().push("early")),
        );

        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*order.lock(), vec!["early", "late"]);
    }

    #[test]
    fn test_reentrant_schedule_fires_within_window() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (fired, probe) = counter();

        let inner = scheduler.clone();
        scheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                inner.schedule(
                    Duration::from_millis(10),
                    Box::new(move || {
                        probe.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        scheduler.advance(Duration::from_millis(30));
        assert_eq!(
            fired.load(Ordering::SeqCst),
            1,
            "callback scheduled mid-advance and due inside the window must fire"
        );
    }

    #[test]
    fn test_now_tracks_advance() {
        let scheduler = ManualScheduler::new();
        let start = scheduler.now();
        scheduler.advance(Duration::from_millis(400));
        assert_eq!(scheduler.now() - start, Duration::from_millis(400));
    }
}
