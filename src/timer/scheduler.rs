//! # Scheduler trait.
//!
//! Extension point for supplying the engine's timer. The production
//! implementation is [`TokioScheduler`](crate::TokioScheduler); tests drive
//! time by hand with [`ManualScheduler`](crate::ManualScheduler).

use std::time::{Duration, Instant};

use crate::timer::handle::TimerHandle;

/// One-shot callback accepted by [`Scheduler::schedule`].
pub type ScheduledFn = Box<dyn FnOnce() + Send>;

/// Cancellable one-shot timer provider.
///
/// ### Implementation requirements
/// - `schedule` must not invoke the callback inline; it runs after `delay`
///   on the scheduler's own turn.
/// - The returned [`TimerHandle`] must observe [`TimerHandle::cancel`]:
///   a cancelled callback never runs.
/// - `now` must be monotonic and consistent with the delays `schedule`
///   honors; the triple-click window is measured against it.
pub trait Scheduler: Send + Sync + 'static {
    /// Arms a one-shot callback to run after `delay`.
    fn schedule(&self, delay: Duration, callback: ScheduledFn) -> TimerHandle;

    /// Returns the scheduler's current instant.
    fn now(&self) -> Instant;
}
