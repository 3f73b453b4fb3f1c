//! # Hub.
//!
//! [`Hub`] is the shared state behind one emitter family: the binding
//! [`Store`], the [`NotifyQueue`], the native [`ListenerTable`], the click
//! tracker and the trace switch. A root emitter owns one hub; every scoped
//! emitter derived from it holds the same `Arc`, which is what makes
//! cross-context delivery work.
//!
//! ## Architecture
//!
//! ```text
//!  Emitter (root) ──┐
//!  Emitter (ctx-1) ─┼──> Arc<Hub> ──┬──> Store          (bindings)
//!  Emitter (ctx-2) ─┘               ├──> NotifyQueue    (deferred batch)
//!                                   ├──> ListenerTable  (native wrappers)
//!                                   ├──> ClickTracker   (tripleclick)
//!                                   ├──> DebugTrace     (trace switch)
//!                                   └──> dyn Scheduler  (timers)
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::core::config::Config;
use crate::core::debug::DebugTrace;
use crate::core::notify::NotifyQueue;
use crate::native::{ClickTracker, ListenerTable};
use crate::store::Store;
use crate::timer::{Scheduler, TimerHandle};

pub(crate) struct Hub {
    pub(crate) store: Store,
    pub(crate) notices: NotifyQueue,
    pub(crate) trace: DebugTrace,
    pub(crate) listeners: ListenerTable,
    pub(crate) clicks: Arc<ClickTracker>,
    pub(crate) scheduler: Arc<dyn Scheduler>,
    pub(crate) config: Config,
}

impl Hub {
    pub(crate) fn new(config: Config, scheduler: Arc<dyn Scheduler>) -> Arc<Self> {
        Arc::new(Self {
            store: Store::new(),
            notices: NotifyQueue::new(),
            trace: DebugTrace::new(config.debug_enabled, config.debug_terse),
            listeners: ListenerTable::new(),
            clicks: Arc::new(ClickTracker::new(config.click_window)),
            scheduler,
            config,
        })
    }

    /// Enqueues a deferred broadcast, arming the flush timer when the queue
    /// does not already have one running.
    pub(crate) fn notify(self: &Arc<Self>, name: &str, payload: Option<Value>) -> TimerHandle {
        self.notices
            .push_with(name.to_string(), payload, || self.arm())
    }

    /// Schedules the batch flush after the configured delay.
    ///
    /// The callback holds a weak reference so an armed timer never keeps a
    /// dropped emitter family alive.
    fn arm(self: &Arc<Self>) -> TimerHandle {
        let weak = Arc::downgrade(self);
        self.scheduler.schedule(
            self.config.notify_delay,
            Box::new(move || {
                if let Some(hub) = weak.upgrade() {
                    hub.flush_notices();
                }
            }),
        )
    }

    /// Drains the queue to empty, broadcasting each notice in FIFO order.
    ///
    /// The lock is taken once per item, so a handler may enqueue further
    /// notices re-entrantly; those join this drain. Items pushed between the
    /// final pop and the drain end get a fresh timer instead.
    fn flush_notices(self: &Arc<Self>) {
        self.notices.begin_flush();
        while let Some(notice) = self.notices.pop() {
            self.trace
                .operation("flush", &notice.name, notice.payload.as_ref());
            self.store.evaluate(&notice.name, notice.payload.as_ref());
        }
        if self.notices.end_flush() {
            let handle = self.arm();
            self.notices.record(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::context::ContextId;
    use crate::handlers::HandlerFn;
    use crate::timer::ManualScheduler;

    fn hub_with_manual() -> (Arc<Hub>, Arc<ManualScheduler>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let hub = Hub::new(Config::default(), scheduler.clone());
        (hub, scheduler)
    }

    #[test]
    fn test_notify_defers_until_the_delay_elapses() {
        let (hub, scheduler) = hub_with_manual();
        let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let probe = seen.clone();
        hub.store.save(
            ContextId::DEFAULT,
            "tick",
            HandlerFn::arc(move |_| {
                probe.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                None
            }),
        );

        hub.notify("tick", None);
        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 0);

        scheduler.advance(Duration::from_millis(30));
        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notifies_coalesce_onto_one_timer() {
        let (hub, scheduler) = hub_with_manual();
        let first = hub.notify("a", None);
        let second = hub.notify("b", None);
        assert_eq!(scheduler.armed(), 1, "batch must share one timer");
        first.cancel();
        assert!(!second.is_running(), "handles cover the same batch");
    }

    #[test]
    fn test_cancel_keeps_items_for_the_next_notify() {
        let (hub, scheduler) = hub_with_manual();
        let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let probe = seen.clone();
        hub.store.save(
            ContextId::DEFAULT,
            "tick",
            HandlerFn::arc(move |_| {
                probe.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                None
            }),
        );

        hub.notify("tick", None).cancel();
        scheduler.advance(Duration::from_millis(60));
        assert_eq!(
            seen.load(std::sync::atomic::Ordering::SeqCst),
            0,
            "cancelled batch must not flush"
        );

        hub.notify("tick", None);
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(
            seen.load(std::sync::atomic::Ordering::SeqCst),
            2,
            "next notify flushes the kept backlog too"
        );
    }

    #[test]
    fn test_reentrant_notify_joins_the_running_drain() {
        let (hub, scheduler) = hub_with_manual();
        let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let log = order.clone();
        let inner_hub = Arc::downgrade(&hub);
        hub.store.save(
            ContextId::DEFAULT,
            "first",
            HandlerFn::arc(move |_| {
                log.lock().push("first");
                if let Some(hub) = inner_hub.upgrade() {
                    hub.notify("second", None);
                }
                None
            }),
        );
        let log = order.clone();
        hub.store.save(
            ContextId::DEFAULT,
            "second",
            HandlerFn::arc(move |_| {
                log.lock().push("second");
                None
            }),
        );

        hub.notify("first", None);
        scheduler.advance(Duration::from_millis(30));
        assert_eq!(
            *order.lock(),
            vec!["first", "second"],
            "a notice pushed mid-drain must flush in the same batch"
        );
        assert_eq!(scheduler.armed(), 0, "drained queue leaves no timer armed");
    }
}
