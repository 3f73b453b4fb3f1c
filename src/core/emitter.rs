//! # Emitter.
//!
//! [`Emitter`] is the mediator façade: components exchange named messages
//! through it without holding references to each other, and native event
//! sources are bridged through the same subscription surface.
//!
//! ## Architecture
//!
//! ```text
//!              subscribe / unsubscribe (tagged commands)
//!                │
//!  Emitter ──────┼──> Store          message bindings, per context
//!    │           └──> ListenerTable  generated native wrappers
//!    │
//!    ├── event    ──> broadcast to every binding, in order
//!    ├── request  ──> exactly one binding, result returned
//!    ├── demand   ──> at most one binding, None tolerated
//!    ├── notify   ──> queued, flushed in one batch after the delay
//!    └── watching ──> binding count
//! ```
//!
//! ## Rules
//! - A **root** emitter owns the default context and cannot be rebased;
//!   [`Emitter::create`] derives **scoped** emitters over the same hub, and
//!   only those may move between contexts via [`Emitter::in_context`].
//! - Handlers run synchronously on the calling thread; only `notify` defers.
//! - Handlers may re-enter the emitter freely (subscribe, unsubscribe,
//!   dispatch) while being invoked.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{Config, EmitterBuilder, HandlerFn, ManualScheduler, Subscription};
//!
//! let emitter = EmitterBuilder::new(Config::default())
//!     .with_scheduler(Arc::new(ManualScheduler::new()))
//!     .build();
//!
//! emitter.subscribe(Subscription::message(
//!     "profile.saved",
//!     HandlerFn::arc(|payload| payload.cloned()),
//! ))?;
//!
//! emitter.event("Profile.Saved", serde_json::json!({ "id": 7 }));
//! assert_eq!(emitter.watching("profile.saved"), 1);
//! # Ok::<(), switchboard::DispatchError>(())
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::core::builder::EmitterBuilder;
use crate::core::config::Config;
use crate::core::context::ContextId;
use crate::core::hub::Hub;
use crate::core::subscription::{Subscription, Unsubscription};
use crate::error::DispatchError;
use crate::handlers::NativeRef;
use crate::native::{identity, EventRef, ListenerRef, TargetRef};
use crate::timer::TimerHandle;

/// Context-bound dispatch façade over a shared hub.
///
/// Cloning is cheap and yields another handle onto the same hub and context.
#[derive(Clone)]
pub struct Emitter {
    hub: Arc<Hub>,
    context: ContextId,
    root: bool,
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("context", &self.context)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// Root emitter over a fresh hub; built by
    /// [`EmitterBuilder`](crate::EmitterBuilder).
    pub(crate) fn root(hub: Arc<Hub>) -> Self {
        Self {
            hub,
            context: ContextId::DEFAULT,
            root: true,
        }
    }

    /// Shorthand for [`EmitterBuilder::new`].
    pub fn builder(cfg: Config) -> EmitterBuilder {
        EmitterBuilder::new(cfg)
    }

    /// The context this emitter files subscriptions under.
    #[inline]
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// Whether this is the root emitter of its hub.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Derives a scoped emitter bound to `context`, sharing this emitter's
    /// hub: messages cross contexts, bulk removal does not.
    pub fn create(&self, context: ContextId) -> Emitter {
        Emitter {
            hub: self.hub.clone(),
            context,
            root: false,
        }
    }

    /// Rebinds this scoped emitter to another context.
    ///
    /// # Errors
    /// [`DispatchError::RootRebase`] when called on the root emitter; derive
    /// a scoped one with [`Emitter::create`] instead.
    pub fn in_context(&mut self, context: ContextId) -> Result<&mut Self, DispatchError> {
        if self.root {
            return Err(DispatchError::RootRebase);
        }
        self.context = context;
        Ok(self)
    }

    /// Broadcasts `payload` to every handler bound to `name`, in
    /// registration order, across all contexts.
    ///
    /// Unknown names are a quiet no-op. Returns `&self` for chaining.
    pub fn event(&self, name: &str, payload: impl Into<Option<Value>>) -> &Self {
        let payload = payload.into();
        self.hub.trace.operation("event", name, payload.as_ref());
        self.hub.store.evaluate(name, payload.as_ref());
        self
    }

    /// Invokes the single handler bound to `name` and returns its result.
    ///
    /// A handler producing no result is tolerated but logged as a warning,
    /// since the caller asked for one.
    ///
    /// # Errors
    /// [`DispatchError::NoHandler`] on an empty bucket,
    /// [`DispatchError::AmbiguousHandlers`] on more than one binding.
    pub fn request(
        &self,
        name: &str,
        payload: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, DispatchError> {
        let payload = payload.into();
        let result = self.hub.store.request(name, payload.as_ref())?;
        if result.is_none() {
            tracing::warn!(event = name, "request handler returned no result");
        }
        self.hub
            .trace
            .outcome("request", name, payload.as_ref(), result.as_ref());
        Ok(result)
    }

    /// Like [`Emitter::request`], but an unknown name yields `Ok(None)`
    /// instead of an error. Ambiguity still fails.
    ///
    /// # Errors
    /// [`DispatchError::AmbiguousHandlers`] on more than one binding.
    pub fn demand(
        &self,
        name: &str,
        payload: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, DispatchError> {
        let payload = payload.into();
        let result = self.hub.store.demand(name, payload.as_ref())?;
        self.hub
            .trace
            .outcome("demand", name, payload.as_ref(), result.as_ref());
        Ok(result)
    }

    /// Number of handlers currently bound to `name`, across all contexts.
    pub fn watching(&self, name: &str) -> usize {
        let count = self.hub.store.watching(name);
        self.hub.trace.count("watching", name, count);
        count
    }

    /// Defers an [`Emitter::event`]-equivalent broadcast.
    ///
    /// The notice joins the hub's batch; the whole batch flushes FIFO once the
    /// configured delay elapses after its first notice. The returned handle
    /// covers the batch: cancelling it drops the timer but keeps the queued
    /// notices, which flush with the next `notify`'s timer instead.
    pub fn notify(&self, name: &str, payload: impl Into<Option<Value>>) -> TimerHandle {
        let payload = payload.into();
        self.hub.trace.operation("notify", name, payload.as_ref());
        self.hub.notify(name, payload)
    }

    /// Registers a subscription under this emitter's context.
    ///
    /// Message subscriptions land in the store; native ones attach a
    /// generated wrapper to the target, reusing the existing wrapper when the
    /// same (handler, event type) pair is already attached there.
    ///
    /// # Errors
    /// [`DispatchError::BadParameters`] on an empty name or event type.
    pub fn subscribe(&self, subscription: Subscription) -> Result<&Self, DispatchError> {
        match subscription {
            Subscription::Message { name, handler } => {
                if name.is_empty() {
                    return Err(DispatchError::BadParameters {
                        reason: "message subscriptions need a non-empty name".to_string(),
                    });
                }
                self.hub.store.save(self.context, &name, handler);
            }
            Subscription::Native {
                target,
                event_type,
                handler,
                extras,
            } => {
                if event_type.is_empty() {
                    return Err(DispatchError::BadParameters {
                        reason: "native subscriptions need a non-empty event type".to_string(),
                    });
                }
                self.attach_native(&target, &event_type, &handler, extras);
            }
        }
        Ok(self)
    }

    /// Removes subscriptions.
    ///
    /// [`Unsubscription::All`] removes everything this context owns; on the
    /// default context that clears the whole hub and logs a warning, since
    /// the blast radius is rarely intended.
    ///
    /// # Errors
    /// [`DispatchError::BadParameters`] on an empty name or event type.
    pub fn unsubscribe(&self, unsubscription: Unsubscription) -> Result<&Self, DispatchError> {
        match unsubscription {
            Unsubscription::All => {
                if self.context.is_default() {
                    tracing::warn!(
                        "unsubscribing on the default context removes every subscription hub-wide"
                    );
                }
                self.hub.store.remove(self.context, None, None);
            }
            Unsubscription::Message { name, handler } => {
                if name.is_empty() {
                    return Err(DispatchError::BadParameters {
                        reason: "message unsubscriptions need a non-empty name".to_string(),
                    });
                }
                self.hub
                    .store
                    .remove(self.context, Some(&name), handler.as_ref());
            }
            Unsubscription::Native {
                target,
                event_type,
                handler,
            } => {
                if event_type.is_empty() {
                    return Err(DispatchError::BadParameters {
                        reason: "native unsubscriptions need a non-empty event type".to_string(),
                    });
                }
                let detached =
                    self.hub
                        .listeners
                        .detach(identity(&handler), &event_type, identity(&target));
                if let Some((wrapper, attach_type)) = detached {
                    target.remove_listener(&attach_type, &wrapper);
                }
            }
        }
        Ok(self)
    }

    /// Applies the requested interruption primitives to a native event.
    ///
    /// `stop_propagation` drives both the modern call and the legacy bubble
    /// flag; `prevent_default` likewise pairs the call with the legacy
    /// return-value flag.
    pub fn interrupt(&self, event: &EventRef, stop_propagation: bool, prevent_default: bool) {
        if stop_propagation {
            event.set_cancel_bubble(true);
            event.stop_propagation();
        }
        if prevent_default {
            event.prevent_default();
            event.set_return_value(false);
        }
    }

    /// Switches operation tracing for the whole hub.
    ///
    /// While enabled, every `event`/`request`/`demand`/`notify`/`watching`
    /// call logs a line unless its name is listed in `filters` (matched
    /// case-insensitively). `terse` drops payloads from the lines.
    pub fn debug_mode(&self, enabled: bool, filters: Vec<String>, terse: bool) -> &Self {
        self.hub.trace.set(enabled, filters, terse);
        self
    }

    fn attach_native(
        &self,
        target: &TargetRef,
        event_type: &str,
        handler: &NativeRef,
        extras: Vec<Value>,
    ) {
        let installed = self
            .hub
            .listeners
            .attach(identity(handler), event_type, identity(target), || {
                self.make_wrapper(event_type, handler, extras)
            });
        if let Some((wrapper, attach_type)) = installed {
            target.add_listener(&attach_type, wrapper);
        }
    }

    /// Generates the wrapper installed on targets for a (handler, type) pair.
    ///
    /// `"tripleclick"` is synthesized: the wrapper attaches to `"click"` and
    /// forwards only when the hub's click tracker completes a triple inside
    /// the configured window.
    fn make_wrapper(
        &self,
        event_type: &str,
        handler: &NativeRef,
        extras: Vec<Value>,
    ) -> (ListenerRef, String) {
        let callback = handler.clone();
        if event_type == "tripleclick" {
            let tracker = self.hub.clicks.clone();
            let scheduler = self.hub.scheduler.clone();
            let wrapper: ListenerRef = Arc::new(move |event: EventRef| {
                if tracker.observe(scheduler.now()) {
                    callback.on_event(&event, &extras);
                }
            });
            (wrapper, "click".to_string())
        } else {
            let wrapper: ListenerRef = Arc::new(move |event: EventRef| {
                callback.on_event(&event, &extras);
            });
            (wrapper, event_type.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::core::builder::EmitterBuilder;
    use crate::core::config::Config;
    use crate::handlers::{HandlerFn, HandlerRef, NativeFn};
    use crate::native::{SyntheticEvent, SyntheticTarget};
    use crate::timer::ManualScheduler;

    fn manual_pair() -> (Emitter, Arc<ManualScheduler>) {
        let scheduler = Arc::new(ManualScheduler::new());
        let emitter = EmitterBuilder::new(Config::default())
            .with_scheduler(scheduler.clone())
            .build();
        (emitter, scheduler)
    }

    fn manual_emitter() -> Emitter {
        manual_pair().0
    }

    fn counting(count: &Arc<AtomicUsize>) -> HandlerRef {
        let count = count.clone();
        HandlerFn::arc(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
            None
        })
    }

    fn counting_native(count: &Arc<AtomicUsize>) -> NativeRef {
        let count = count.clone();
        NativeFn::arc(move |_event, _extras| {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_root_cannot_rebase() {
        let mut root = manual_emitter();
        assert!(root.is_root());
        let err = match root.in_context(ContextId::fresh()) {
            Err(err) => err,
            Ok(_) => panic!("root rebase must fail"),
        };
        assert_eq!(err.as_label(), "root_rebase");
    }

    #[test]
    fn test_scoped_emitter_may_rebase() {
        let root = manual_emitter();
        let first = ContextId::fresh();
        let second = ContextId::fresh();

        let mut scoped = root.create(first);
        assert!(!scoped.is_root());
        assert_eq!(scoped.context(), first);

        scoped
            .in_context(second)
            .unwrap_or_else(|err| panic!("scoped rebase must succeed: {err}"));
        assert_eq!(scoped.context(), second);
    }

    #[test]
    fn test_scoped_emitters_share_the_hub() {
        let root = manual_emitter();
        let scoped = root.create(ContextId::fresh());
        let count = Arc::new(AtomicUsize::new(0));

        scoped
            .subscribe(Subscription::message("ping", counting(&count)))
            .unwrap();
        root.event("ping", None);
        assert_eq!(
            count.load(Ordering::SeqCst),
            1,
            "a broadcast from any emitter must reach every context"
        );
    }

    #[test]
    fn test_empty_name_is_rejected_before_mutation() {
        let root = manual_emitter();
        let err = root
            .subscribe(Subscription::message("", HandlerFn::arc(|_| None)))
            .unwrap_err();
        assert_eq!(err.as_label(), "bad_parameters");
        assert_eq!(root.watching(""), 0, "failed subscribe must not register");

        let err = root
            .unsubscribe(Unsubscription::message_all(""))
            .unwrap_err();
        assert_eq!(err.as_label(), "bad_parameters");
    }

    #[test]
    fn test_scoped_unsubscribe_all_spares_other_contexts() {
        let root = manual_emitter();
        let mine = root.create(ContextId::fresh());
        let theirs = root.create(ContextId::fresh());
        let mine_count = Arc::new(AtomicUsize::new(0));
        let theirs_count = Arc::new(AtomicUsize::new(0));

        mine.subscribe(Subscription::message("tick", counting(&mine_count)))
            .unwrap();
        theirs
            .subscribe(Subscription::message("tick", counting(&theirs_count)))
            .unwrap();

        mine.unsubscribe(Unsubscription::All).unwrap();
        root.event("tick", None);
        assert_eq!(mine_count.load(Ordering::SeqCst), 0);
        assert_eq!(theirs_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_unsubscribe_all_clears_the_hub() {
        let root = manual_emitter();
        let scoped = root.create(ContextId::fresh());
        let count = Arc::new(AtomicUsize::new(0));

        scoped
            .subscribe(Subscription::message("tick", counting(&count)))
            .unwrap();
        root.subscribe(Subscription::message("tock", counting(&count)))
            .unwrap();

        root.unsubscribe(Unsubscription::All).unwrap();
        root.event("tick", None).event("tock", None);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dispatch_calls_chain() {
        let root = manual_emitter();
        let count = Arc::new(AtomicUsize::new(0));
        root.subscribe(Subscription::message("a", counting(&count)))
            .unwrap()
            .subscribe(Subscription::message("b", counting(&count)))
            .unwrap();

        root.event("a", json!({"n": 1})).event("b", None);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_independent_emitters_do_not_cross_talk() {
        let first = manual_emitter();
        let second = manual_emitter();
        let count = Arc::new(AtomicUsize::new(0));

        first
            .subscribe(Subscription::message("ping", counting(&count)))
            .unwrap();
        second.event("ping", None);
        assert_eq!(count.load(Ordering::SeqCst), 0, "hubs must stay separate");

        first.event("ping", None);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notify_flushes_fifo_after_the_delay() {
        let (root, scheduler) = manual_pair();
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let log = order.clone();
        root.subscribe(Subscription::message(
            "first",
            HandlerFn::arc(move |_| {
                log.lock().push("first");
                None
            }),
        ))
        .unwrap();
        let log = order.clone();
        root.subscribe(Subscription::message(
            "second",
            HandlerFn::arc(move |_| {
                log.lock().push("second");
                None
            }),
        ))
        .unwrap();

        root.notify("first", None);
        root.notify("second", None);
        assert!(order.lock().is_empty(), "notify must not dispatch eagerly");
        assert_eq!(scheduler.armed(), 1, "one timer covers the batch");

        scheduler.advance(Duration::from_millis(30));
        assert_eq!(*order.lock(), vec!["first", "second"]);
    }

    #[test]
    fn test_native_resubscribe_attaches_once() {
        let root = manual_emitter();
        let target = Arc::new(SyntheticTarget::new());
        let target_ref: TargetRef = target.clone();
        let count = Arc::new(AtomicUsize::new(0));
        let handler = counting_native(&count);

        root.subscribe(Subscription::native(
            target_ref.clone(),
            "click",
            handler.clone(),
        ))
        .unwrap();
        root.subscribe(Subscription::native(target_ref, "click", handler))
            .unwrap();

        assert_eq!(
            target.listener_count("click"),
            1,
            "re-subscribing the same pair must not double-attach"
        );
        target.emit("click", SyntheticEvent::arc());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_native_extras_replay_on_every_delivery() {
        let root = manual_emitter();
        let target = Arc::new(SyntheticTarget::new());
        let target_ref: TargetRef = target.clone();
        let seen: Arc<Mutex<Vec<Vec<Value>>>> = Arc::new(Mutex::new(Vec::new()));

        let log = seen.clone();
        root.subscribe(Subscription::native_with_args(
            target_ref,
            "keydown",
            NativeFn::arc(move |_event, extras| {
                log.lock().push(extras.to_vec());
            }),
            vec![json!("ctrl"), json!(17)],
        ))
        .unwrap();

        target.emit("keydown", SyntheticEvent::arc());
        target.emit("keydown", SyntheticEvent::arc());
        assert_eq!(
            *seen.lock(),
            vec![
                vec![json!("ctrl"), json!(17)],
                vec![json!("ctrl"), json!(17)],
            ],
        );
    }

    #[test]
    fn test_native_unsubscribe_detaches_the_wrapper() {
        let root = manual_emitter();
        let target = Arc::new(SyntheticTarget::new());
        let target_ref: TargetRef = target.clone();
        let count = Arc::new(AtomicUsize::new(0));
        let handler = counting_native(&count);

        root.subscribe(Subscription::native(
            target_ref.clone(),
            "click",
            handler.clone(),
        ))
        .unwrap();
        root.unsubscribe(Unsubscription::native(target_ref, "click", handler))
            .unwrap();

        assert_eq!(target.listener_count("click"), 0);
        target.emit("click", SyntheticEvent::arc());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_shared_handler_detaches_per_target() {
        let root = manual_emitter();
        let first = Arc::new(SyntheticTarget::new());
        let second = Arc::new(SyntheticTarget::new());
        let count = Arc::new(AtomicUsize::new(0));
        let handler = counting_native(&count);

        let first_ref: TargetRef = first.clone();
        let second_ref: TargetRef = second.clone();
        root.subscribe(Subscription::native(
            first_ref.clone(),
            "click",
            handler.clone(),
        ))
        .unwrap();
        root.subscribe(Subscription::native(second_ref, "click", handler.clone()))
            .unwrap();

        root.unsubscribe(Unsubscription::native(first_ref, "click", handler))
            .unwrap();
        assert_eq!(first.listener_count("click"), 0);
        assert_eq!(
            second.listener_count("click"),
            1,
            "detaching one target must leave the other wired"
        );

        second.emit("click", SyntheticEvent::arc());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tripleclick_fires_on_the_third_rapid_click() {
        let (root, scheduler) = manual_pair();
        let target = Arc::new(SyntheticTarget::new());
        let target_ref: TargetRef = target.clone();
        let count = Arc::new(AtomicUsize::new(0));

        root.subscribe(Subscription::native(
            target_ref,
            "tripleclick",
            counting_native(&count),
        ))
        .unwrap();
        assert_eq!(
            target.listener_count("click"),
            1,
            "tripleclick must attach to plain clicks"
        );
        assert_eq!(target.listener_count("tripleclick"), 0);

        let click = |gap_ms: u64| {
            scheduler.advance(Duration::from_millis(gap_ms));
            target.emit("click", SyntheticEvent::arc());
        };

        click(0);
        click(50);
        assert_eq!(count.load(Ordering::SeqCst), 0, "two clicks are not enough");
        click(50);
        assert_eq!(count.load(Ordering::SeqCst), 1, "third rapid click fires");

        // The window anchor survives the fire, so three more rapid clicks
        // complete a second triple inside the same window.
        click(50);
        click(50);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        click(50);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tripleclick_window_expiry_restarts_the_sequence() {
        let (root, scheduler) = manual_pair();
        let target = Arc::new(SyntheticTarget::new());
        let target_ref: TargetRef = target.clone();
        let count = Arc::new(AtomicUsize::new(0));

        root.subscribe(Subscription::native(
            target_ref,
            "tripleclick",
            counting_native(&count),
        ))
        .unwrap();

        let click = |gap_ms: u64| {
            scheduler.advance(Duration::from_millis(gap_ms));
            target.emit("click", SyntheticEvent::arc());
        };

        click(0);
        click(50);
        click(500);
        assert_eq!(
            count.load(Ordering::SeqCst),
            0,
            "a click past the window starts a new sequence instead of firing"
        );

        click(50);
        click(50);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_interrupt_drives_the_requested_primitives() {
        let root = manual_emitter();

        let event = SyntheticEvent::arc();
        root.interrupt(&event.as_event(), true, false);
        assert!(event.cancel_bubble());
        assert!(event.propagation_stopped());
        assert!(!event.default_prevented());
        assert!(event.return_value());

        let event = SyntheticEvent::arc();
        root.interrupt(&event.as_event(), false, true);
        assert!(!event.cancel_bubble());
        assert!(!event.propagation_stopped());
        assert!(event.default_prevented());
        assert!(!event.return_value());

        let event = SyntheticEvent::arc();
        root.interrupt(&event.as_event(), false, false);
        assert!(!event.cancel_bubble());
        assert!(event.return_value(), "no-op interrupt leaves the event alone");
    }
}
