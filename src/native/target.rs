//! # Host capability traits.
//!
//! The engine's only coupling to a UI-ish host environment. Any object that
//! can register listeners and hand out events with the four interruption
//! primitives is a valid target; nothing here assumes a browser.

use std::sync::Arc;

/// Listener function the engine attaches to a target.
///
/// Always an engine-generated wrapper, never a user handler directly; the
/// wrapper is what makes detaching by reference possible.
pub type ListenerRef = Arc<dyn Fn(EventRef) + Send + Sync>;

/// Shared reference to an event target.
pub type TargetRef = Arc<dyn EventTarget>;

/// Shared reference to a native event.
pub type EventRef = Arc<dyn NativeEvent>;

/// Listener-capable event source.
///
/// ### Rules
/// - `remove_listener` detaches by reference identity: the exact
///   [`ListenerRef`] passed to `add_listener`.
/// - The engine never attaches the same listener reference twice to one
///   target, so implementations need not deduplicate.
pub trait EventTarget: Send + Sync + 'static {
    /// Registers a listener for the given event type.
    fn add_listener(&self, event_type: &str, listener: ListenerRef);

    /// Detaches a previously registered listener.
    fn remove_listener(&self, event_type: &str, listener: &ListenerRef);
}

/// Native event with the propagation/default-action capability set.
///
/// [`Emitter::interrupt`](crate::Emitter::interrupt) drives these four
/// primitives; handlers may also call them directly.
pub trait NativeEvent: Send + Sync + 'static {
    /// Sets the legacy bubble-cancellation flag.
    fn set_cancel_bubble(&self, value: bool);

    /// Stops the event from propagating further.
    fn stop_propagation(&self);

    /// Cancels the event's default action.
    fn prevent_default(&self);

    /// Sets the legacy return-value flag (`false` cancels the default).
    fn set_return_value(&self, value: bool);
}
