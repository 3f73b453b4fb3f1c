//! # Native-event handler trait and closure adapter.
//!
//! Provides [`NativeHandler`], the callback shape for subscriptions made
//! against an [`EventTarget`](crate::EventTarget) rather than an event name,
//! and [`NativeFn`], its closure-backed implementation.
//!
//! The engine never attaches a `NativeHandler` to a target directly: it
//! generates one wrapper listener per (handler, event type) pair and keeps it
//! in a side table so the pair can be detached later and never attaches twice.

use std::sync::Arc;

use serde_json::Value;

use crate::native::EventRef;

/// Handler for native events delivered by an event target.
///
/// `extras` are the extra arguments captured at subscription time and
/// replayed on every invocation.
pub trait NativeHandler: Send + Sync + 'static {
    /// Processes one native event.
    fn on_event(&self, event: &EventRef, extras: &[Value]);
}

/// Shared reference to a native-event handler.
pub type NativeRef = Arc<dyn NativeHandler>;

/// Function-backed native-event handler.
///
/// ## Example
/// ```rust
/// use switchboard::{NativeFn, NativeRef};
///
/// let h: NativeRef = NativeFn::arc(|_event, extras| {
///     assert!(extras.is_empty());
/// });
/// ```
#[derive(Debug)]
pub struct NativeFn<F> {
    f: F,
}

impl<F> NativeFn<F>
where
    F: Fn(&EventRef, &[Value]) + Send + Sync + 'static,
{
    /// Creates a new function-backed native handler.
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F> NativeHandler for NativeFn<F>
where
    F: Fn(&EventRef, &[Value]) + Send + Sync + 'static,
{
    fn on_event(&self, event: &EventRef, extras: &[Value]) {
        (self.f)(event, extras)
    }
}
