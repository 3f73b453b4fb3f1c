//! # Message handler trait.
//!
//! Provides [`Handler`], the extension point for receiving messages dispatched
//! through the registry (`event`, `request`, `demand`, `notify` flushes).
//!
//! ## Rules
//! - Handlers run **synchronously** on the dispatching turn (or, for notify
//!   flushes, on the timer's turn).
//! - Handlers may re-enter the engine (`subscribe`/`unsubscribe`/`event`)
//!   while being invoked; no internal lock is held across the call.
//! - The return value is ignored by broadcasts and surfaced by
//!   `request`/`demand`.
//!
//! ## Identity
//! Two bindings are the same registration only when their [`HandlerRef`]s
//! point at the same allocation (`Arc::ptr_eq`). Keep the reference you
//! subscribed with if you intend to unsubscribe it later.

use std::sync::Arc;

use serde_json::Value;

/// Message handler invoked by the dispatch engine.
///
/// Implement this directly for stateful handlers, or wrap a closure with
/// [`HandlerFn`](crate::HandlerFn).
pub trait Handler: Send + Sync + 'static {
    /// Processes one dispatched message.
    ///
    /// `payload` is the value passed to `event`/`request`/`demand`/`notify`,
    /// when one was given. The returned value is delivered to `request`/
    /// `demand` callers and discarded by broadcasts.
    fn call(&self, payload: Option<&Value>) -> Option<Value>;
}

/// Shared reference to a message handler.
pub type HandlerRef = Arc<dyn Handler>;
