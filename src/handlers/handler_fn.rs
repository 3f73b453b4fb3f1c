//! # Function-backed message handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Option<&Value>) -> Option<Value>` so
//! plain functions can be registered without a named type.
//!
//! ## Example
//! ```rust
//! use switchboard::{Handler, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc(|payload| {
//!     // echo the payload back to request/demand callers
//!     payload.cloned()
//! });
//! assert!(h.call(None).is_none());
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::handlers::handler::Handler;

/// Function-backed message handler.
#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F> HandlerFn<F>
where
    F: Fn(Option<&Value>) -> Option<Value> + Send + Sync + 'static,
{
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a
    /// [`HandlerRef`](crate::HandlerRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the handler and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use switchboard::{HandlerFn, HandlerRef};
    ///
    /// let h: HandlerRef = HandlerFn::arc(|_payload| None);
    /// ```
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(Option<&Value>) -> Option<Value> + Send + Sync + 'static,
{
    fn call(&self, payload: Option<&Value>) -> Option<Value> {
        (self.f)(payload)
    }
}
