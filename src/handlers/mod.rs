//! # Handler abstractions.
//!
//! This module provides the callback types the dispatch engine invokes:
//! - [`Handler`] - trait for message handlers (registry bindings)
//! - [`HandlerFn`] - closure-backed message handler
//! - [`HandlerRef`] - shared reference to a handler (`Arc<dyn Handler>`)
//! - [`NativeHandler`] - trait for native-event handlers (target listeners)
//! - [`NativeFn`] - closure-backed native handler
//! - [`NativeRef`] - shared reference to a native handler (`Arc<dyn NativeHandler>`)
//!
//! Handler identity is pointer identity of the shared reference: cloning a
//! `HandlerRef`/`NativeRef` preserves identity, wrapping the same closure
//! twice does not.

mod handler;
mod handler_fn;
mod native;

pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
pub use native::{NativeFn, NativeHandler, NativeRef};
