//! Subscription registry: event name → ordered bindings.
//!
//! Internal to the crate; the public surface goes through
//! [`Emitter`](crate::Emitter).
//!
//! ## Contents
//! - [`Binding`] one (owner, handler) registration with a revocation flag
//! - [`Store`] the case-insensitive bucket map and its dispatch primitives

mod binding;
mod store;

pub(crate) use binding::Binding;
pub(crate) use store::Store;
