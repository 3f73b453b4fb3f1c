//! Dispatch core: emitter façade, shared hub, deferred delivery.
//!
//! This module contains the engine behind the crate's public surface. The
//! public API from this module is [`Emitter`] (built via [`EmitterBuilder`])
//! plus the value types its methods consume; the hub and its collaborators
//! stay internal.
//!
//! Internal modules:
//! - [`hub`]: shared state behind one emitter family (store, queue, trace);
//! - [`notify`]: pending-notice queue with single-timer batching;
//! - [`debug`]: the switchable operation trace;
//! - [`context`]: context identity allocation.

mod builder;
mod config;
mod context;
mod debug;
mod emitter;
mod hub;
mod notify;
mod subscription;

pub use builder::EmitterBuilder;
pub use config::Config;
pub use context::ContextId;
pub use emitter::Emitter;
pub use subscription::{Subscription, Unsubscription};
