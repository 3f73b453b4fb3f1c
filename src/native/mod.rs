//! # Native-event bridging.
//!
//! This module couples the dispatch engine to listener-capable hosts:
//! - [`EventTarget`] / [`NativeEvent`] the capability traits a host satisfies
//! - [`ListenerTable`](listeners) side table of generated wrapper listeners
//! - [`ClickTracker`](gesture) the synthesized triple-click state machine
//! - [`SyntheticTarget`] / [`SyntheticEvent`] embedded in-memory host
//!   _(test/demo reference)_
//!
//! ## Architecture
//! ```text
//! subscribe(Native { target, event_type, handler, extras })
//!        │
//!        ▼
//! ListenerTable.attach(handler × event_type)
//!        │  miss: generate wrapper          hit: reuse wrapper,
//!        │  (tripleclick → gesture-gated)   skip targets already attached
//!        ▼
//! target.add_listener(attach_type, wrapper)
//!        │
//!        ▼  target fires
//! wrapper(event) ──► [ClickTracker gate, tripleclick only] ──► handler.on_event(event, extras)
//! ```

mod gesture;
mod listeners;
mod target;

mod embedded;

pub use embedded::{SyntheticEvent, SyntheticTarget};
pub use target::{EventRef, EventTarget, ListenerRef, NativeEvent, TargetRef};

pub(crate) use gesture::ClickTracker;
pub(crate) use listeners::{identity, ListenerTable};
