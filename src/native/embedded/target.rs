//! # SyntheticTarget — in-memory event target
//!
//! A minimal [`EventTarget`] that stores listeners in a list and fires them
//! on [`SyntheticTarget::emit`]. Use it for tests or demos.

use parking_lot::Mutex;

use crate::native::target::{EventRef, EventTarget, ListenerRef};

/// In-memory event target.
#[derive(Default)]
pub struct SyntheticTarget {
    listeners: Mutex<Vec<(String, ListenerRef)>>,
}

impl SyntheticTarget {
    /// Constructs a new [`SyntheticTarget`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires an event: every listener registered for `event_type` runs, in
    /// registration order, against a snapshot taken before the first call.
    pub fn emit(&self, event_type: &str, event: EventRef) {
        let snapshot: Vec<ListenerRef> = self
            .listeners
            .lock()
            .iter()
            .filter(|(kind, _)| kind == event_type)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(event.clone());
        }
    }

    /// Number of listeners currently registered for `event_type`.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .lock()
            .iter()
            .filter(|(kind, _)| kind == event_type)
            .count()
    }
}

impl EventTarget for SyntheticTarget {
    fn add_listener(&self, event_type: &str, listener: ListenerRef) {
        self.listeners
            .lock()
            .push((event_type.to_string(), listener));
    }

    fn remove_listener(&self, event_type: &str, listener: &ListenerRef) {
        let mut listeners = self.listeners.lock();
        if let Some(position) = listeners
            .iter()
            .position(|(kind, l)| kind == event_type && std::sync::Arc::ptr_eq(l, listener))
        {
            listeners.remove(position);
        }
    }
}
