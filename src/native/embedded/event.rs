//! # SyntheticEvent — in-memory native event
//!
//! A [`NativeEvent`] backed by plain flags, with read accessors so tests can
//! assert what [`Emitter::interrupt`](crate::Emitter::interrupt) did.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::native::target::{EventRef, NativeEvent};

/// In-memory native event.
pub struct SyntheticEvent {
    flags: Mutex<EventFlags>,
}

struct EventFlags {
    cancel_bubble: bool,
    propagation_stopped: bool,
    default_prevented: bool,
    return_value: bool,
}

impl SyntheticEvent {
    /// Constructs a fresh event: nothing cancelled, return value `true`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            flags: Mutex::new(EventFlags {
                cancel_bubble: false,
                propagation_stopped: false,
                default_prevented: false,
                return_value: true,
            }),
        }
    }

    /// Constructs the event as a shared [`EventRef`], ready to emit.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Same event, viewed through the capability trait.
    pub fn as_event(self: &Arc<Self>) -> EventRef {
        self.clone()
    }

    pub fn cancel_bubble(&self) -> bool {
        self.flags.lock().cancel_bubble
    }

    pub fn propagation_stopped(&self) -> bool {
        self.flags.lock().propagation_stopped
    }

    pub fn default_prevented(&self) -> bool {
        self.flags.lock().default_prevented
    }

    pub fn return_value(&self) -> bool {
        self.flags.lock().return_value
    }
}

impl Default for SyntheticEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeEvent for SyntheticEvent {
    fn set_cancel_bubble(&self, value: bool) {
        self.flags.lock().cancel_bubble = value;
    }

    fn stop_propagation(&self) {
        self.flags.lock().propagation_stopped = true;
    }

    fn prevent_default(&self) {
        self.flags.lock().default_prevented = true;
    }

    fn set_return_value(&self, value: bool) {
        self.flags.lock().return_value = value;
    }
}
