//! # Subscription commands.
//!
//! [`Subscription`] and [`Unsubscription`] are the tagged requests fed to
//! [`Emitter::subscribe`](crate::Emitter::subscribe) and
//! [`Emitter::unsubscribe`](crate::Emitter::unsubscribe). Each variant names
//! one target kind explicitly, so a call site always states whether it is
//! wiring a message handler or bridging a native event source.
//!
//! ## Example
//! ```rust
//! use switchboard::{HandlerFn, Subscription, Unsubscription};
//!
//! let handler = HandlerFn::arc(|payload| payload.cloned());
//! let sub = Subscription::message("profile.saved", handler.clone());
//! let unsub = Unsubscription::message("profile.saved", handler);
//! ```

use serde_json::Value;

use crate::handlers::{HandlerRef, NativeRef};
use crate::native::TargetRef;

/// One registration request.
pub enum Subscription {
    /// Subscribes `handler` to the named message.
    ///
    /// Names are matched case-insensitively; registering the same handler
    /// twice yields two invocations per broadcast.
    Message {
        name: String,
        handler: HandlerRef,
    },

    /// Bridges a native event source: a wrapper listener is attached to
    /// `target` for `event_type` and forwards each event to `handler`,
    /// appending `extras` on every delivery.
    ///
    /// The event type `"tripleclick"` is synthesized: the wrapper attaches
    /// to plain `"click"` and only forwards on the third click inside the
    /// configured window.
    Native {
        target: TargetRef,
        event_type: String,
        handler: NativeRef,
        extras: Vec<Value>,
    },
}

impl Subscription {
    /// Message subscription.
    #[inline]
    pub fn message(name: impl Into<String>, handler: HandlerRef) -> Self {
        Self::Message {
            name: name.into(),
            handler,
        }
    }

    /// Native subscription with no extra arguments.
    #[inline]
    pub fn native(target: TargetRef, event_type: impl Into<String>, handler: NativeRef) -> Self {
        Self::Native {
            target,
            event_type: event_type.into(),
            handler,
            extras: Vec::new(),
        }
    }

    /// Native subscription delivering `extras` after the event on every call.
    #[inline]
    pub fn native_with_args(
        target: TargetRef,
        event_type: impl Into<String>,
        handler: NativeRef,
        extras: Vec<Value>,
    ) -> Self {
        Self::Native {
            target,
            event_type: event_type.into(),
            handler,
            extras,
        }
    }
}

/// One removal request.
pub enum Unsubscription {
    /// Removes every subscription owned by the calling context; from the
    /// root emitter this wipes the entire hub.
    All,

    /// Removes message bindings by name, narrowed to one handler when given.
    Message {
        name: String,
        handler: Option<HandlerRef>,
    },

    /// Detaches a native bridge from one target. The wrapper listener is
    /// removed from the target only when no other target still shares it.
    Native {
        target: TargetRef,
        event_type: String,
        handler: NativeRef,
    },
}

impl Unsubscription {
    /// Removal of one handler from the named message.
    #[inline]
    pub fn message(name: impl Into<String>, handler: HandlerRef) -> Self {
        Self::Message {
            name: name.into(),
            handler: Some(handler),
        }
    }

    /// Removal of every binding the calling context holds on the name.
    #[inline]
    pub fn message_all(name: impl Into<String>) -> Self {
        Self::Message {
            name: name.into(),
            handler: None,
        }
    }

    /// Detachment of a native bridge.
    #[inline]
    pub fn native(target: TargetRef, event_type: impl Into<String>, handler: NativeRef) -> Self {
        Self::Native {
            target,
            event_type: event_type.into(),
            handler,
        }
    }
}
