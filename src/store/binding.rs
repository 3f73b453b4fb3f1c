//! # Subscription binding.
//!
//! One (owner, handler) registration inside an event bucket. Bindings are
//! shared (`Arc`) between the bucket and any dispatch snapshot in flight;
//! removal marks the flag and drops the bucket's reference, so a snapshot
//! that has not reached the binding yet skips it instead of invoking a
//! registration the caller already removed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::ContextId;
use crate::handlers::HandlerRef;

/// A single subscription record.
pub(crate) struct Binding {
    owner: ContextId,
    handler: HandlerRef,
    revoked: AtomicBool,
}

impl Binding {
    pub(crate) fn new(owner: ContextId, handler: HandlerRef) -> Arc<Self> {
        Arc::new(Self {
            owner,
            handler,
            revoked: AtomicBool::new(false),
        })
    }

    pub(crate) fn owner(&self) -> ContextId {
        self.owner
    }

    pub(crate) fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// Same registration: identity comparison on the handler reference.
    pub(crate) fn is_handler(&self, other: &HandlerRef) -> bool {
        Arc::ptr_eq(&self.handler, other)
    }

    pub(crate) fn revoke(&self) {
        self.revoked.store(true, Ordering::Release);
    }

    pub(crate) fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }
}
