//! # Listener side table.
//!
//! [`ListenerTable`] tracks the wrapper listener generated for each
//! (handler identity, event type) pair, plus the targets the wrapper is
//! currently attached to. This is the bookkeeping that makes native
//! re-subscription idempotent and detachment exact:
//!
//! - at most one wrapper exists per pair at any time;
//! - re-subscribing the pair against a target it is already attached to is
//!   a no-op;
//! - the same pair may be attached to several targets, each once, and
//!   detaching from one leaves the others wired;
//! - the entry dies when its last target detaches.
//!
//! Identity is pointer identity of the shared references, never anything
//! stamped onto the handler itself.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::native::target::ListenerRef;

/// Pointer identity of a shared reference, usable as a map key.
pub(crate) fn identity<T: ?Sized>(reference: &Arc<T>) -> usize {
    Arc::as_ptr(reference).cast::<()>() as usize
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct ListenerKey {
    handler: usize,
    event_type: String,
}

struct ListenerEntry {
    wrapper: ListenerRef,
    /// Native type the wrapper listens on ("click" for tripleclick).
    attach_type: String,
    /// Identities of the targets the wrapper is attached to.
    targets: Vec<usize>,
}

/// Side table keyed by (handler identity, event type).
pub(crate) struct ListenerTable {
    entries: Mutex<HashMap<ListenerKey, ListenerEntry>>,
}

impl ListenerTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Registers an attachment and returns the wrapper to install on the
    /// target, or `None` when the pair is already attached there.
    ///
    /// `make_wrapper` runs only on the first attachment of the pair and
    /// yields the wrapper plus the native type it listens on.
    pub(crate) fn attach(
        &self,
        handler: usize,
        event_type: &str,
        target: usize,
        make_wrapper: impl FnOnce() -> (ListenerRef, String),
    ) -> Option<(ListenerRef, String)> {
        let key = ListenerKey {
            handler,
            event_type: event_type.to_string(),
        };
        let mut entries = self.entries.lock();
        let entry = entries.entry(key).or_insert_with(|| {
            let (wrapper, attach_type) = make_wrapper();
            ListenerEntry {
                wrapper,
                attach_type,
                targets: Vec::new(),
            }
        });
        if entry.targets.contains(&target) {
            return None;
        }
        entry.targets.push(target);
        Some((entry.wrapper.clone(), entry.attach_type.clone()))
    }

    /// Unregisters an attachment and returns the wrapper to detach from the
    /// target, or `None` when the pair was not attached there.
    ///
    /// The entry is dropped once its last target is gone.
    pub(crate) fn detach(
        &self,
        handler: usize,
        event_type: &str,
        target: usize,
    ) -> Option<(ListenerRef, String)> {
        let key = ListenerKey {
            handler,
            event_type: event_type.to_string(),
        };
        let mut entries = self.entries.lock();
        let entry = entries.get_mut(&key)?;
        let position = entry.targets.iter().position(|t| *t == target)?;
        entry.targets.remove(position);
        let detached = (entry.wrapper.clone(), entry.attach_type.clone());
        if entry.targets.is_empty() {
            entries.remove(&key);
        }
        Some(detached)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
