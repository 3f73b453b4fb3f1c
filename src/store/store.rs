//! # Subscription store.
//!
//! [`Store`] owns the mapping from event name to its ordered bucket of
//! [`Binding`]s and implements the registry half of the dispatch contract:
//! save, targeted removal, broadcast, single-response retrieval and
//! subscriber counting.
//!
//! ## Rules
//! - **Case-insensitive names**: every entry point folds the name to lower
//!   case before touching the map; no two buckets differ only in case.
//! - **Lazy buckets**: looking up a name that was never subscribed allocates
//!   an empty bucket instead of failing, and the bucket persists.
//! - **Insertion order is dispatch order**; duplicate saves are kept and
//!   invoked once each.
//! - **No lock across handlers**: dispatch snapshots the bucket, releases
//!   the lock, then invokes. Handlers may re-enter the store freely.
//! - **Removal is mark + compact**: a removed binding is flagged revoked
//!   (so in-flight snapshots skip it) and dropped from the bucket.
//!
//! ## Default-owner shortcuts
//! The default context is the bulk-removal hammer: removing by name clears
//! the whole bucket regardless of owner or handler, and removing without a
//! name clears every bucket.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::core::ContextId;
use crate::error::DispatchError;
use crate::handlers::HandlerRef;
use crate::store::binding::Binding;

/// Case-insensitive registry of event buckets.
pub(crate) struct Store {
    buckets: Mutex<HashMap<String, Vec<Arc<Binding>>>>,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Revokes and drops every binding in `bucket` matching `owner` (and
/// `handler`, when given).
fn prune(bucket: &mut Vec<Arc<Binding>>, owner: ContextId, handler: Option<&HandlerRef>) {
    bucket.retain(|binding| {
        let hit = binding.owner() == owner && handler.map_or(true, |h| binding.is_handler(h));
        if hit {
            binding.revoke();
        }
        !hit
    });
}

fn clear(bucket: &mut Vec<Arc<Binding>>) {
    for binding in bucket.iter() {
        binding.revoke();
    }
    bucket.clear();
}

impl Store {
    pub(crate) fn new() -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a binding to the name's bucket.
    ///
    /// No duplicate detection: saving the same owner + handler twice yields
    /// two invocations per broadcast.
    pub(crate) fn save(&self, owner: ContextId, name: &str, handler: HandlerRef) {
        let mut buckets = self.buckets.lock();
        buckets
            .entry(fold(name))
            .or_default()
            .push(Binding::new(owner, handler));
    }

    /// Removes bindings.
    ///
    /// - `name` given, default owner: the bucket is cleared entirely.
    /// - `name` given, other owner: drops that owner's bindings there,
    ///   narrowed to `handler` when one is given.
    /// - `name` omitted: the same owner rule applied across every bucket;
    ///   the default owner removes everything everywhere.
    pub(crate) fn remove(&self, owner: ContextId, name: Option<&str>, handler: Option<&HandlerRef>) {
        let mut buckets = self.buckets.lock();
        match name {
            Some(name) => {
                let bucket = buckets.entry(fold(name)).or_default();
                if owner.is_default() {
                    clear(bucket);
                } else {
                    prune(bucket, owner, handler);
                }
            }
            None => {
                for bucket in buckets.values_mut() {
                    if owner.is_default() {
                        clear(bucket);
                    } else {
                        prune(bucket, owner, handler);
                    }
                }
            }
        }
    }

    /// Invokes every live binding for the name, in insertion order.
    ///
    /// The bucket is snapshotted first and the lock released, so handlers may
    /// subscribe or unsubscribe mid-broadcast; a binding removed before its
    /// turn is skipped via its revocation flag.
    pub(crate) fn evaluate(&self, name: &str, payload: Option<&Value>) {
        let snapshot: Vec<Arc<Binding>> = {
            let mut buckets = self.buckets.lock();
            buckets.entry(fold(name)).or_default().clone()
        };
        for binding in snapshot {
            if binding.is_revoked() {
                continue;
            }
            binding.handler().call(payload);
        }
    }

    /// Invokes the single binding for the name and returns its result.
    ///
    /// Zero bindings is [`DispatchError::NoHandler`]; more than one is
    /// [`DispatchError::AmbiguousHandlers`].
    pub(crate) fn request(
        &self,
        name: &str,
        payload: Option<&Value>,
    ) -> Result<Option<Value>, DispatchError> {
        let binding = self.sole_binding(name)?.ok_or(DispatchError::NoHandler {
            name: name.to_string(),
        })?;
        Ok(binding.handler().call(payload))
    }

    /// Like [`Store::request`], but zero bindings yields `Ok(None)` instead
    /// of an error. Ambiguity still fails.
    pub(crate) fn demand(
        &self,
        name: &str,
        payload: Option<&Value>,
    ) -> Result<Option<Value>, DispatchError> {
        match self.sole_binding(name)? {
            Some(binding) => Ok(binding.handler().call(payload)),
            None => Ok(None),
        }
    }

    /// Current bucket size for the name (0 if never touched).
    pub(crate) fn watching(&self, name: &str) -> usize {
        let mut buckets = self.buckets.lock();
        buckets.entry(fold(name)).or_default().len()
    }

    /// At most one binding for the name, or the ambiguity error.
    fn sole_binding(&self, name: &str) -> Result<Option<Arc<Binding>>, DispatchError> {
        let mut buckets = self.buckets.lock();
        let bucket = buckets.entry(fold(name)).or_default();
        match bucket.len() {
            0 => Ok(None),
            1 => Ok(Some(bucket[0].clone())),
            count => Err(DispatchError::AmbiguousHandlers {
                name: name.to_string(),
                count,
            }),
        }
    }
}
