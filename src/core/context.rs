//! # Context identity.
//!
//! [`ContextId`] is the opaque owner token subscriptions are filed under.
//! One sentinel value, [`ContextId::DEFAULT`], marks the global context the
//! root emitter is bound to; it doubles as the bulk-removal hammer (see the
//! store's default-owner rules).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Allocator for fresh context identities.
static CONTEXT_SEQ: AtomicU64 = AtomicU64::new(1);

/// Opaque identity a subscription is owned by.
///
/// ## Example
/// ```rust
/// use switchboard::ContextId;
///
/// let mine = ContextId::fresh();
/// assert!(!mine.is_default());
/// assert!(ContextId::DEFAULT.is_default());
/// assert_ne!(mine, ContextId::fresh());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// The global/default context owned by the root emitter.
    pub const DEFAULT: ContextId = ContextId(0);

    /// Allocates a context identity never handed out before.
    pub fn fresh() -> Self {
        ContextId(CONTEXT_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    /// Whether this is the global/default context.
    pub fn is_default(self) -> bool {
        self.0 == 0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            write!(f, "default")
        } else {
            write!(f, "ctx-{}", self.0)
        }
    }
}
