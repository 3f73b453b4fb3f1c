//! Error types surfaced by the dispatch engine.
//!
//! This module defines [`DispatchError`], the single error enum returned by
//! every fallible [`Emitter`](crate::Emitter) operation. All failures are
//! immediate and synchronous: nothing is retried, nothing is fatal to the
//! process, and the caller decides whether to recover.
//!
//! The enum provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, mirroring the labels-on-errors convention used across
//! the crate.

use thiserror::Error;

/// # Errors produced by dispatch operations.
///
/// Every variant is raised to the immediate caller of the [`Emitter`]
/// method that failed; there is no global error channel and nothing is
/// swallowed.
///
/// [`Emitter`]: crate::Emitter
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// `request` was invoked on an event name with no registered handler.
    #[error("no handler registered for '{name}'")]
    NoHandler {
        /// The event name that was requested.
        name: String,
    },

    /// `request`/`demand` was invoked on an event name with more than one
    /// registered handler.
    #[error("{count} handlers registered for '{name}'; use event('{name}') to broadcast instead")]
    AmbiguousHandlers {
        /// The event name that was requested.
        name: String,
        /// How many handlers are currently registered for it.
        count: usize,
    },

    /// `subscribe`/`unsubscribe` was invoked with an argument shape that
    /// matches neither recognized variant (e.g. an empty event name).
    ///
    /// Raised before any state mutation.
    #[error("bad parameters: {reason}")]
    BadParameters {
        /// What was wrong with the call.
        reason: String,
    },

    /// `in_context` was invoked on the immutable root instance.
    #[error("cannot rebase the root instance; derive a scoped instance with create() instead")]
    RootRebase,
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use switchboard::DispatchError;
    ///
    /// let err = DispatchError::NoHandler { name: "save".into() };
    /// assert_eq!(err.as_label(), "no_handler");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::NoHandler { .. } => "no_handler",
            DispatchError::AmbiguousHandlers { .. } => "ambiguous_handlers",
            DispatchError::BadParameters { .. } => "bad_parameters",
            DispatchError::RootRebase => "root_rebase",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::NoHandler { name } => {
                format!("no handler for '{name}'")
            }
            DispatchError::AmbiguousHandlers { name, count } => {
                format!("'{name}' has {count} handlers; broadcast with event instead")
            }
            DispatchError::BadParameters { reason } => {
                format!("bad parameters: {reason}")
            }
            DispatchError::RootRebase => "root instance cannot be rebased".to_string(),
        }
    }
}
