//! # Engine configuration.
//!
//! Provides [`Config`], the settings baked into a hub at build time via
//! [`EmitterBuilder::new`](crate::EmitterBuilder::new).

use std::time::Duration;

/// Configuration for one emitter hub.
///
/// Defines:
/// - **Notify batching**: how long queued notifications wait before flushing
/// - **Gesture timing**: the triple-click detection window
/// - **Debug tracing**: the initial state of the debug hook
///
/// ## Notes
/// All fields are public; the debug fields are only the *initial* state and
/// can be changed at runtime with
/// [`Emitter::debug_mode`](crate::Emitter::debug_mode).
#[derive(Clone, Debug)]
pub struct Config {
    /// Delay between the first `notify` of a batch and its flush.
    ///
    /// Every `notify` call within this window coalesces onto the same armed
    /// timer and flushes in one FIFO pass.
    pub notify_delay: Duration,

    /// Window within which three clicks synthesize a `"tripleclick"`.
    ///
    /// Measured strictly (`elapsed < window`) from the anchor click of the
    /// current sequence.
    pub click_window: Duration,

    /// Whether debug tracing starts enabled.
    pub debug_enabled: bool,

    /// Whether debug trace lines start terse (payloads and results omitted).
    pub debug_terse: bool,
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `notify_delay = 30ms` (one event-loop-ish beat)
    /// - `click_window = 400ms` (standard multi-click cadence)
    /// - `debug_enabled = false`
    /// - `debug_terse = false`
    fn default() -> Self {
        Self {
            notify_delay: Duration::from_millis(30),
            click_window: Duration::from_millis(400),
            debug_enabled: false,
            debug_terse: false,
        }
    }
}
