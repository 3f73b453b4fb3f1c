//! # Debug trace hook.
//!
//! [`DebugTrace`] gates the per-operation trace lines behind the hub-wide
//! debug mode. Lines go through the `tracing` facade at debug level; with no
//! subscriber installed they are no-ops, so dispatch never depends on a
//! logging backend being present.
//!
//! ## Rules
//! - Tracing is off until switched on with
//!   [`Emitter::debug_mode`](crate::Emitter::debug_mode).
//! - Name filters suppress individual event names, compared case-folded like
//!   registry names.
//! - Terse mode keeps the lines but drops payload/result dumps.
//! - Mode transitions themselves log at info level; the soft warnings
//!   elsewhere in the engine are **not** gated here.

use std::collections::HashSet;

use parking_lot::RwLock;
use serde_json::Value;

/// Hub-wide debug trace configuration and emission.
pub(crate) struct DebugTrace {
    cfg: RwLock<TraceConfig>,
}

struct TraceConfig {
    enabled: bool,
    filters: HashSet<String>,
    terse: bool,
}

fn payload_text(payload: Option<&Value>) -> String {
    payload.map_or_else(|| "-".to_string(), Value::to_string)
}

impl DebugTrace {
    pub(crate) fn new(enabled: bool, terse: bool) -> Self {
        Self {
            cfg: RwLock::new(TraceConfig {
                enabled,
                filters: HashSet::new(),
                terse,
            }),
        }
    }

    /// Reconfigures the debug mode and logs the transition.
    pub(crate) fn set(&self, enabled: bool, filters: Vec<String>, terse: bool) {
        {
            let mut cfg = self.cfg.write();
            cfg.enabled = enabled;
            cfg.filters = filters.into_iter().map(|f| f.to_lowercase()).collect();
            cfg.terse = terse;
        }
        tracing::info!(
            "debug mode is set to {}",
            if enabled { "on" } else { "off" }
        );
    }

    /// Whether a trace line for `name` should be emitted at all.
    pub(crate) fn wants(&self, name: &str) -> bool {
        let cfg = self.cfg.read();
        cfg.enabled && !cfg.filters.contains(&name.to_lowercase())
    }

    /// Trace line for a payload-carrying operation (event/notify).
    pub(crate) fn operation(&self, op: &'static str, name: &str, payload: Option<&Value>) {
        if !self.wants(name) {
            return;
        }
        if self.cfg.read().terse {
            tracing::debug!(op, event = name);
        } else {
            tracing::debug!(op, event = name, payload = %payload_text(payload));
        }
    }

    /// Trace line for a result-carrying operation (request/demand).
    pub(crate) fn outcome(
        &self,
        op: &'static str,
        name: &str,
        payload: Option<&Value>,
        result: Option<&Value>,
    ) {
        if !self.wants(name) {
            return;
        }
        if self.cfg.read().terse {
            tracing::debug!(op, event = name);
        } else {
            tracing::debug!(
                op,
                event = name,
                payload = %payload_text(payload),
                result = %payload_text(result),
            );
        }
    }

    /// Trace line for a counting operation (watching).
    pub(crate) fn count(&self, op: &'static str, name: &str, count: usize) {
        if !self.wants(name) {
            return;
        }
        tracing::debug!(op, event = name, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default_construction() {
        let trace = DebugTrace::new(false, false);
        assert!(!trace.wants("anything"));
    }

    #[test]
    fn test_enable_then_disable() {
        let trace = DebugTrace::new(false, false);
        trace.set(true, Vec::new(), false);
        assert!(trace.wants("refresh"));

        trace.set(false, Vec::new(), false);
        assert!(!trace.wants("refresh"));
    }

    #[test]
    fn test_filters_fold_case() {
        let trace = DebugTrace::new(false, false);
        trace.set(true, vec!["Heartbeat".to_string()], false);
        assert!(
            !trace.wants("heartBEAT"),
            "filters must match names case-insensitively"
        );
        assert!(trace.wants("refresh"), "unfiltered names still trace");
    }

    #[test]
    fn test_set_replaces_filters() {
        let trace = DebugTrace::new(false, false);
        trace.set(true, vec!["a".to_string()], false);
        trace.set(true, vec!["b".to_string()], false);
        assert!(trace.wants("a"), "old filters must not linger");
        assert!(!trace.wants("b"));
    }
}
