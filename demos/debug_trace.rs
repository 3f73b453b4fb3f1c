//! # Example: debug_trace
//!
//! The switchable operation trace: while enabled, every dispatch call logs
//! a line through `tracing` unless its event name is filtered out.
//!
//! Demonstrates how to:
//! - Toggle tracing at runtime with [`Emitter::debug_mode`].
//! - Silence noisy names with the filter list.
//! - Drop payload dumps from the lines with `terse`.
//!
//! ## Run
//! ```bash
//! RUST_LOG=switchboard=debug cargo run --example debug_trace
//! ```

use switchboard::{Config, Emitter, HandlerFn, Subscription};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Respect `RUST_LOG` if set; default to the crate's debug lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("switchboard=debug")),
        )
        .init();

    let emitter = Emitter::builder(Config::default()).build();
    emitter.subscribe(Subscription::message(
        "doc.saved",
        HandlerFn::arc(|_| Some(serde_json::json!("ok"))),
    ))?;
    emitter.subscribe(Subscription::message(
        "cursor.moved",
        HandlerFn::arc(|_| None),
    ))?;

    // 1. Everything traced
    emitter.debug_mode(true, Vec::new(), false);
    emitter.event("doc.saved", serde_json::json!({ "rev": 12 }));
    emitter.request("doc.saved", None)?;
    emitter.watching("doc.saved");

    // 2. Filter the chatty name; its lines disappear
    emitter.debug_mode(true, vec!["cursor.moved".to_string()], false);
    emitter.event("cursor.moved", serde_json::json!({ "x": 1, "y": 2 }));
    emitter.event("doc.saved", serde_json::json!({ "rev": 13 }));

    // 3. Terse mode keeps the lines but drops the payload dumps
    emitter.debug_mode(true, Vec::new(), true);
    emitter.event("doc.saved", serde_json::json!({ "rev": 14 }));

    // 4. Off again
    emitter.debug_mode(false, Vec::new(), false);
    emitter.event("doc.saved", serde_json::json!({ "rev": 15 }));

    Ok(())
}
