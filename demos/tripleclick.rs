//! # Example: tripleclick
//!
//! Native bridging against the embedded in-memory target, including the
//! synthesized triple-click gesture and event interruption.
//!
//! Demonstrates how to:
//! - Attach a [`NativeFn`] handler to an [`EventTarget`] through the same
//!   subscribe surface as message handlers.
//! - Subscribe to `"tripleclick"`, which listens on plain clicks and fires
//!   on the third one inside the 400ms window.
//! - Stop propagation / cancel the default action with
//!   [`Emitter::interrupt`].
//!
//! ## Flow
//! ```text
//! subscribe(Native { target, "tripleclick", handler })
//!     └─► ListenerTable: wrapper generated, attached as "click"
//!
//! target.emit("click") x3 within 400ms
//!     └─► wrapper counts 1, 2, 3 ──► handler.on_event(event, extras)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example tripleclick
//! ```

use std::sync::Arc;

use switchboard::{
    Config, Emitter, NativeFn, Subscription, SyntheticEvent, SyntheticTarget, TargetRef,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let emitter = Emitter::builder(Config::default()).build();

    // 1. An in-memory target stands in for any listener-capable host
    let button = Arc::new(SyntheticTarget::new());
    let button_ref: TargetRef = button.clone();

    // 2. Plain native subscription, with extras replayed on every delivery
    emitter.subscribe(Subscription::native_with_args(
        button_ref.clone(),
        "click",
        NativeFn::arc(|_event, extras| {
            println!("[click] extras = {:?}", extras);
        }),
        vec![serde_json::json!("button-7")],
    ))?;

    // 3. The synthesized gesture: fires once per triple
    emitter.subscribe(Subscription::native(
        button_ref,
        "tripleclick",
        NativeFn::arc(|_event, _extras| {
            println!("[tripleclick] fired!");
        }),
    ))?;
    println!(
        "listeners on \"click\": {} (gesture rides the same native type)",
        button.listener_count("click")
    );

    // 4. Three rapid clicks complete the gesture
    for _ in 0..3 {
        button.emit("click", SyntheticEvent::arc());
    }

    // 5. interrupt drives the event's cancellation primitives
    let event = SyntheticEvent::arc();
    emitter.interrupt(&event.as_event(), true, true);
    println!(
        "propagation_stopped={} default_prevented={} return_value={}",
        event.propagation_stopped(),
        event.default_prevented(),
        event.return_value()
    );

    Ok(())
}
