//! # Example: broadcast
//!
//! Minimal tour of the synchronous dispatch disciplines.
//!
//! Demonstrates how to:
//! - Build a root [`Emitter`] and register message handlers.
//! - Broadcast with `event`, including case-insensitive names.
//! - Retrieve a result with `request` and tolerate silence with `demand`.
//! - Count live bindings with `watching`.
//!
//! ## Flow
//! ```text
//! subscribe("user.login", audit)   ──► Store["user.login"] = [audit]
//! subscribe("user.login", greeter) ──► Store["user.login"] = [audit, greeter]
//! event("User.Login", {...})       ──► audit(payload); greeter(payload)
//! request("config.port")           ──► the single responder's value
//! demand("config.host")            ──► Ok(None), nobody answers
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example broadcast
//! ```

use switchboard::{Config, Emitter, HandlerFn, Subscription, Unsubscription};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Root emitter with default tuning (30ms notify delay, 400ms clicks)
    let emitter = Emitter::builder(Config::default()).build();

    // 2. Two listeners on the same name: both run, in registration order
    emitter.subscribe(Subscription::message(
        "user.login",
        HandlerFn::arc(|payload| {
            println!("[audit] login {:?}", payload);
            None
        }),
    ))?;
    emitter.subscribe(Subscription::message(
        "user.login",
        HandlerFn::arc(|_payload| {
            println!("[greeter] welcome!");
            None
        }),
    ))?;

    // 3. Broadcast; names are case-insensitive
    emitter.event("User.Login", serde_json::json!({ "name": "ada" }));

    // 4. request wants exactly one responder and returns its value
    let answer = HandlerFn::arc(|_| Some(serde_json::json!(4242)));
    emitter.subscribe(Subscription::message("config.port", answer.clone()))?;
    println!("[request] config.port = {:?}", emitter.request("config.port", None)?);

    // 5. demand tolerates an unanswered name
    println!("[demand] config.host = {:?}", emitter.demand("config.host", None)?);

    // 6. watching counts live bindings
    println!("[watching] user.login = {}", emitter.watching("user.login"));
    emitter.unsubscribe(Unsubscription::message("config.port", answer))?;
    println!("[watching] config.port = {}", emitter.watching("config.port"));

    Ok(())
}
