//! # Example: scoped_contexts
//!
//! One hub, several owners: scoped emitters file their subscriptions under
//! their own context, so a component can tear down everything it registered
//! without touching anyone else's bindings.
//!
//! Demonstrates how to:
//! - Derive scoped emitters from the root with [`Emitter::create`].
//! - Rebase a scoped emitter with [`Emitter::in_context`] (and why the root
//!   refuses).
//! - Bulk-remove one context's subscriptions with [`Unsubscription::All`].
//!
//! ## Flow
//! ```text
//! root ──create(sidebar)──► emitter A   subscribe("nav.changed", ...)
//!      ──create(editor)───► emitter B   subscribe("nav.changed", ...)
//!
//! event("nav.changed")          ──► both handlers run (one hub)
//! A.unsubscribe(All)            ──► only sidebar's bindings drop
//! event("nav.changed")          ──► editor's handler still runs
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example scoped_contexts
//! ```

use switchboard::{Config, ContextId, Emitter, HandlerFn, Subscription, Unsubscription};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = Emitter::builder(Config::default()).build();

    // 1. Each component gets its own context over the shared hub
    let sidebar = root.create(ContextId::fresh());
    let editor = root.create(ContextId::fresh());

    sidebar.subscribe(Subscription::message(
        "nav.changed",
        HandlerFn::arc(|payload| {
            println!("[sidebar] highlighting {:?}", payload);
            None
        }),
    ))?;
    editor.subscribe(Subscription::message(
        "nav.changed",
        HandlerFn::arc(|payload| {
            println!("[editor] loading {:?}", payload);
            None
        }),
    ))?;

    // 2. Messages cross contexts: one broadcast reaches both
    root.event("nav.changed", serde_json::json!({ "path": "/inbox" }));

    // 3. The sidebar shuts down and removes only what it owns
    sidebar.unsubscribe(Unsubscription::All)?;
    println!("[root] after sidebar teardown:");
    root.event("nav.changed", serde_json::json!({ "path": "/sent" }));

    // 4. Scoped emitters may rebase; the root never does
    let mut roaming = root.create(ContextId::fresh());
    roaming.in_context(editor.context())?;
    println!("[roaming] now files under the editor context");

    let mut pinned = root.clone();
    if let Err(err) = pinned.in_context(ContextId::fresh()) {
        println!("[root] rebase refused: {err}");
    }

    Ok(())
}
