//! # Example: notify_batch
//!
//! Deferred dispatch: `notify` queues notices and flushes the whole batch
//! once per delay window instead of dispatching eagerly.
//!
//! Demonstrates how to:
//! - Coalesce a burst of notifications into one flush.
//! - Cancel a pending batch through the returned [`TimerHandle`].
//! - Observe that cancelled notices are kept for the next batch.
//!
//! ## Flow
//! ```text
//! notify("stats.dirty") ──► queue [dirty#1], timer armed (30ms)
//! notify("stats.dirty") ──► queue [dirty#1, dirty#2], same timer
//!        ... 30ms later ──► flush: handler runs twice, FIFO
//!
//! notify("stats.dirty") ──► timer armed
//! handle.cancel()       ──► timer dropped, notice kept
//! notify("stats.dirty") ──► fresh timer; flush delivers both
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example notify_batch
//! ```

use std::time::Duration;

use switchboard::{Config, Emitter, HandlerFn, Subscription};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let emitter = Emitter::builder(Config::default()).build();

    emitter.subscribe(Subscription::message(
        "stats.dirty",
        HandlerFn::arc(|payload| {
            println!("[stats] recomputing for {:?}", payload);
            None
        }),
    ))?;

    // 1. A burst of notifies coalesces onto one timer
    println!("--- burst ---");
    emitter.notify("stats.dirty", serde_json::json!({ "source": "upload" }));
    emitter.notify("stats.dirty", serde_json::json!({ "source": "delete" }));
    println!("(nothing dispatched yet)");
    tokio::time::sleep(Duration::from_millis(60)).await;

    // 2. Cancelling the handle drops the timer but keeps the notices
    println!("--- cancel ---");
    let handle = emitter.notify("stats.dirty", serde_json::json!({ "source": "rename" }));
    handle.cancel();
    tokio::time::sleep(Duration::from_millis(60)).await;
    println!("(cancelled batch did not flush)");

    // 3. The next notify re-arms and flushes the kept backlog too
    println!("--- backlog ---");
    emitter.notify("stats.dirty", serde_json::json!({ "source": "sync" }));
    tokio::time::sleep(Duration::from_millis(60)).await;

    Ok(())
}
