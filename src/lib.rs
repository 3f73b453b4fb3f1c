//! # switchboard
//!
//! **Switchboard** is a context-scoped publish/subscribe mediator for Rust.
//!
//! Components exchange named messages through a shared emitter without
//! holding references to each other, and native event sources (anything that
//! can register listeners) plug into the same subscription surface,
//! including a synthesized triple-click gesture.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │  component   │   │  component   │   │ native source│
//!     │ (subscriber) │   │ (publisher)  │   │ (EventTarget)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ subscribe        │ event / notify   │ fires events into
//!            ▼                  ▼                  ▼ generated wrappers
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Emitter (root handle + scoped handles, one context each)         │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Hub (shared by the whole emitter family)                         │
//! │  - Store          event name → ordered (context, handler) list    │
//! │  - NotifyQueue    pending notices, one armed timer per batch      │
//! │  - ListenerTable  (handler, event type) → generated wrapper       │
//! │  - ClickTracker   triple-click window state                       │
//! │  - DebugTrace     switchable operation trace                      │
//! └──────┬─────────────────────────────────────┬──────────────────────┘
//!        │ evaluate                            │ schedule / cancel
//!        ▼                                     ▼
//!   handlers (synchronous, re-entrant)    Scheduler (tokio or manual)
//! ```
//!
//! ### Dispatch disciplines
//! ```text
//! event(name, payload)    ─► every binding for the name, in order
//! request(name, payload)  ─► exactly one binding; its result, or an error
//! demand(name, payload)   ─► at most one binding; None tolerated
//! notify(name, payload)   ─► queued; flushed FIFO after the batch delay
//! watching(name)          ─► current binding count
//! ```
//!
//! ## Features
//! | Area               | Description                                                              | Key types / traits                   |
//! |--------------------|--------------------------------------------------------------------------|--------------------------------------|
//! | **Dispatch**       | Broadcast plus single-response and optional-response retrieval.          | [`Emitter`]                          |
//! | **Batching**       | Same-window notifies coalesce into one deferred FIFO flush.              | [`TimerHandle`]                      |
//! | **Contexts**       | Subscriptions are filed per context, enabling scoped bulk removal.       | [`ContextId`], [`Unsubscription`]    |
//! | **Native bridge**  | Listener-capable hosts share the subscribe surface; no double-attach.    | [`EventTarget`], [`NativeHandler`]   |
//! | **Handlers**       | Closure adapters for both message and native handlers.                   | [`HandlerFn`], [`NativeFn`]          |
//! | **Errors**         | Typed taxonomy for dispatch failures.                                    | [`DispatchError`]                    |
//! | **Scheduling**     | Pluggable timers; a manual scheduler drives tests deterministically.     | [`Scheduler`], [`ManualScheduler`]   |
//!
//! ## Example
//! ```rust
//! use switchboard::{Config, Emitter, HandlerFn, Subscription};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter = Emitter::builder(Config::default()).build();
//!
//!     // Components talk through names, never through each other.
//!     emitter.subscribe(Subscription::message(
//!         "cache.invalidate",
//!         HandlerFn::arc(|payload| {
//!             println!("invalidating: {payload:?}");
//!             None
//!         }),
//!     ))?;
//!
//!     // Synchronous broadcast; names are case-insensitive.
//!     emitter.event("Cache.Invalidate", serde_json::json!({ "key": "user:7" }));
//!
//!     // Deferred broadcast: both notices flush together after the delay.
//!     emitter.notify("cache.invalidate", serde_json::json!({ "key": "user:8" }));
//!     emitter.notify("cache.invalidate", serde_json::json!({ "key": "user:9" }));
//!     tokio::time::sleep(std::time::Duration::from_millis(60)).await;
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod handlers;
mod native;
mod store;
mod timer;

// ---- Public re-exports ----

pub use crate::core::{Config, ContextId, Emitter, EmitterBuilder, Subscription, Unsubscription};
pub use error::DispatchError;
pub use handlers::{Handler, HandlerFn, HandlerRef, NativeFn, NativeHandler, NativeRef};
pub use native::{
    EventRef, EventTarget, ListenerRef, NativeEvent, SyntheticEvent, SyntheticTarget, TargetRef,
};
pub use timer::{ManualScheduler, ScheduledFn, Scheduler, TimerHandle, TokioScheduler};
