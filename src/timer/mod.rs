//! # Delayed-callback collaborator.
//!
//! The dispatch engine defers `notify` flushes and times the triple-click
//! gesture through this module. It needs exactly three capabilities from a
//! timer: schedule a one-shot callback, cancel it before it fires, and read
//! the current time. [`Scheduler`] captures that contract.
//!
//! ## Contents
//! - [`Scheduler`] the abstraction the engine schedules through
//! - [`TimerHandle`] cancellable handle for one armed callback
//! - [`TokioScheduler`] production implementation on the tokio timer
//! - [`ManualScheduler`] virtual-clock implementation for tests
//!
//! ## Rules
//! - A handle fires **at most once**; re-arming after a fire or cancel
//!   requires a new `schedule` call.
//! - `cancel` is idempotent and a no-op once the callback ran.
//! - Callbacks scheduled from inside a firing callback are honored (the
//!   notify queue re-arms itself this way).

mod handle;
mod manual;
mod runtime;
mod scheduler;

pub use handle::TimerHandle;
pub use manual::ManualScheduler;
pub use runtime::TokioScheduler;
pub use scheduler::{ScheduledFn, Scheduler};
