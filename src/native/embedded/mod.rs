//! Embedded in-memory event host.
//!
//! Reference implementations of the host capability traits, used by the
//! crate's own tests and demos. Any production host supplies its own.

mod event;
mod target;

pub use event::SyntheticEvent;
pub use target::SyntheticTarget;
