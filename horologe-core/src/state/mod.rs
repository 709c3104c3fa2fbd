//! Weather refresh state machine
//!
//! Tracks whether a refresh request is in flight. The machine is explicit,
//! finite and deterministic; it never retries and never queues.

pub mod events;
pub mod machine;

pub use events::RefreshEvent;
pub use machine::RefreshState;
