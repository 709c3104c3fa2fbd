//! Simulator tasks
//!
//! Each task runs on the tokio runtime and talks to the dispatch loop only
//! through the channels in `crate::channels`.

pub mod companion;
pub mod tick;

pub use companion::{companion_task, CompanionConfig};
pub use tick::tick_task;
