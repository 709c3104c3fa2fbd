//! Configuration types
//!
//! Board-agnostic watchface configuration. Hosts deserialize it (behind the
//! `serde` feature) or start from one of the tutorial stage presets.

pub mod stage;
pub mod types;

pub use stage::Stage;
pub use types::*;
