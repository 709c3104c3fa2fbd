//! Watchface configuration for the simulator
//!
//! Loads a TOML file into `FaceConfig`, or falls back to the embedded
//! `watchface.toml`.

mod loader;

pub use loader::{load_config, parse_config, EMBEDDED_CONFIG};
