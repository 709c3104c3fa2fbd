//! Host-agnostic watchface logic
//!
//! This crate contains everything that runs inside the callbacks the watch
//! OS dispatches, without depending on that OS:
//!
//! - Clock formatting for the hour and minute layers
//! - Weather refresh state machine
//! - Weather reply parsing
//! - Host service traits (clock, drawing surface, outbox)
//! - Watchface configuration types
//! - The `Watchface` application that ties them together

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod clock;
pub mod config;
pub mod face;
pub mod state;
pub mod text;
pub mod traits;
pub mod weather;

pub use face::{FaceError, FaceState, Watchface};
