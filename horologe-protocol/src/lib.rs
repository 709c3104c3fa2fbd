//! Companion Message Protocol
//!
//! This crate defines the structured key-value messages exchanged between the
//! watchface and its companion process on the phone. The transport itself
//! (framing, retransmission, buffer sizes) belongs to the host; the watchface
//! only ever sees whole dictionaries.
//!
//! # Message Overview
//!
//! ```text
//! Watch → Companion (refresh request)
//! ┌─────┬──────────┐
//! │ KEY │ VALUE    │
//! │ 0   │ u8 = 0   │
//! └─────┴──────────┘
//!
//! Companion → Watch (weather reply)
//! ┌─────┬──────────────────────┐
//! │ KEY │ VALUE                │
//! │ 0   │ i32 temperature      │
//! │ 1   │ cstring conditions   │
//! └─────┴──────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod dict;
pub mod messages;
pub mod result;

pub use dict::{DictError, Dictionary, Tuple, TupleValue, MAX_CSTRING_LEN, MAX_TUPLES};
pub use messages::{
    MessageKey, RefreshRequest, WeatherReply, KEY_CONDITIONS, KEY_REFRESH, KEY_TEMPERATURE,
};
pub use result::TransportError;
