//! Wall-clock time and its on-screen form
//!
//! The host hands over a `WallTime` on every minute tick; the formatter turns
//! it into the two-character strings shown on the hour and minute layers.

pub mod format;
pub mod time;

pub use format::{format_hour, format_minute, DisplayTime, TimeText};
pub use time::{ClockError, WallTime};
