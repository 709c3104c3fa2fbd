//! Companion weather feed
//!
//! - `trigger`: which minute ticks ask the companion for fresh data
//! - `report`: turning a companion reply into the info-layer text

pub mod report;
pub mod trigger;

pub use report::{
    parse_reply, InfoText, ParseError, WeatherReport, MAX_CONDITIONS_LEN, MAX_INFO_TEXT_LEN,
    MAX_TEMPERATURE_TEXT_LEN,
};
pub use trigger::{refresh_due, DEFAULT_REFRESH_INTERVAL_MIN};
