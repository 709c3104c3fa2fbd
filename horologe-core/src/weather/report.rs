//! Weather reply parsing
//!
//! A reply is read in one pass, in the order the transport delivered its
//! tuples. Only the reply at hand is consulted: nothing carries over from an
//! earlier message, so a reply missing either field is rejected instead of
//! being completed with stale data.

use core::fmt::Write;

use heapless::String;
use horologe_protocol::{Dictionary, MessageKey};

use crate::text::{copy_truncated, Truncating};

/// Maximum conditions text kept from a reply
pub const MAX_CONDITIONS_LEN: usize = 31;

/// Maximum temperature text, value plus unit
pub const MAX_TEMPERATURE_TEXT_LEN: usize = 7;

/// Maximum text shown on the info layer
pub const MAX_INFO_TEXT_LEN: usize = 31;

/// Info-layer text
pub type InfoText = String<MAX_INFO_TEXT_LEN>;

/// Errors parsing a weather reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Reply lacked one or both fields
    Incomplete {
        has_temperature: bool,
        has_conditions: bool,
    },
}

/// Weather values from one complete reply
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReport {
    /// Temperature in whole degrees
    pub temperature: i32,
    /// Short description, e.g. "Cloudy"
    pub conditions: String<MAX_CONDITIONS_LEN>,
}

impl WeatherReport {
    /// Temperature followed by its unit suffix, e.g. "72F"
    pub fn temperature_text(&self, unit: &str) -> String<MAX_TEMPERATURE_TEXT_LEN> {
        let mut out = String::new();
        let _ = write!(Truncating::new(&mut out), "{}{}", self.temperature, unit);
        out
    }

    /// Info-layer text: "<temperature>, <conditions>"
    pub fn display_text(&self, unit: &str) -> InfoText {
        let mut out = String::new();
        let mut w = Truncating::new(&mut out);
        let _ = write!(w, "{}, {}", self.temperature_text(unit), self.conditions);
        if w.truncated() {
            log::debug!("weather text truncated to {} chars", MAX_INFO_TEXT_LEN);
        }
        out
    }
}

/// Extract a weather report from an inbound message
///
/// Unrecognized keys and recognized keys with the wrong value type are
/// logged and skipped. When a key repeats, the last occurrence wins.
pub fn parse_reply(message: &Dictionary) -> Result<WeatherReport, ParseError> {
    let mut temperature: Option<i32> = None;
    let mut conditions: Option<String<MAX_CONDITIONS_LEN>> = None;

    for tuple in message {
        match MessageKey::from_key(tuple.key) {
            Some(MessageKey::Temperature) => match tuple.value.as_i32() {
                Some(t) => temperature = Some(t),
                None => log::warn!(
                    "temperature key {} carries {}, skipped",
                    tuple.key,
                    tuple.value.type_name()
                ),
            },
            Some(MessageKey::Conditions) => match tuple.value.as_str() {
                Some(s) => conditions = Some(copy_truncated(s)),
                None => log::warn!(
                    "conditions key {} carries {}, skipped",
                    tuple.key,
                    tuple.value.type_name()
                ),
            },
            None => log::error!("key {} not recognized", tuple.key),
        }
    }

    match (temperature, conditions) {
        (Some(temperature), Some(conditions)) => Ok(WeatherReport {
            temperature,
            conditions,
        }),
        (t, c) => Err(ParseError::Incomplete {
            has_temperature: t.is_some(),
            has_conditions: c.is_some(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_protocol::{TupleValue, KEY_CONDITIONS, KEY_TEMPERATURE};

    fn reply(fields: &[(u32, TupleValue)]) -> Dictionary {
        let mut dict = Dictionary::new();
        for (key, value) in fields {
            dict.push(horologe_protocol::Tuple {
                key: *key,
                value: value.clone(),
            })
            .unwrap();
        }
        dict
    }

    fn cstring(s: &str) -> TupleValue {
        TupleValue::CString(copy_truncated(s))
    }

    #[test]
    fn test_temperature_then_conditions() {
        let msg = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int32(72)),
            (KEY_CONDITIONS, cstring("Cloudy")),
        ]);
        let report = parse_reply(&msg).unwrap();
        assert_eq!(report.display_text("F").as_str(), "72F, Cloudy");
    }

    #[test]
    fn test_order_independent() {
        let forward = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int32(72)),
            (KEY_CONDITIONS, cstring("Cloudy")),
        ]);
        let reversed = reply(&[
            (KEY_CONDITIONS, cstring("Cloudy")),
            (KEY_TEMPERATURE, TupleValue::Int32(72)),
        ]);
        assert_eq!(parse_reply(&forward), parse_reply(&reversed));
    }

    #[test]
    fn test_unrecognized_key_skipped() {
        let msg = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int32(72)),
            (2, TupleValue::UInt8(9)),
            (KEY_CONDITIONS, cstring("Cloudy")),
        ]);
        let report = parse_reply(&msg).unwrap();
        assert_eq!(report.temperature, 72);
        assert_eq!(report.conditions.as_str(), "Cloudy");
    }

    #[test]
    fn test_wrong_type_skipped() {
        let msg = reply(&[
            (KEY_TEMPERATURE, cstring("warm")),
            (KEY_CONDITIONS, cstring("Sunny")),
        ]);
        assert_eq!(
            parse_reply(&msg),
            Err(ParseError::Incomplete {
                has_temperature: false,
                has_conditions: true,
            })
        );
    }

    #[test]
    fn test_missing_conditions() {
        let msg = reply(&[(KEY_TEMPERATURE, TupleValue::Int32(50))]);
        assert_eq!(
            parse_reply(&msg),
            Err(ParseError::Incomplete {
                has_temperature: true,
                has_conditions: false,
            })
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(
            parse_reply(&Dictionary::new()),
            Err(ParseError::Incomplete {
                has_temperature: false,
                has_conditions: false,
            })
        );
    }

    #[test]
    fn test_narrow_integer_widened() {
        let msg = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int8(-12)),
            (KEY_CONDITIONS, cstring("Snow")),
        ]);
        let report = parse_reply(&msg).unwrap();
        assert_eq!(report.display_text("C").as_str(), "-12C, Snow");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let msg = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int32(60)),
            (KEY_TEMPERATURE, TupleValue::Int32(61)),
            (KEY_CONDITIONS, cstring("Fog")),
        ]);
        assert_eq!(parse_reply(&msg).unwrap().temperature, 61);
    }

    #[test]
    fn test_long_values_truncated() {
        let msg = reply(&[
            (KEY_TEMPERATURE, TupleValue::Int32(i32::MIN)),
            (
                KEY_CONDITIONS,
                cstring("Scattered thunderstorms with occasional hail"),
            ),
        ]);
        let report = parse_reply(&msg).unwrap();
        assert_eq!(report.conditions.len(), MAX_CONDITIONS_LEN);
        assert_eq!(report.temperature_text("F").as_str(), "-214748");

        let text = report.display_text("F");
        assert_eq!(text.len(), MAX_INFO_TEXT_LEN);
        assert!(text.starts_with("-214748, Scattered"));
    }
}
