//! Message schemas for the watch ↔ companion channel
//!
//! - Watch → Companion: refresh request
//! - Companion → Watch: weather reply

use crate::dict::{DictError, Dictionary, TupleValue};

// Keys: Watch → Companion
pub const KEY_REFRESH: u32 = 0;

// Keys: Companion → Watch
pub const KEY_TEMPERATURE: u32 = 0;
pub const KEY_CONDITIONS: u32 = 1;

/// Recognized inbound keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageKey {
    /// Temperature in whole degrees
    Temperature,
    /// Short weather description
    Conditions,
}

impl MessageKey {
    /// Map a raw tuple key onto an inbound key
    pub fn from_key(key: u32) -> Option<Self> {
        match key {
            KEY_TEMPERATURE => Some(MessageKey::Temperature),
            KEY_CONDITIONS => Some(MessageKey::Conditions),
            _ => None,
        }
    }
}

/// Request for fresh weather data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshRequest;

impl RefreshRequest {
    /// The single byte carried at `KEY_REFRESH`
    pub const PAYLOAD: u8 = 0;

    /// Encode as an outbound dictionary
    pub fn to_dictionary(&self) -> Result<Dictionary, DictError> {
        let mut dict = Dictionary::new();
        dict.write_u8(KEY_REFRESH, Self::PAYLOAD)?;
        Ok(dict)
    }

    /// Check whether an inbound dictionary (companion side) is a refresh request
    pub fn matches(dict: &Dictionary) -> bool {
        dict.len() == 1 && dict.get(KEY_REFRESH) == Some(&TupleValue::UInt8(Self::PAYLOAD))
    }
}

/// Weather data sent by the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherReply<'a> {
    pub temperature: i32,
    pub conditions: &'a str,
}

impl<'a> WeatherReply<'a> {
    /// Encode as a dictionary, temperature first
    pub fn to_dictionary(&self) -> Result<Dictionary, DictError> {
        let mut dict = Dictionary::new();
        dict.write_i32(KEY_TEMPERATURE, self.temperature)?;
        dict.write_cstring(KEY_CONDITIONS, self.conditions)?;
        Ok(dict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_payload() {
        let dict = RefreshRequest.to_dictionary().unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(KEY_REFRESH), Some(&TupleValue::UInt8(0)));
        assert!(RefreshRequest::matches(&dict));
    }

    #[test]
    fn test_refresh_request_rejects_other_payloads() {
        let mut dict = Dictionary::new();
        dict.write_u8(KEY_REFRESH, 1).unwrap();
        assert!(!RefreshRequest::matches(&dict));

        let mut dict = Dictionary::new();
        dict.write_i32(KEY_REFRESH, 0).unwrap();
        assert!(!RefreshRequest::matches(&dict));
    }

    #[test]
    fn test_weather_reply_encoding() {
        let reply = WeatherReply {
            temperature: -4,
            conditions: "Snow",
        };
        let dict = reply.to_dictionary().unwrap();
        assert_eq!(dict.get(KEY_TEMPERATURE).and_then(|v| v.as_i32()), Some(-4));
        assert_eq!(dict.get(KEY_CONDITIONS).and_then(|v| v.as_str()), Some("Snow"));
    }

    #[test]
    fn test_message_key_mapping() {
        assert_eq!(MessageKey::from_key(0), Some(MessageKey::Temperature));
        assert_eq!(MessageKey::from_key(1), Some(MessageKey::Conditions));
        assert_eq!(MessageKey::from_key(2), None);
    }
}
