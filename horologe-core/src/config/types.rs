//! Configuration type definitions

use heapless::String;

use crate::traits::{FontSpec, Rect, ResourceName};
use crate::weather::{InfoText, DEFAULT_REFRESH_INTERVAL_MIN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum temperature unit suffix length
pub const MAX_UNIT_LEN: usize = 3;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval above 60 minutes
    InvalidRefreshInterval,
    /// Temperature unit suffix is empty
    EmptyUnit,
    /// A layer rectangle has zero width or height
    EmptyLayer,
    /// Info layer height is zero or negative
    InvalidInfoHeight,
}

/// Screen positions of the watchface layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Hour text layer
    pub hour: Rect,
    /// Minute text layer
    pub minute: Rect,
    /// Height of the info strip along the top edge; spans the window width
    pub info_height: i16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour: Rect::new(5, 20, 100, 75),
            minute: Rect::new(30, 70, 100, 75),
            info_height: 20,
        }
    }
}

/// Companion weather settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeatherConfig {
    /// Show the info layer and accept companion replies
    pub enabled: bool,
    /// Minutes between refresh requests, 0 = never
    pub refresh_interval_min: u8,
    /// Suffix after the temperature value, e.g. "F"
    pub unit: String<MAX_UNIT_LEN>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        let mut unit = String::new();
        let _ = unit.push('F');
        Self {
            enabled: true,
            refresh_interval_min: DEFAULT_REFRESH_INTERVAL_MIN,
            unit,
        }
    }
}

/// Watchface configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Font for the hour and minute layers; `None` keeps the host default
    pub time_font: Option<FontSpec>,
    /// Font for the info layer; `None` keeps the host default
    pub info_font: Option<FontSpec>,
    /// Full-screen background bitmap resource
    pub background: Option<ResourceName>,
    /// Info text shown until the first weather reply
    pub placeholder: InfoText,
    pub weather: WeatherConfig,
    pub layout: LayoutConfig,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            time_font: Some(FontSpec::Custom(resource("TIME_FONT_70"))),
            info_font: Some(FontSpec::Custom(resource("INFO_FONT_15"))),
            background: None,
            placeholder: crate::text::copy_truncated("Loading..."),
            weather: WeatherConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl FaceConfig {
    /// Check the configuration for values the watchface cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.refresh_interval_min > 60 {
            return Err(ConfigError::InvalidRefreshInterval);
        }
        if self.weather.enabled && self.weather.unit.is_empty() {
            return Err(ConfigError::EmptyUnit);
        }
        if self.layout.hour.is_empty() || self.layout.minute.is_empty() {
            return Err(ConfigError::EmptyLayer);
        }
        if self.weather.enabled && self.layout.info_height <= 0 {
            return Err(ConfigError::InvalidInfoHeight);
        }
        Ok(())
    }
}

/// Build a resource name, truncating at capacity
pub fn resource(name: &str) -> ResourceName {
    crate::text::copy_truncated(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FaceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weather.refresh_interval_min, 30);
        assert_eq!(config.weather.unit.as_str(), "F");
    }

    #[test]
    fn test_interval_limit() {
        let mut config = FaceConfig::default();
        config.weather.refresh_interval_min = 60;
        assert!(config.validate().is_ok());
        config.weather.refresh_interval_min = 61;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRefreshInterval));
    }

    #[test]
    fn test_empty_unit() {
        let mut config = FaceConfig::default();
        config.weather.unit.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyUnit));

        // Unit is irrelevant without weather
        config.weather.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_layer() {
        let mut config = FaceConfig::default();
        config.layout.minute.h = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyLayer));
    }

    #[test]
    fn test_info_height() {
        let mut config = FaceConfig::default();
        config.layout.info_height = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidInfoHeight));
    }
}
