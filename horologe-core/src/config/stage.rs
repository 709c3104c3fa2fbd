//! Tutorial stage presets
//!
//! Each stage adds one feature on top of the previous one. `PeriodicRefresh`
//! without a background is the default `FaceConfig`.

use super::types::{resource, FaceConfig, WeatherConfig};
use crate::traits::FontSpec;

/// Tutorial stages in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Time in the host's default font
    StaticText,
    /// Time in a system font
    SystemFont,
    /// Time in a bundled font
    CustomFont,
    /// Bundled font over a background image
    Background,
    /// Weather strip, filled when the companion sends a reply
    Weather,
    /// Weather refreshed every 30 minutes
    PeriodicRefresh,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::StaticText,
        Stage::SystemFont,
        Stage::CustomFont,
        Stage::Background,
        Stage::Weather,
        Stage::PeriodicRefresh,
    ];

    /// Stage by its 1-based tutorial number
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Configuration reproducing this stage
    pub fn config(self) -> FaceConfig {
        let mut config = FaceConfig {
            time_font: None,
            info_font: None,
            background: None,
            weather: WeatherConfig {
                enabled: false,
                refresh_interval_min: 0,
                ..WeatherConfig::default()
            },
            ..FaceConfig::default()
        };

        if self >= Stage::SystemFont {
            config.time_font = Some(FontSpec::System(resource("BITHAM_42_BOLD")));
        }
        if self >= Stage::CustomFont {
            config.time_font = Some(FontSpec::Custom(resource("TIME_FONT_70")));
        }
        if self >= Stage::Background {
            config.background = Some(resource("BACKGROUND"));
        }
        if self >= Stage::Weather {
            config.weather.enabled = true;
            config.info_font = Some(FontSpec::Custom(resource("INFO_FONT_15")));
        }
        if self >= Stage::PeriodicRefresh {
            config.weather.refresh_interval_min = WeatherConfig::default().refresh_interval_min;
        }
        config
    }
}
