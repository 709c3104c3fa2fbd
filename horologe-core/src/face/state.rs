//! State owned by a running watchface

use crate::clock::DisplayTime;
use crate::state::RefreshState;
use crate::weather::{InfoText, WeatherReport};

/// Everything the watchface remembers between callbacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceState {
    /// Last time drawn on the hour and minute layers
    pub display_time: Option<DisplayTime>,
    /// Last complete weather reply
    pub weather: Option<WeatherReport>,
    /// Text on the info layer: placeholder until the first reply
    pub info_text: InfoText,
    pub refresh: RefreshState,
    /// Refresh requests accepted by the outbox
    pub requests_sent: u32,
    /// Refresh requests rejected or reported failed
    pub send_failures: u32,
    /// Inbound messages the transport discarded
    pub messages_dropped: u32,
}

impl FaceState {
    pub fn new(placeholder: &InfoText) -> Self {
        Self {
            info_text: placeholder.clone(),
            ..Self::default()
        }
    }
}
