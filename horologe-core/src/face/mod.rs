//! The watchface application
//!
//! `Watchface` implements `AppHandlers` for any `Host`. It owns its state
//! outright; nothing lives in statics, and every callback works on the
//! state passed in through `&mut self`.

mod resources;
mod state;

pub use resources::{FaceLayers, LoadedFace};
pub use state::FaceState;

use horologe_protocol::{Dictionary, RefreshRequest, TransportError};

use crate::clock::{ClockError, DisplayTime, WallTime};
use crate::config::{ConfigError, FaceConfig};
use crate::state::RefreshEvent;
use crate::traits::{AppHandlers, Clock, Host, Outbox, Surface, SurfaceError};
use crate::weather::{parse_reply, refresh_due, ParseError};

/// Text on the time layers before the first clock read
const INITIAL_TIME_TEXT: &str = "00";

/// Errors surfaced by the watchface callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError {
    /// Host clock could not be read
    Clock(ClockError),
    /// Host surface refused a layer, font or bitmap operation
    Surface(SurfaceError),
}

impl From<ClockError> for FaceError {
    fn from(e: ClockError) -> Self {
        FaceError::Clock(e)
    }
}

impl From<SurfaceError> for FaceError {
    fn from(e: SurfaceError) -> Self {
        FaceError::Surface(e)
    }
}

/// Minute-tick watchface with a companion weather strip
#[derive(Debug)]
pub struct Watchface {
    config: FaceConfig,
    state: FaceState,
    loaded: Option<LoadedFace>,
}

impl Watchface {
    /// Create a watchface; the window is not loaded yet
    pub fn new(config: FaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = FaceState::new(&config.placeholder);
        Ok(Self {
            config,
            state,
            loaded: None,
        })
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn state(&self) -> &FaceState {
        &self.state
    }

    /// Layers currently on screen, if the window is loaded
    pub fn layers(&self) -> Option<&FaceLayers> {
        self.loaded.as_ref().map(|f| f.layers())
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Read the clock and redraw the hour and minute layers
    fn update_time<H: Clock + Surface>(&mut self, host: &mut H) -> Result<(), FaceError> {
        let now = host.now()?;
        let time = DisplayTime::new(&now, host.is_24h_style());

        if let Some(face) = &self.loaded {
            let layers = *face.layers();
            host.set_text(layers.hour, &time.hour)?;
            host.set_text(layers.minute, &time.minute)?;
        }

        self.state.display_time = Some(time);
        Ok(())
    }

    /// Ask the companion for fresh weather
    fn request_refresh<H: Outbox>(&mut self, host: &mut H) {
        if self.state.refresh.is_awaiting() {
            log::debug!("previous weather request still pending, superseding");
        }
        self.apply(RefreshEvent::RefreshDue);

        let request = match RefreshRequest.to_dictionary() {
            Ok(dict) => dict,
            Err(e) => {
                log::error!("could not build refresh request: {:?}", e);
                self.apply(RefreshEvent::SendRejected);
                return;
            }
        };

        match host.send(&request) {
            Ok(()) => {
                self.state.requests_sent += 1;
                log::info!("weather refresh requested");
            }
            Err(reason) => {
                self.state.send_failures += 1;
                log_transport("refresh request not queued", reason);
                self.apply(RefreshEvent::SendRejected);
            }
        }
    }

    fn apply(&mut self, event: RefreshEvent) {
        self.state.refresh = self.state.refresh.transition(event);
    }

    /// Put the current info text on the info layer
    fn show_info<S: Surface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        match self.layers().and_then(|l| l.info) {
            Some(layer) => surface.set_text(layer, &self.state.info_text),
            None => Ok(()),
        }
    }
}

impl<H: Host> AppHandlers<H> for Watchface {
    type Error = FaceError;

    fn on_load(&mut self, host: &mut H) -> Result<(), FaceError> {
        log::info!("window load");

        if let Some(previous) = self.loaded.take() {
            log::warn!("window loaded twice, releasing previous resources");
            previous.release(host);
        }

        let face = LoadedFace::acquire(host, &self.config)?;
        let layers = *face.layers();
        self.loaded = Some(face);

        host.set_text(layers.hour, INITIAL_TIME_TEXT)?;
        host.set_text(layers.minute, INITIAL_TIME_TEXT)?;
        self.show_info(host)?;

        self.update_time(host)
    }

    fn on_unload(&mut self, host: &mut H) {
        if let Some(face) = self.loaded.take() {
            log::info!("window unload, releasing {} resources", face.resource_count());
            face.release(host);
        }
    }

    fn on_tick(&mut self, host: &mut H, tick: WallTime) -> Result<(), FaceError> {
        let shown = self.update_time(host);

        let weather = &self.config.weather;
        if weather.enabled && refresh_due(tick.minute(), weather.refresh_interval_min) {
            self.request_refresh(host);
        }

        shown
    }

    fn on_message_received(&mut self, host: &mut H, message: &Dictionary) -> Result<(), FaceError> {
        log::info!("message received, {} fields", message.len());

        if !self.config.weather.enabled {
            log::debug!("weather disabled, message ignored");
            return Ok(());
        }

        match parse_reply(message) {
            Ok(report) => {
                self.state.info_text = report.display_text(&self.config.weather.unit);
                self.state.weather = Some(report);
                self.show_info(host)?;
            }
            Err(ParseError::Incomplete {
                has_temperature,
                has_conditions,
            }) => {
                log::warn!(
                    "incomplete weather reply (temperature: {}, conditions: {}), display unchanged",
                    has_temperature,
                    has_conditions
                );
            }
        }
        Ok(())
    }

    fn on_message_dropped(&mut self, _host: &mut H, reason: TransportError) {
        self.state.messages_dropped += 1;
        log::error!("message dropped: {}", reason);
    }

    fn on_send_result(&mut self, _host: &mut H, result: Result<(), TransportError>) {
        match result {
            Ok(()) => {
                log::info!("outbox send successful");
                self.apply(RefreshEvent::SendSucceeded);
            }
            Err(reason) => {
                self.state.send_failures += 1;
                log_transport("outbox send failed", reason);
                self.apply(RefreshEvent::SendFailed);
            }
        }
    }
}

fn log_transport(what: &str, reason: TransportError) {
    if reason.is_transient() {
        log::warn!("{}: {}", what, reason);
    } else {
        log::error!("{}: {}", what, reason);
    }
}
