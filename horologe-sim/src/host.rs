//! Terminal host
//!
//! Implements the host traits on top of the simulator: the clock is a
//! `SimClock`, layers are kept in memory and printed as one status line,
//! and the outbox feeds the companion task.

use std::collections::HashMap;

use horologe_core::clock::{ClockError, WallTime};
use horologe_core::traits::{
    BitmapHandle, Clock, FontHandle, FontSpec, LayerId, Outbox, Rect, Surface, SurfaceError,
    TextStyle,
};
use horologe_protocol::{Dictionary, TransportError};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::clock::SimClock;

/// Resources bundled with the app
const BUNDLED_RESOURCES: &[&str] = &["TIME_FONT_70", "INFO_FONT_15", "BACKGROUND"];

/// Fonts built into the watch firmware
const SYSTEM_FONTS: &[&str] = &[
    "GOTHIC_14",
    "GOTHIC_18_BOLD",
    "GOTHIC_24_BOLD",
    "GOTHIC_28_BOLD",
    "BITHAM_30_BLACK",
    "BITHAM_42_BOLD",
    "BITHAM_42_LIGHT",
];

/// Pebble-sized screen
const SCREEN: Rect = Rect::new(0, 0, 144, 168);

#[derive(Debug)]
enum LayerKind {
    Text(String),
    Bitmap(BitmapHandle),
}

#[derive(Debug)]
struct Layer {
    frame: Rect,
    kind: LayerKind,
}

/// Host backed by the terminal
pub struct TerminalHost {
    clock: SimClock,
    outbox: mpsc::Sender<Dictionary>,
    next_id: u32,
    layers: Vec<(LayerId, Layer)>,
    fonts: HashMap<FontHandle, FontSpec>,
    bitmaps: HashMap<BitmapHandle, String>,
    dirty: bool,
}

impl TerminalHost {
    pub fn new(clock: SimClock, outbox: mpsc::Sender<Dictionary>) -> Self {
        Self {
            clock,
            outbox,
            next_id: 0,
            layers: Vec::new(),
            fonts: HashMap::new(),
            bitmaps: HashMap::new(),
            dirty: false,
        }
    }

    fn id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn layer_mut(&mut self, id: LayerId) -> Result<&mut Layer, SurfaceError> {
        self.layers
            .iter_mut()
            .find(|(l, _)| *l == id)
            .map(|(_, layer)| layer)
            .ok_or(SurfaceError::InvalidLayer)
    }

    /// Number of layers, fonts and bitmaps still allocated
    pub fn live_resources(&self) -> usize {
        self.layers.len() + self.fonts.len() + self.bitmaps.len()
    }

    /// Text layers top to bottom, then left to right
    fn texts(&self) -> Vec<&str> {
        let mut texts: Vec<(Rect, &str)> = self
            .layers
            .iter()
            .filter_map(|(_, layer)| match &layer.kind {
                LayerKind::Text(text) => Some((layer.frame, text.as_str())),
                LayerKind::Bitmap(_) => None,
            })
            .collect();
        texts.sort_by_key(|(frame, _)| (frame.y, frame.x));
        texts.into_iter().map(|(_, t)| t).collect()
    }

    /// Current screen as one line
    pub fn snapshot(&self) -> String {
        let mut line = self.texts().join(" | ");
        for (_, layer) in &self.layers {
            if let LayerKind::Bitmap(bitmap) = layer.kind {
                let name = self.bitmaps.get(&bitmap).map(String::as_str).unwrap_or("?");
                line.push_str(&format!(" [{}]", name));
            }
        }
        line
    }

    /// Print the screen if anything changed since the last call
    pub fn render(&mut self, at: Option<WallTime>) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        match at {
            Some(t) => println!("[{:02}:{:02}] {}", t.hour(), t.minute(), self.snapshot()),
            None => println!("[--:--] {}", self.snapshot()),
        }
    }
}

impl Clock for TerminalHost {
    fn now(&self) -> Result<WallTime, ClockError> {
        self.clock.now()
    }

    fn is_24h_style(&self) -> bool {
        self.clock.is_24h_style()
    }
}

impl Surface for TerminalHost {
    fn root_bounds(&self) -> Rect {
        SCREEN
    }

    fn load_font(&mut self, font: &FontSpec) -> Result<FontHandle, SurfaceError> {
        let known = match font {
            FontSpec::System(name) => SYSTEM_FONTS.contains(&name.as_str()),
            FontSpec::Custom(name) => BUNDLED_RESOURCES.contains(&name.as_str()),
        };
        if !known {
            log::error!("font {:?} not found", font);
            return Err(SurfaceError::ResourceNotFound);
        }
        let handle = FontHandle(self.id());
        self.fonts.insert(handle, font.clone());
        log::debug!("loaded font {:?} as {:?}", font, handle);
        Ok(handle)
    }

    fn unload_font(&mut self, font: FontHandle) {
        if self.fonts.remove(&font).is_none() {
            log::warn!("unloading unknown font {:?}", font);
        }
    }

    fn load_bitmap(&mut self, resource: &str) -> Result<BitmapHandle, SurfaceError> {
        if !BUNDLED_RESOURCES.contains(&resource) {
            log::error!("bitmap {} not found", resource);
            return Err(SurfaceError::ResourceNotFound);
        }
        let handle = BitmapHandle(self.id());
        self.bitmaps.insert(handle, resource.to_string());
        Ok(handle)
    }

    fn unload_bitmap(&mut self, bitmap: BitmapHandle) {
        if self.bitmaps.remove(&bitmap).is_none() {
            log::warn!("unloading unknown bitmap {:?}", bitmap);
        }
    }

    fn create_text_layer(&mut self, frame: Rect) -> Result<LayerId, SurfaceError> {
        let id = LayerId(self.id());
        self.layers.push((
            id,
            Layer {
                frame,
                kind: LayerKind::Text(String::new()),
            },
        ));
        Ok(id)
    }

    fn create_bitmap_layer(
        &mut self,
        frame: Rect,
        bitmap: BitmapHandle,
    ) -> Result<LayerId, SurfaceError> {
        if !self.bitmaps.contains_key(&bitmap) {
            return Err(SurfaceError::ResourceNotFound);
        }
        let id = LayerId(self.id());
        self.layers.push((
            id,
            Layer {
                frame,
                kind: LayerKind::Bitmap(bitmap),
            },
        ));
        self.dirty = true;
        Ok(id)
    }

    fn destroy_layer(&mut self, layer: LayerId) {
        let before = self.layers.len();
        self.layers.retain(|(id, _)| *id != layer);
        if self.layers.len() == before {
            log::warn!("destroying unknown layer {:?}", layer);
        }
    }

    fn set_text_style(&mut self, layer: LayerId, style: &TextStyle) -> Result<(), SurfaceError> {
        if let Some(font) = style.font {
            if !self.fonts.contains_key(&font) {
                return Err(SurfaceError::ResourceNotFound);
            }
        }
        match self.layer_mut(layer)?.kind {
            LayerKind::Text(_) => {
                log::debug!("layer {:?} style {:?}", layer, style);
                Ok(())
            }
            LayerKind::Bitmap(_) => Err(SurfaceError::InvalidLayer),
        }
    }

    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), SurfaceError> {
        let changed = match &mut self.layer_mut(layer)?.kind {
            LayerKind::Text(current) => {
                let changed = current != text;
                if changed {
                    current.clear();
                    current.push_str(text);
                }
                changed
            }
            LayerKind::Bitmap(_) => return Err(SurfaceError::InvalidLayer),
        };
        self.dirty |= changed;
        Ok(())
    }
}

impl Outbox for TerminalHost {
    fn send(&mut self, message: &Dictionary) -> Result<(), TransportError> {
        self.outbox.try_send(message.clone()).map_err(|e| match e {
            TrySendError::Full(_) => TransportError::Busy,
            TrySendError::Closed(_) => TransportError::NotConnected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horologe_core::config::resource;

    fn host() -> (TerminalHost, mpsc::Receiver<Dictionary>) {
        let (tx, rx) = mpsc::channel(1);
        let clock = SimClock::simulated(WallTime::hm(14, 30).unwrap(), true);
        (TerminalHost::new(clock, tx), rx)
    }

    #[test]
    fn test_snapshot_orders_layers() {
        let (mut host, _rx) = host();
        let info = host.create_text_layer(Rect::new(0, 0, 144, 20)).unwrap();
        let minute = host.create_text_layer(Rect::new(30, 70, 100, 75)).unwrap();
        let hour = host.create_text_layer(Rect::new(5, 20, 100, 75)).unwrap();

        host.set_text(hour, "14").unwrap();
        host.set_text(minute, "30").unwrap();
        host.set_text(info, "72F, Cloudy").unwrap();

        assert_eq!(host.snapshot(), "72F, Cloudy | 14 | 30");
    }

    #[test]
    fn test_unknown_resources() {
        let (mut host, _rx) = host();
        assert_eq!(
            host.load_font(&FontSpec::Custom(resource("NOPE"))),
            Err(SurfaceError::ResourceNotFound)
        );
        assert_eq!(host.load_bitmap("NOPE"), Err(SurfaceError::ResourceNotFound));
        assert!(host
            .load_font(&FontSpec::System(resource("GOTHIC_14")))
            .is_ok());
    }

    #[test]
    fn test_set_text_on_destroyed_layer() {
        let (mut host, _rx) = host();
        let layer = host.create_text_layer(Rect::new(0, 0, 10, 10)).unwrap();
        host.destroy_layer(layer);
        assert_eq!(host.set_text(layer, "x"), Err(SurfaceError::InvalidLayer));
        assert_eq!(host.live_resources(), 0);
    }

    #[test]
    fn test_outbox_full_and_closed() {
        let (mut host, rx) = host();
        let msg = Dictionary::new();

        assert_eq!(host.send(&msg), Ok(()));
        assert_eq!(host.send(&msg), Err(TransportError::Busy));

        drop(rx);
        assert_eq!(host.send(&msg), Err(TransportError::NotConnected));
    }
}
