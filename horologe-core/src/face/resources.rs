//! Layers, fonts and bitmaps held while the window is loaded
//!
//! Everything acquired from the surface is recorded in acquisition order and
//! released in reverse. A `LoadedFace` can only be dropped through
//! `release`, which consumes it.

use heapless::Vec;

use crate::config::FaceConfig;
use crate::traits::{
    Alignment, BitmapHandle, Color, FontHandle, LayerId, Rect, Surface, SurfaceError, TextStyle,
};

/// Upper bound on resources held at once
const MAX_RESOURCES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Resource {
    Font(FontHandle),
    Bitmap(BitmapHandle),
    Layer(LayerId),
}

#[derive(Debug, Default)]
struct Acquired(Vec<Resource, MAX_RESOURCES>);

impl Acquired {
    fn track<S: Surface>(&mut self, surface: &mut S, resource: Resource) -> Result<(), SurfaceError> {
        if let Err(resource) = self.0.push(resource) {
            release_one(surface, resource);
            return Err(SurfaceError::OutOfMemory);
        }
        Ok(())
    }

    fn release_all<S: Surface>(&mut self, surface: &mut S) {
        while let Some(resource) = self.0.pop() {
            release_one(surface, resource);
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

fn release_one<S: Surface>(surface: &mut S, resource: Resource) {
    match resource {
        Resource::Font(font) => surface.unload_font(font),
        Resource::Bitmap(bitmap) => surface.unload_bitmap(bitmap),
        Resource::Layer(layer) => surface.destroy_layer(layer),
    }
}

/// Layers the watchface draws into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceLayers {
    pub background: Option<LayerId>,
    pub hour: LayerId,
    pub minute: LayerId,
    /// Present only when weather is enabled
    pub info: Option<LayerId>,
}

/// Resources owned between window load and unload
#[derive(Debug)]
pub struct LoadedFace {
    layers: FaceLayers,
    acquired: Acquired,
}

impl LoadedFace {
    /// Create every layer and load every font and bitmap `config` asks for
    ///
    /// On failure, whatever was acquired so far is released before the
    /// error is returned.
    pub fn acquire<S: Surface>(surface: &mut S, config: &FaceConfig) -> Result<Self, SurfaceError> {
        let mut acquired = Acquired::default();
        match build(surface, config, &mut acquired) {
            Ok(layers) => Ok(Self { layers, acquired }),
            Err(e) => {
                acquired.release_all(surface);
                Err(e)
            }
        }
    }

    pub fn layers(&self) -> &FaceLayers {
        &self.layers
    }

    /// Number of live layers, fonts and bitmaps
    pub fn resource_count(&self) -> usize {
        self.acquired.len()
    }

    /// Release everything, most recently acquired first
    pub fn release<S: Surface>(mut self, surface: &mut S) {
        self.acquired.release_all(surface);
    }
}

fn build<S: Surface>(
    surface: &mut S,
    config: &FaceConfig,
    acquired: &mut Acquired,
) -> Result<FaceLayers, SurfaceError> {
    let bounds = surface.root_bounds();

    let background = match &config.background {
        Some(name) => {
            let bitmap = surface.load_bitmap(name)?;
            acquired.track(surface, Resource::Bitmap(bitmap))?;
            let layer = surface.create_bitmap_layer(bounds, bitmap)?;
            acquired.track(surface, Resource::Layer(layer))?;
            Some(layer)
        }
        None => None,
    };

    let time_font = match &config.time_font {
        Some(spec) => {
            let font = surface.load_font(spec)?;
            acquired.track(surface, Resource::Font(font))?;
            Some(font)
        }
        None => None,
    };
    let time_style = TextStyle {
        font: time_font,
        text_color: Color::Black,
        background: Color::Clear,
        alignment: Alignment::Center,
    };

    let hour = text_layer(surface, acquired, config.layout.hour, &time_style)?;
    let minute = text_layer(surface, acquired, config.layout.minute, &time_style)?;

    let info = if config.weather.enabled {
        let info_font = match &config.info_font {
            Some(spec) => {
                let font = surface.load_font(spec)?;
                acquired.track(surface, Resource::Font(font))?;
                Some(font)
            }
            None => None,
        };
        let style = TextStyle {
            font: info_font,
            text_color: Color::White,
            background: Color::Black,
            alignment: Alignment::Center,
        };
        let frame = Rect::new(0, 0, bounds.w, config.layout.info_height);
        Some(text_layer(surface, acquired, frame, &style)?)
    } else {
        None
    };

    Ok(FaceLayers {
        background,
        hour,
        minute,
        info,
    })
}

fn text_layer<S: Surface>(
    surface: &mut S,
    acquired: &mut Acquired,
    frame: Rect,
    style: &TextStyle,
) -> Result<LayerId, SurfaceError> {
    let layer = surface.create_text_layer(frame)?;
    acquired.track(surface, Resource::Layer(layer))?;
    surface.set_text_style(layer, style)?;
    Ok(layer)
}
