//! Drawing surface provided by the host GUI framework
//!
//! The watchface never renders pixels itself. It asks the host for text and
//! bitmap layers, fonts and bitmaps, and sets the text on its layers.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum resource or system font name length
pub const MAX_RESOURCE_NAME_LEN: usize = 24;

/// Name of a bundled resource or system font, e.g. "TIME_FONT_70"
pub type ResourceName = String<MAX_RESOURCE_NAME_LEN>;

/// Surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Resource name not found in the bundle
    ResourceNotFound,
    /// Host could not allocate the layer, font or bitmap
    OutOfMemory,
    /// Layer id does not refer to a live layer
    InvalidLayer,
}

/// Host-assigned layer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerId(pub u32);

/// Host-assigned handle to a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontHandle(pub u32);

/// Host-assigned handle to a loaded bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitmapHandle(pub u32);

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self { x, y, w, h }
    }

    /// Check if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Layer colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Color {
    #[default]
    Black,
    White,
    /// Transparent
    Clear,
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Where a font comes from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontSpec {
    /// Built into the host firmware, e.g. "BITHAM_42_BOLD"
    System(ResourceName),
    /// Bundled with the app, e.g. "TIME_FONT_70"
    Custom(ResourceName),
}

/// Text layer appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// `None` keeps the host's default font
    pub font: Option<FontHandle>,
    pub text_color: Color,
    pub background: Color,
    pub alignment: Alignment,
}

/// Layer, font and bitmap services
pub trait Surface {
    /// Bounds of the window's root layer
    fn root_bounds(&self) -> Rect;

    fn load_font(&mut self, font: &FontSpec) -> Result<FontHandle, SurfaceError>;

    fn unload_font(&mut self, font: FontHandle);

    fn load_bitmap(&mut self, resource: &str) -> Result<BitmapHandle, SurfaceError>;

    fn unload_bitmap(&mut self, bitmap: BitmapHandle);

    /// Create a text layer and add it to the root layer
    fn create_text_layer(&mut self, frame: Rect) -> Result<LayerId, SurfaceError>;

    /// Create a bitmap layer showing `bitmap` and add it to the root layer
    fn create_bitmap_layer(
        &mut self,
        frame: Rect,
        bitmap: BitmapHandle,
    ) -> Result<LayerId, SurfaceError>;

    fn destroy_layer(&mut self, layer: LayerId);

    fn set_text_style(&mut self, layer: LayerId, style: &TextStyle) -> Result<(), SurfaceError>;

    fn set_text(&mut self, layer: LayerId, text: &str) -> Result<(), SurfaceError>;
}
