//! Host service traits
//!
//! These traits define the interface between the watchface logic and the
//! platform that owns the event loop, the layer tree and the transport.

pub mod clock;
pub mod handlers;
pub mod outbox;
pub mod surface;

pub use clock::Clock;
pub use handlers::AppHandlers;
pub use outbox::Outbox;
pub use surface::{
    Alignment, BitmapHandle, Color, FontHandle, FontSpec, LayerId, Rect, ResourceName, Surface,
    SurfaceError, TextStyle, MAX_RESOURCE_NAME_LEN,
};

/// Everything a watchface needs from its host
pub trait Host: Clock + Surface + Outbox {}

// Blanket implementation for any type providing all three services
impl<T: Clock + Surface + Outbox> Host for T {}
