//! Callback interface held by the host
//!
//! The host dispatches one callback at a time; none of them may block.

use horologe_protocol::{Dictionary, TransportError};

use crate::clock::WallTime;

/// Callbacks a watchface exposes to its host
pub trait AppHandlers<H> {
    type Error;

    /// Window pushed: acquire layers and fonts, draw the first frame
    fn on_load(&mut self, host: &mut H) -> Result<(), Self::Error>;

    /// Window popped: release everything acquired in `on_load`
    fn on_unload(&mut self, host: &mut H);

    /// Minute tick
    fn on_tick(&mut self, host: &mut H, tick: WallTime) -> Result<(), Self::Error>;

    /// Companion message arrived
    fn on_message_received(&mut self, host: &mut H, message: &Dictionary)
        -> Result<(), Self::Error>;

    /// Transport discarded an inbound message
    fn on_message_dropped(&mut self, host: &mut H, reason: TransportError);

    /// Outcome of the last `Outbox::send`
    fn on_send_result(&mut self, host: &mut H, result: Result<(), TransportError>);
}
