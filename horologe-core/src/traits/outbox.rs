//! Outbound half of the companion transport

use horologe_protocol::{Dictionary, TransportError};

/// Queue messages for the companion
///
/// `send` only reports whether the host accepted the message. Delivery is
/// reported later through `AppHandlers::on_send_result`.
pub trait Outbox {
    fn send(&mut self, message: &Dictionary) -> Result<(), TransportError>;
}
