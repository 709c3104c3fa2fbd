//! Channels between the host tasks and the dispatch loop
//!
//! Tasks never call the watchface directly. They post `HostEvent`s and the
//! dispatch loop delivers them one at a time.

use horologe_core::clock::WallTime;
use horologe_protocol::{Dictionary, TransportError};

/// Capacity of the event queue feeding the dispatch loop
pub const EVENT_CHANNEL_SIZE: usize = 16;

/// Capacity of the outbox; a full outbox reports `Busy`
pub const OUTBOX_CHANNEL_SIZE: usize = 2;

/// Callbacks waiting to be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Minute tick
    Tick(WallTime),
    /// Message from the companion
    Inbound(Dictionary),
    /// Message from the companion that the transport discarded
    Dropped(TransportError),
    /// Outcome of an outbound message
    SendResult(Result<(), TransportError>),
}
