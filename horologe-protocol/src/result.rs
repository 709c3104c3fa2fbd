//! Transport result codes
//!
//! Reported by the host when an outbound message cannot be queued or
//! delivered, or when an inbound message was discarded before reaching
//! the watchface.

/// Reasons a message failed in transit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Companion did not acknowledge in time
    SendTimeout,
    /// No connection to the phone
    NotConnected,
    /// Previous outbound message still pending
    Busy,
    /// Message did not fit the transport buffer
    BufferOverflow,
}

impl TransportError {
    /// Check if the failure is likely to clear by itself before the next attempt
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TransportError::SendTimeout | TransportError::Busy | TransportError::NotConnected
        )
    }

    /// Short description for log output
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportError::SendTimeout => "send timeout",
            TransportError::NotConnected => "not connected",
            TransportError::Busy => "busy",
            TransportError::BufferOverflow => "buffer overflow",
        }
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
