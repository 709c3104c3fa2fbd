//! Host clock service

use crate::clock::{ClockError, WallTime};

/// Read-only access to the host's wall clock and time preferences
pub trait Clock {
    /// Current local time
    fn now(&self) -> Result<WallTime, ClockError>;

    /// Whether the user prefers a 24-hour clock
    fn is_24h_style(&self) -> bool;
}
