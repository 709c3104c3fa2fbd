//! Refresh state definition

use super::events::RefreshEvent;

/// Refresh states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshState {
    /// No request outstanding
    #[default]
    Idle,
    /// Request sent, waiting for the host to report the outcome
    AwaitingReply,
}

impl RefreshState {
    /// Check if a request is outstanding
    pub fn is_awaiting(&self) -> bool {
        matches!(self, RefreshState::AwaitingReply)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: RefreshEvent) -> Self {
        use RefreshEvent::*;
        use RefreshState::*;

        match (self, event) {
            (Idle, RefreshDue) => AwaitingReply,

            // A new boundary supersedes whatever is still in flight
            (AwaitingReply, RefreshDue) => AwaitingReply,
            (AwaitingReply, SendRejected) => Idle,
            (AwaitingReply, SendSucceeded) => Idle,
            (AwaitingReply, SendFailed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
