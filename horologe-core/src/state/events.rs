//! Events that drive the refresh state machine

/// Events that can trigger refresh state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshEvent {
    /// Minute tick landed on a refresh boundary; a request is being sent
    RefreshDue,
    /// Outbox refused the request before it left the watch
    SendRejected,
    /// Host reported the request was delivered
    SendSucceeded,
    /// Host reported the request failed in transit
    SendFailed,
}
