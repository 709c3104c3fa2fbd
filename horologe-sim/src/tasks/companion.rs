//! Simulated companion app
//!
//! Stands in for the phone side: acknowledges every outbound message and
//! answers refresh requests with a fixed weather report. Failures can be
//! injected on a schedule to exercise the watchface's error paths.

use std::time::Duration;

use horologe_protocol::{Dictionary, RefreshRequest, TransportError, WeatherReply};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::channels::HostEvent;

/// Companion behavior
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    pub temperature: i32,
    pub conditions: String,
    /// Push a report as soon as the companion starts
    pub reply_on_start: bool,
    /// Delay before acknowledging a request
    pub latency: Duration,
    /// Drop every n-th reply in transit
    pub drop_every: Option<u32>,
    /// Fail every n-th outbound send
    pub fail_every: Option<u32>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            temperature: 72,
            conditions: "Cloudy".to_string(),
            reply_on_start: true,
            latency: Duration::from_millis(50),
            drop_every: None,
            fail_every: None,
        }
    }
}

impl CompanionConfig {
    fn reply(&self) -> Option<Dictionary> {
        let reply = WeatherReply {
            temperature: self.temperature,
            conditions: &self.conditions,
        };
        match reply.to_dictionary() {
            Ok(dict) => Some(dict),
            Err(e) => {
                log::error!("companion: cannot encode reply: {:?}", e);
                None
            }
        }
    }
}

/// Check if the n-th (1-based) occurrence hits an every-k schedule
fn hits(schedule: Option<u32>, n: u32) -> bool {
    matches!(schedule, Some(k) if k > 0 && n % k == 0)
}

/// Companion task - consumes the outbox and posts results and replies
pub async fn companion_task(
    config: CompanionConfig,
    mut requests: mpsc::Receiver<Dictionary>,
    events: mpsc::Sender<HostEvent>,
) {
    log::info!("companion started");
    let mut sends = 0u32;
    let mut replies = 0u32;

    if config.reply_on_start {
        if let Some(reply) = config.reply() {
            replies += 1;
            if events.send(deliver(&config, replies, reply)).await.is_err() {
                return;
            }
        }
    }

    while let Some(message) = requests.recv().await {
        sends += 1;
        sleep(config.latency).await;

        if hits(config.fail_every, sends) {
            log::debug!("companion: failing send #{}", sends);
            if events
                .send(HostEvent::SendResult(Err(TransportError::SendTimeout)))
                .await
                .is_err()
            {
                break;
            }
            continue;
        }

        if events.send(HostEvent::SendResult(Ok(()))).await.is_err() {
            break;
        }

        if !RefreshRequest::matches(&message) {
            log::warn!("companion: ignoring unexpected message {:?}", message);
            continue;
        }

        let Some(reply) = config.reply() else {
            continue;
        };
        replies += 1;
        if events.send(deliver(&config, replies, reply)).await.is_err() {
            break;
        }
    }

    log::info!("companion stopped after {} sends, {} replies", sends, replies);
}

fn deliver(config: &CompanionConfig, n: u32, reply: Dictionary) -> HostEvent {
    if hits(config.drop_every, n) {
        log::debug!("companion: dropping reply #{}", n);
        HostEvent::Dropped(TransportError::BufferOverflow)
    } else {
        HostEvent::Inbound(reply)
    }
}
