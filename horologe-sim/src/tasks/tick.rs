//! Minute tick task
//!
//! With a system clock, ticks land on real minute boundaries. With a
//! simulated clock, every tick advances the clock by one minute and ticks
//! come `speed` times per second.

use std::time::Duration;

use horologe_core::traits::Clock;
use tokio::sync::mpsc;
use tokio::time::{interval, sleep, MissedTickBehavior};

use crate::channels::HostEvent;
use crate::clock::SimClock;

/// Tick task - posts one `HostEvent::Tick` per (simulated) minute
pub async fn tick_task(clock: SimClock, speed: u32, events: mpsc::Sender<HostEvent>) {
    log::info!("tick task started");

    if clock.is_simulated() {
        let mut ticker = interval(tick_period(speed));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let Ok(now) = clock.advance() else {
                log::error!("simulated clock unavailable");
                continue;
            };
            if events.send(HostEvent::Tick(now)).await.is_err() {
                break;
            }
        }
    } else {
        loop {
            sleep(until_next_minute(&clock)).await;
            match clock.now() {
                Ok(now) => {
                    if events.send(HostEvent::Tick(now)).await.is_err() {
                        break;
                    }
                }
                Err(e) => log::error!("system clock unavailable: {:?}", e),
            }
        }
    }

    log::info!("tick task stopped");
}

/// Real time between simulated minutes, never below 1 ms
fn tick_period(speed: u32) -> Duration {
    let period = Duration::from_millis(1000 / u64::from(speed.max(1)));
    period.max(Duration::from_millis(1))
}

/// Time left in the current minute
fn until_next_minute(clock: &SimClock) -> Duration {
    let second = clock.now().map(|t| t.second()).unwrap_or(0);
    Duration::from_secs(u64::from(60 - second))
}
