//! Horologe desktop host
//!
//! Runs the watchface against a terminal "screen", the system clock (or a
//! fast simulated one) and a simulated companion app. Like the watch OS, the
//! dispatch loop below delivers one callback at a time.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use horologe_core::clock::WallTime;
use horologe_core::traits::{AppHandlers, Clock};
use horologe_core::Watchface;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

mod channels;
mod clock;
mod config;
mod error;
mod host;
mod tasks;

use crate::channels::{HostEvent, EVENT_CHANNEL_SIZE, OUTBOX_CHANNEL_SIZE};
use crate::clock::{system_now, SimClock};
use crate::config::load_config;
use crate::error::SimError;
use crate::host::TerminalHost;
use crate::tasks::{companion_task, tick_task, CompanionConfig};

#[derive(Parser, Debug)]
#[command(name = "horologe-sim", about = "Run the Horologe watchface in a terminal")]
struct Args {
    /// Watchface configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Tutorial stage preset 1-6, overrides --config
    #[arg(long)]
    stage: Option<u8>,
    /// Show the hour in 12-hour style
    #[arg(long)]
    twelve_hour: bool,
    /// Simulated minutes per real second; 0 follows the system clock
    #[arg(long, default_value_t = 0)]
    speed: u32,
    /// Start time for the simulated clock, HH:MM
    #[arg(long, value_parser = parse_hhmm)]
    start: Option<WallTime>,
    /// Stop after this many ticks
    #[arg(long)]
    ticks: Option<u32>,
    /// Temperature reported by the companion
    #[arg(long, default_value_t = 72, allow_negative_numbers = true)]
    temperature: i32,
    /// Conditions reported by the companion
    #[arg(long, default_value = "Cloudy")]
    conditions: String,
    /// Do not push a report when the companion starts
    #[arg(long)]
    no_initial_reply: bool,
    /// Drop every n-th companion reply
    #[arg(long)]
    drop_every: Option<u32>,
    /// Fail every n-th outbound send
    #[arg(long)]
    fail_every: Option<u32>,
}

fn parse_hhmm(s: &str) -> Result<WallTime, String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s:?}"))?;
    let h: u8 = h.parse().map_err(|_| format!("invalid hour {h:?}"))?;
    let m: u8 = m.parse().map_err(|_| format!("invalid minute {m:?}"))?;
    WallTime::hm(h, m).map_err(|_| format!("{s} is not a time of day"))
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), SimError> {
    let config = load_config(args.config.as_deref(), args.stage)?;
    let mut face = Watchface::new(config)?;

    let use_24h = !args.twelve_hour;
    let clock = if args.speed == 0 {
        SimClock::system(use_24h)
    } else {
        let start = match args.start {
            Some(t) => t,
            None => system_now().map_err(|e| SimError::Face(e.into()))?,
        };
        SimClock::simulated(start, use_24h)
    };

    let (events_tx, mut events_rx) = mpsc::channel::<HostEvent>(EVENT_CHANNEL_SIZE);
    let (outbox_tx, outbox_rx) = mpsc::channel(OUTBOX_CHANNEL_SIZE);
    let mut host = TerminalHost::new(clock.clone(), outbox_tx);

    let companion = CompanionConfig {
        temperature: args.temperature,
        conditions: args.conditions,
        reply_on_start: !args.no_initial_reply,
        latency: Duration::from_millis(50),
        drop_every: args.drop_every,
        fail_every: args.fail_every,
    };
    let mut tasks = Tasks {
        companion: tokio::spawn(companion_task(companion, outbox_rx, events_tx.clone())),
        tick: tokio::spawn(tick_task(clock.clone(), args.speed, events_tx)),
    };

    face.on_load(&mut host)?;
    host.render(clock.now().ok());

    let ticks = event_loop(
        &mut face,
        &mut host,
        &clock,
        &mut events_rx,
        &mut tasks,
        args.ticks,
    )
    .await;
    tasks.abort();

    face.on_unload(&mut host);
    let state = face.state();
    log::info!(
        "{} ticks, {} refresh requests, {} send failures, {} dropped messages",
        ticks,
        state.requests_sent,
        state.send_failures,
        state.messages_dropped
    );
    if host.live_resources() != 0 {
        log::warn!("{} host resources leaked", host.live_resources());
    }
    Ok(())
}

/// Background tasks feeding the dispatch loop
struct Tasks {
    tick: JoinHandle<()>,
    companion: JoinHandle<()>,
}

impl Tasks {
    fn abort(&self) {
        self.tick.abort();
        self.companion.abort();
    }
}

/// Dispatch host events until the tick limit, Ctrl-C or a task exits
///
/// Returns the number of ticks delivered.
async fn event_loop(
    face: &mut Watchface,
    host: &mut TerminalHost,
    clock: &SimClock,
    events_rx: &mut mpsc::Receiver<HostEvent>,
    tasks: &mut Tasks,
    limit: Option<u32>,
) -> u32 {
    let mut ticks = 0u32;
    loop {
        tokio::select! {
            event = events_rx.recv() => {
                let Some(event) = event else { break };
                let is_tick = matches!(event, HostEvent::Tick(_));
                dispatch(face, host, event);
                host.render(clock.now().ok());

                if is_tick {
                    ticks += 1;
                    if limit.is_some_and(|limit| ticks >= limit) {
                        break;
                    }
                }
            }
            result = &mut tasks.tick => {
                task_exited("tick", result);
                break;
            }
            result = &mut tasks.companion => {
                task_exited("companion", result);
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted");
                break;
            }
        }
    }
    ticks
}

fn task_exited(name: &str, result: Result<(), JoinError>) {
    match result {
        Ok(()) => log::warn!("{} task stopped unexpectedly", name),
        Err(e) => log::error!("{} task failed: {}", name, e),
    }
}

/// Deliver one host event to the watchface
///
/// Callback errors are local to the callback: logged, never fatal.
fn dispatch(face: &mut Watchface, host: &mut TerminalHost, event: HostEvent) {
    let result = match event {
        HostEvent::Tick(t) => face.on_tick(host, t),
        HostEvent::Inbound(message) => face.on_message_received(host, &message),
        HostEvent::Dropped(reason) => {
            face.on_message_dropped(host, reason);
            Ok(())
        }
        HostEvent::SendResult(result) => {
            face.on_send_result(host, result);
            Ok(())
        }
    };
    if let Err(e) = result {
        log::error!("callback failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("14:30"), Ok(WallTime::hm(14, 30).unwrap()));
        assert_eq!(parse_hhmm("0:05"), Ok(WallTime::hm(0, 5).unwrap()));
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("1430").is_err());
        assert!(parse_hhmm("ab:cd").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "horologe-sim",
            "--speed",
            "10",
            "--start",
            "13:58",
            "--temperature",
            "-3",
            "--ticks",
            "5",
        ]);
        assert_eq!(args.speed, 10);
        assert_eq!(args.start, Some(WallTime::hm(13, 58).unwrap()));
        assert_eq!(args.temperature, -3);
        assert_eq!(args.ticks, Some(5));
    }

    #[test]
    fn test_dispatch_end_to_end() {
        let (tx, mut rx) = mpsc::channel(OUTBOX_CHANNEL_SIZE);
        let clock = SimClock::simulated(WallTime::hm(14, 29).unwrap(), true);
        let mut host = TerminalHost::new(clock.clone(), tx);
        let mut face = Watchface::new(horologe_core::config::FaceConfig::default()).unwrap();
        face.on_load(&mut host).unwrap();

        let now = clock.advance().unwrap();
        dispatch(&mut face, &mut host, HostEvent::Tick(now));
        assert!(rx.try_recv().is_ok());

        let reply = horologe_protocol::WeatherReply {
            temperature: 72,
            conditions: "Cloudy",
        }
        .to_dictionary()
        .unwrap();
        dispatch(&mut face, &mut host, HostEvent::SendResult(Ok(())));
        dispatch(&mut face, &mut host, HostEvent::Inbound(reply));

        assert_eq!(host.snapshot(), "72F, Cloudy | 14 | 30");

        face.on_unload(&mut host);
        assert_eq!(host.live_resources(), 0);
    }

    #[tokio::test]
    async fn test_event_loop_stops_when_tick_task_dies() {
        let (events_tx, mut events_rx) = mpsc::channel::<HostEvent>(EVENT_CHANNEL_SIZE);
        let (outbox_tx, _outbox_rx) = mpsc::channel(OUTBOX_CHANNEL_SIZE);
        let clock = SimClock::simulated(WallTime::hm(14, 29).unwrap(), true);
        let mut host = TerminalHost::new(clock.clone(), outbox_tx);
        let mut face = Watchface::new(horologe_core::config::FaceConfig::default()).unwrap();
        face.on_load(&mut host).unwrap();

        // The companion keeps a sender alive, so the queue never closes
        let mut tasks = Tasks {
            tick: tokio::spawn(async { panic!("tick source lost") }),
            companion: tokio::spawn(async move { events_tx.closed().await }),
        };

        let ticks = tokio::time::timeout(
            Duration::from_secs(1),
            event_loop(&mut face, &mut host, &clock, &mut events_rx, &mut tasks, Some(5)),
        )
        .await
        .unwrap();
        assert_eq!(ticks, 0);

        tasks.abort();
        face.on_unload(&mut host);
        assert_eq!(host.live_resources(), 0);
    }
}
