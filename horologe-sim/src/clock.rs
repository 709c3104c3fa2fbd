//! Wall clock for the simulator
//!
//! Either follows the system clock or runs a simulated clock that advances
//! one minute per tick, so a day of watchface behavior fits in minutes.

use std::sync::{Arc, Mutex};

use chrono::{Local, Timelike};
use horologe_core::clock::{ClockError, WallTime};
use horologe_core::traits::Clock;

#[derive(Debug, Clone)]
enum Source {
    System,
    Simulated(Arc<Mutex<WallTime>>),
}

/// Shared clock handle; clones observe the same time
#[derive(Debug, Clone)]
pub struct SimClock {
    source: Source,
    use_24h: bool,
}

impl SimClock {
    /// Follow the system's local time
    pub fn system(use_24h: bool) -> Self {
        Self {
            source: Source::System,
            use_24h,
        }
    }

    /// Start a simulated clock at `start`
    pub fn simulated(start: WallTime, use_24h: bool) -> Self {
        Self {
            source: Source::Simulated(Arc::new(Mutex::new(start.truncate_to_minute()))),
            use_24h,
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self.source, Source::Simulated(_))
    }

    /// Move a simulated clock to the next minute and return the new time
    ///
    /// A system clock is only read.
    pub fn advance(&self) -> Result<WallTime, ClockError> {
        match &self.source {
            Source::System => system_now(),
            Source::Simulated(time) => {
                let mut time = time.lock().map_err(|_| ClockError::Unavailable)?;
                *time = time.next_minute();
                Ok(*time)
            }
        }
    }
}

impl Clock for SimClock {
    fn now(&self) -> Result<WallTime, ClockError> {
        match &self.source {
            Source::System => system_now(),
            Source::Simulated(time) => time.lock().map(|t| *t).map_err(|_| ClockError::Unavailable),
        }
    }

    fn is_24h_style(&self) -> bool {
        self.use_24h
    }
}

/// Local system time
pub fn system_now() -> Result<WallTime, ClockError> {
    let now = Local::now();
    WallTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_advance_is_shared() {
        let clock = SimClock::simulated(WallTime::new(14, 29, 40).unwrap(), true);
        let other = clock.clone();

        assert_eq!(clock.now().unwrap(), WallTime::hm(14, 29).unwrap());
        assert_eq!(clock.advance().unwrap(), WallTime::hm(14, 30).unwrap());
        assert_eq!(other.now().unwrap(), WallTime::hm(14, 30).unwrap());
    }

    #[test]
    fn test_system_clock_reads() {
        let clock = SimClock::system(false);
        assert!(!clock.is_simulated());
        assert!(!clock.is_24h_style());
        assert!(clock.now().is_ok());
    }
}
