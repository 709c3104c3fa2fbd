//! Hour and minute strings
//!
//! Equivalent to `strftime` with `%H` / `%I` for the hour and `%M` for the
//! minute. No other locale handling.

use core::fmt::Write;

use heapless::String;

use super::time::WallTime;

/// Two-character time field
pub type TimeText = String<2>;

/// Formatted time as shown on the hour and minute layers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayTime {
    pub hour: TimeText,
    pub minute: TimeText,
}

impl DisplayTime {
    /// Format a time with the given 12/24-hour preference
    pub fn new(time: &WallTime, use_24h: bool) -> Self {
        Self {
            hour: format_hour(time, use_24h),
            minute: format_minute(time),
        }
    }
}

/// Zero-padded hour: 00-23 in 24-hour style, 01-12 otherwise
pub fn format_hour(time: &WallTime, use_24h: bool) -> TimeText {
    let hour = if use_24h { time.hour() } else { time.hour12() };
    two_digits(hour)
}

/// Zero-padded minute, 00-59
pub fn format_minute(time: &WallTime) -> TimeText {
    two_digits(time.minute())
}

fn two_digits(value: u8) -> TimeText {
    let mut out = String::new();
    // WallTime keeps every field below 100
    let _ = write!(out, "{:02}", value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_24h_afternoon() {
        let t = WallTime::hm(14, 7).unwrap();
        let d = DisplayTime::new(&t, true);
        assert_eq!(d.hour.as_str(), "14");
        assert_eq!(d.minute.as_str(), "07");
    }

    #[test]
    fn test_12h_afternoon() {
        let t = WallTime::hm(14, 7).unwrap();
        assert_eq!(format_hour(&t, false).as_str(), "02");
    }

    #[test]
    fn test_midnight_and_noon() {
        let midnight = WallTime::hm(0, 0).unwrap();
        assert_eq!(format_hour(&midnight, true).as_str(), "00");
        assert_eq!(format_hour(&midnight, false).as_str(), "12");

        let noon = WallTime::hm(12, 0).unwrap();
        assert_eq!(format_hour(&noon, true).as_str(), "12");
        assert_eq!(format_hour(&noon, false).as_str(), "12");
    }

    #[test]
    fn test_idempotent_within_minute() {
        let a = WallTime::new(8, 30, 1).unwrap();
        let b = WallTime::new(8, 30, 59).unwrap();
        assert_eq!(DisplayTime::new(&a, false), DisplayTime::new(&b, false));
    }

    proptest! {
        #[test]
        fn prop_hour_matches_strftime(h in 0u8..24, m in 0u8..60, s in 0u8..60) {
            let t = WallTime::new(h, m, s).unwrap();

            let h24 = format_hour(&t, true);
            prop_assert_eq!(h24.len(), 2);
            prop_assert_eq!(h24.as_str().parse::<u8>().unwrap(), h);

            let h12 = format_hour(&t, false);
            prop_assert_eq!(h12.len(), 2);
            let v: u8 = h12.as_str().parse().unwrap();
            prop_assert!((1..=12).contains(&v));
            prop_assert_eq!(v % 12, h % 12);
        }

        #[test]
        fn prop_minute_two_digits(m in 0u8..60) {
            let t = WallTime::hm(7, m).unwrap();
            let text = format_minute(&t);
            prop_assert_eq!(text.len(), 2);
            prop_assert!(text.chars().all(|c| c.is_ascii_digit()));
            prop_assert_eq!(text.as_str().parse::<u8>().unwrap(), m);
        }
    }
}
