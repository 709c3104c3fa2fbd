//! Wall-clock time of day

/// Errors reading or constructing a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Host clock could not be read
    Unavailable,
    /// Hour, minute or second out of range
    OutOfRange,
}

/// Local time of day, validated on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    /// Build a time; hour 0-23, minute 0-59, second 0-59
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::OutOfRange);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Build a time on a minute boundary
    pub const fn hm(hour: u8, minute: u8) -> Result<Self, ClockError> {
        Self::new(hour, minute, 0)
    }

    /// Hour in 24-hour form (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Hour in 12-hour form (1-12)
    pub const fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Same time with the seconds dropped
    pub const fn truncate_to_minute(&self) -> Self {
        Self {
            hour: self.hour,
            minute: self.minute,
            second: 0,
        }
    }

    /// The following minute, wrapping at midnight
    pub const fn next_minute(&self) -> Self {
        let total = (self.hour as u16 * 60 + self.minute as u16 + 1) % (24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
            second: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        assert!(WallTime::new(0, 0, 0).is_ok());
        assert!(WallTime::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(WallTime::new(24, 0, 0), Err(ClockError::OutOfRange));
        assert_eq!(WallTime::new(0, 60, 0), Err(ClockError::OutOfRange));
        assert_eq!(WallTime::new(0, 0, 60), Err(ClockError::OutOfRange));
    }

    #[test]
    fn test_hour12() {
        let cases = [(0, 12), (1, 1), (11, 11), (12, 12), (13, 1), (23, 11)];
        for (h24, h12) in cases {
            assert_eq!(WallTime::hm(h24, 0).unwrap().hour12(), h12);
        }
    }

    #[test]
    fn test_next_minute_wraps() {
        let t = WallTime::new(23, 59, 30).unwrap();
        assert_eq!(t.next_minute(), WallTime::hm(0, 0).unwrap());

        let t = WallTime::hm(9, 59).unwrap();
        assert_eq!(t.next_minute(), WallTime::hm(10, 0).unwrap());
    }

    #[test]
    fn test_truncate_to_minute() {
        let t = WallTime::new(14, 7, 42).unwrap();
        assert_eq!(t.truncate_to_minute(), WallTime::hm(14, 7).unwrap());
    }
}
