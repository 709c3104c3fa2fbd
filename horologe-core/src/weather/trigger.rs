//! Refresh boundary check

/// Default refresh interval in minutes
pub const DEFAULT_REFRESH_INTERVAL_MIN: u8 = 30;

/// Check if a tick at `minute` should request fresh weather
///
/// Fires when the minute-of-hour is a multiple of `interval_min`. An
/// interval of 0 disables periodic refresh.
pub fn refresh_due(minute: u8, interval_min: u8) -> bool {
    interval_min != 0 && minute % interval_min == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_interval_boundaries() {
        assert!(refresh_due(0, DEFAULT_REFRESH_INTERVAL_MIN));
        assert!(refresh_due(30, DEFAULT_REFRESH_INTERVAL_MIN));
        assert!(!refresh_due(7, DEFAULT_REFRESH_INTERVAL_MIN));
        assert!(!refresh_due(59, DEFAULT_REFRESH_INTERVAL_MIN));
    }

    #[test]
    fn test_zero_interval_disables() {
        for m in 0..60 {
            assert!(!refresh_due(m, 0));
        }
    }

    #[test]
    fn test_hourly() {
        assert!(refresh_due(0, 60));
        assert!(!refresh_due(30, 60));
    }

    proptest! {
        #[test]
        fn prop_fires_iff_multiple_of_thirty(m in 0u8..60) {
            prop_assert_eq!(refresh_due(m, 30), m == 0 || m == 30);
        }
    }
}
