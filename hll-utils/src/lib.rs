//! Shared time helpers for Hullulahti crates.

/// Europe/Helsinki wall-clock functions
pub mod helsinki {
    use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
    use chrono_tz::Europe::Helsinki;
    use chrono_tz::Tz;

    /// First hour of the morning peak window (inclusive).
    pub const MORNING_START_HOUR: u32 = 6;

    /// Last hour of the morning peak window (exclusive).
    pub const MORNING_END_HOUR: u32 = 9;

    /// Current wall-clock time in Helsinki.
    pub fn now() -> DateTime<Tz> {
        Utc::now().with_timezone(&Helsinki)
    }

    /// Whether `now` falls inside the [06:00, 09:00) morning window.
    pub fn in_morning_window(now: &DateTime<Tz>) -> bool {
        (MORNING_START_HOUR..MORNING_END_HOUR).contains(&now.hour())
    }

    /// 06:00 local on the given calendar day, shifted by `days_ahead`.
    fn six_oclock(now: &DateTime<Tz>, days_ahead: u64) -> Option<DateTime<Tz>> {
        let mut date = now.date_naive();
        for _ in 0..days_ahead {
            date = date.succ_opt()?;
        }
        Helsinki
            .with_ymd_and_hms(date.year(), date.month(), date.day(), MORNING_START_HOUR, 0, 0)
            .single()
    }

    /// Whole minutes from `now` until the next 06:00 boundary, or `None`
    /// when `now` is already inside the morning window.
    ///
    /// Before 06:00 the boundary is the same day's 06:00; at or after
    /// 09:00 it rolls to 06:00 the next day. The difference is rounded
    /// half-up to whole minutes.
    pub fn morning_base_offset(now: &DateTime<Tz>) -> Option<u32> {
        if in_morning_window(now) {
            return None;
        }
        let days_ahead = if now.hour() >= MORNING_END_HOUR { 1 } else { 0 };
        let start = six_oclock(now, days_ahead)?;
        let seconds = (start - *now).num_seconds();
        let minutes = (seconds + 30) / 60;
        u32::try_from(minutes).ok()
    }

    /// Bounds of today's morning window: (06:00, 09:00) local, regardless
    /// of whether `now` is inside it. Used as the morning chart's x domain.
    pub fn morning_window(now: &DateTime<Tz>) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let date = now.date_naive();
        let start = Helsinki
            .with_ymd_and_hms(date.year(), date.month(), date.day(), MORNING_START_HOUR, 0, 0)
            .single()?;
        let end = Helsinki
            .with_ymd_and_hms(date.year(), date.month(), date.day(), MORNING_END_HOUR, 0, 0)
            .single()?;
        Some((start, end))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn helsinki_time(h: u32, m: u32, s: u32) -> DateTime<Tz> {
            Helsinki.with_ymd_and_hms(2024, 3, 11, h, m, s).unwrap()
        }

        #[test]
        fn test_inside_window_has_no_offset() {
            assert_eq!(morning_base_offset(&helsinki_time(6, 0, 0)), None);
            assert_eq!(morning_base_offset(&helsinki_time(8, 0, 0)), None);
            assert_eq!(morning_base_offset(&helsinki_time(8, 59, 59)), None);
        }

        #[test]
        fn test_before_window_targets_same_day() {
            assert_eq!(morning_base_offset(&helsinki_time(5, 0, 0)), Some(60));
            assert_eq!(morning_base_offset(&helsinki_time(0, 30, 0)), Some(330));
        }

        #[test]
        fn test_after_window_rolls_to_next_day() {
            // 10:00 -> 20 hours until tomorrow 06:00
            assert_eq!(morning_base_offset(&helsinki_time(10, 0, 0)), Some(1200));
            // 09:00 exactly is already outside the window
            assert_eq!(morning_base_offset(&helsinki_time(9, 0, 0)), Some(1260));
        }

        #[test]
        fn test_offset_rounds_half_up() {
            // 29 minutes 30 seconds remaining rounds to 30
            assert_eq!(morning_base_offset(&helsinki_time(5, 30, 30)), Some(30));
            // 29 minutes 29 seconds remaining rounds to 29
            assert_eq!(morning_base_offset(&helsinki_time(5, 30, 31)), Some(29));
        }

        #[test]
        fn test_morning_window_bounds() {
            let (start, end) = morning_window(&helsinki_time(12, 0, 0)).unwrap();
            assert_eq!(start.hour(), 6);
            assert_eq!(end.hour(), 9);
            assert_eq!((end - start).num_minutes(), 180);
        }
    }
}
