// Check-in scheduling: selector option sets and the date-change guard
use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

use crate::error::ReservationError;

pub const ROOM_QUANTITY_OPTIONS: RangeInclusive<u32> = 1..=5;
pub const NIGHT_OPTIONS: RangeInclusive<u32> = 1..=5;
pub const CHECK_IN_HOURS: RangeInclusive<u32> = 0..=23;
pub const CHECK_IN_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Builds a check-in time from the hour and minute selectors.
///
/// Only quarter-hour minutes are offered, anything else is rejected.
pub fn check_in_time(hour: u32, minute: u32) -> Result<NaiveTime, ReservationError> {
    if !CHECK_IN_HOURS.contains(&hour) || !CHECK_IN_MINUTES.contains(&minute) {
        return Err(ReservationError::InvalidCheckInTime { hour, minute });
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or(ReservationError::InvalidCheckInTime { hour, minute })
}

/// Rejects a check-in date strictly earlier than `today`.
pub fn guard_check_in_date(
    candidate: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ReservationError> {
    if candidate < today {
        warn!(%candidate, %today, "Rejected check-in date in the past");
        return Err(ReservationError::CheckInDateInPast {
            selected: candidate,
            today,
        });
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(0, 0; "#1 Midnight")]
    #[test_case(9, 15; "#2 Morning quarter")]
    #[test_case(23, 45; "#3 Last slot of the day")]
    fn test_check_in_time_accepts_selector_values(hour: u32, minute: u32) {
        let time = check_in_time(hour, minute).unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
    }

    #[test_case(24, 0; "#1 Hour out of range")]
    #[test_case(10, 10; "#2 Minute not on a quarter")]
    #[test_case(10, 60; "#3 Minute out of range")]
    fn test_check_in_time_rejects_other_values(hour: u32, minute: u32) {
        assert!(matches!(
            check_in_time(hour, minute),
            Err(ReservationError::InvalidCheckInTime { .. })
        ));
    }

    #[test]
    fn test_every_offered_slot_is_valid() {
        for hour in CHECK_IN_HOURS {
            for minute in CHECK_IN_MINUTES {
                assert!(check_in_time(hour, minute).is_ok());
            }
        }
    }

    #[test]
    fn test_guard_accepts_today_and_later() {
        let today = date(2024, 1, 10);
        assert_eq!(guard_check_in_date(today, today).unwrap(), today);
        assert_eq!(
            guard_check_in_date(date(2024, 2, 1), today).unwrap(),
            date(2024, 2, 1)
        );
    }

    #[test]
    fn test_guard_rejects_past_dates() {
        let today = date(2024, 1, 10);
        let result = guard_check_in_date(date(2024, 1, 9), today);
        match result {
            Err(ReservationError::CheckInDateInPast { selected, today: t }) => {
                assert_eq!(selected, date(2024, 1, 9));
                assert_eq!(t, today);
            }
            other => panic!("Expected CheckInDateInPast, got {:?}", other),
        }
    }

    #[test]
    fn test_option_ranges() {
        assert_eq!(ROOM_QUANTITY_OPTIONS.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(NIGHT_OPTIONS.count(), 5);
        assert_eq!(CHECK_IN_HOURS.count(), 24);
    }
}
