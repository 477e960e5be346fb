// Property-based tests for date parsing and day counting

use chrono::{Duration, NaiveDate, NaiveTime};
use days_left::models::countdown::{RemainingDays, TargetDate};
use days_left::services::countdown::{days_remaining, parse_target_date};
use proptest::prelude::*;

proptest! {
    /// Property: any real calendar date written as YYYY/MM/DD parses back to itself
    #[test]
    fn prop_formatted_dates_parse_back(
        year in 1000..9999i32,
        ordinal in 1..=365u32,
    ) {
        let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let text = format!("{}", TargetDate::new(date));

        prop_assert_eq!(parse_target_date(&text).map(|t| t.date()), Some(date));
    }

    /// Property: days past the end of the month never parse
    #[test]
    fn prop_overflowing_days_rejected(
        year in 1970..2100i32,
        month in 1..=12u32,
        day in 29..=31u32,
    ) {
        let valid = NaiveDate::from_ymd_opt(year, month, day).is_some();
        let text = format!("{year}/{month:02}/{day:02}");

        prop_assert_eq!(parse_target_date(&text).is_some(), valid);
    }

    /// Property: the count equals the calendar-day difference, clamped at zero
    #[test]
    fn prop_days_remaining_matches_day_difference(
        start in 0..100_000i64,
        offset in -2_000..2_000i64,
    ) {
        let today = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(start);
        let target = today + Duration::days(offset);

        let days = days_remaining(
            target.and_time(NaiveTime::MIN),
            today.and_time(NaiveTime::MIN),
        );

        prop_assert_eq!(days, RemainingDays::new(offset.max(0) as u32));
    }

    /// Property: any positive sub-day gap rounds up to one day
    #[test]
    fn prop_positive_fraction_rounds_up(seconds in 1..86_400i64) {
        let today = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap().and_time(NaiveTime::MIN);
        let days = days_remaining(today + Duration::seconds(seconds), today);

        prop_assert_eq!(days, RemainingDays::new(1));
    }
}
