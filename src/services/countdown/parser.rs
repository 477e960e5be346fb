//! Parsing of `YYYY/MM/DD` target dates.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::models::countdown::TargetDate;

const SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("expected YYYY/MM/DD, found {0} segment(s)")]
    WrongSegmentCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(i64),
    #[error("day {0} is outside 1-31")]
    DayOutOfRange(i64),
    #[error("{year}/{month}/{day} is not a calendar date")]
    NotACalendarDate { year: i64, month: i64, day: i64 },
}

impl FromStr for TargetDate {
    type Err = DateParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = input.trim().split(SEPARATOR).collect();
        let [year, month, day] = segments.as_slice() else {
            return Err(DateParseError::WrongSegmentCount(segments.len()));
        };

        let year = parse_segment(year)?;
        let month = parse_segment(month)?;
        let day = parse_segment(day)?;

        if !(1..=12).contains(&month) {
            return Err(DateParseError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateParseError::DayOutOfRange(day));
        }

        let not_a_date = DateParseError::NotACalendarDate { year, month, day };
        let date = i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, month as u32, day as u32))
            .ok_or_else(|| not_a_date.clone())?;

        // The constructed date must round-trip to exactly the input components.
        if i64::from(date.year()) != year
            || i64::from(date.month()) != month
            || i64::from(date.day()) != day
        {
            return Err(not_a_date);
        }

        Ok(TargetDate::new(date))
    }
}

fn parse_segment(segment: &str) -> Result<i64, DateParseError> {
    let trimmed = segment.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DateParseError::NotANumber(trimmed.to_string()))
}

/// Parse a `YYYY/MM/DD` string, returning `None` for anything malformed or
/// calendar-invalid.
pub fn parse_target_date(input: &str) -> Option<TargetDate> {
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("" ; "empty")]
    #[test_case("   " ; "whitespace only")]
    #[test_case("2024/06" ; "two segments")]
    #[test_case("2024/06/07/01" ; "four segments")]
    #[test_case("2024-06-07" ; "wrong separator")]
    #[test_case("2024/June/07" ; "month name")]
    #[test_case("2024//07" ; "empty month")]
    #[test_case("2024/0/07" ; "month zero")]
    #[test_case("2024/13/07" ; "month thirteen")]
    #[test_case("2024/06/0" ; "day zero")]
    #[test_case("2024/06/32" ; "day thirty two")]
    #[test_case("2024/02/30" ; "february thirtieth")]
    #[test_case("2023/02/29" ; "non leap february")]
    #[test_case("2024/04/31" ; "april thirty first")]
    #[test_case("not-a-date" ; "garbage")]
    fn rejects_invalid_input(input: &str) {
        assert_eq!(parse_target_date(input), None);
    }

    #[test]
    fn parses_valid_date() {
        let parsed = parse_target_date("2024/06/07").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert_eq!(parsed.midnight().time(), chrono::NaiveTime::MIN);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let parsed = parse_target_date("  2030/01/01\n").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
    }

    #[test]
    fn two_digit_years_are_taken_literally() {
        let parsed = parse_target_date("0024/06/07").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(24, 6, 7).unwrap());
        assert_eq!(parsed.year(), 24);
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_target_date("2024/02/29").is_some());
    }

    #[test]
    fn reports_why_input_was_rejected() {
        assert_eq!(
            "2024/06".parse::<TargetDate>(),
            Err(DateParseError::WrongSegmentCount(2))
        );
        assert_eq!(
            "2024/xx/07".parse::<TargetDate>(),
            Err(DateParseError::NotANumber("xx".to_string()))
        );
        assert_eq!(
            "2024/13/07".parse::<TargetDate>(),
            Err(DateParseError::MonthOutOfRange(13))
        );
        assert_eq!(
            "2024/02/30".parse::<TargetDate>(),
            Err(DateParseError::NotACalendarDate {
                year: 2024,
                month: 2,
                day: 30
            })
        );
    }
}
