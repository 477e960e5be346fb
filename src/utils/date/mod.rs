// Date utility functions

use chrono::{DateTime, Days, Duration, NaiveDateTime, NaiveTime, TimeZone};
use std::time::Duration as StdDuration;

/// Local time of day at which the daily refresh fires (00:01:00).
pub const REFRESH_TIME: NaiveTime = match NaiveTime::from_hms_opt(0, 1, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Longest stretch of skipped local time searched past [`REFRESH_TIME`].
const MAX_GAP_MINUTES: u32 = 24 * 60;

/// Fixed period between refreshes after the first midnight boundary.
pub const REFRESH_PERIOD: StdDuration = StdDuration::from_secs(24 * 60 * 60);

/// `date`'s calendar day at 00:00, as a wall-clock value.
pub fn start_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> NaiveDateTime {
    date.date_naive().and_time(NaiveTime::MIN)
}

/// Tomorrow at [`REFRESH_TIME`] in `now`'s time zone.
///
/// If that wall-clock time falls inside a DST gap the first valid minute
/// after the gap is used; if it is ambiguous the earlier instant wins.
pub fn next_refresh_at<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tomorrow = now
        .date_naive()
        .checked_add_days(Days::new(1))
        .unwrap_or(now.date_naive());
    let mut wall_clock = tomorrow.and_time(REFRESH_TIME);

    for _ in 0..MAX_GAP_MINUTES {
        if let Some(instant) = now.timezone().from_local_datetime(&wall_clock).earliest() {
            return instant;
        }
        wall_clock += Duration::minutes(1);
    }

    log::warn!(
        "No valid local time near {}; scheduling next refresh a full period from now",
        wall_clock
    );
    now.clone() + Duration::days(1)
}

/// Time left between `now` and the next refresh boundary.
pub fn delay_until_next_refresh<Tz: TimeZone>(now: &DateTime<Tz>) -> StdDuration {
    (next_refresh_at(now) - now.clone())
        .to_std()
        .unwrap_or(StdDuration::ZERO)
}
