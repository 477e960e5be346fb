use chrono::NaiveDateTime;

use crate::models::countdown::RemainingDays;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from `today` to `target`, rounded up and clamped at zero.
///
/// Both values are expected to be normalised to midnight already; any
/// positive fractional day left over still counts as a full day.
pub fn days_remaining(target: NaiveDateTime, today: NaiveDateTime) -> RemainingDays {
    let millis = target.signed_duration_since(today).num_milliseconds();
    if millis <= 0 {
        return RemainingDays::ZERO;
    }

    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    RemainingDays::new(u32::try_from(days).unwrap_or(u32::MAX))
}
