//! Countdown model types.
//!
//! A [`TargetDate`] is a plain calendar date with no time component. The
//! remaining-day count shown by the overlay is a [`RemainingDays`], and the
//! single value driving the display is a [`CountdownState`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Month of the fallback target date (June).
pub const FALLBACK_MONTH: u32 = 6;
/// Day of the fallback target date.
pub const FALLBACK_DAY: u32 = 7;

/// A real Gregorian calendar date the countdown counts down to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a target date from its components, rejecting impossible dates
    /// such as February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// June 7th of `year`, used whenever no valid override is available.
    pub fn fallback(year: i32) -> Self {
        // June 7th exists in every year chrono can represent; the minimum
        // representable date is the only way this can fail.
        Self::from_ymd(year, FALLBACK_MONTH, FALLBACK_DAY).unwrap_or(Self(NaiveDate::MIN))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The target normalised to midnight.
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for TargetDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year(), self.month(), self.day())
    }
}

/// Whole days left until the target date. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RemainingDays(u32);

impl RemainingDays {
    pub const ZERO: Self = Self(0);

    pub fn new(days: u32) -> Self {
        Self(days)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RemainingDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value published to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountdownState {
    #[default]
    Loading,
    Error(String),
    Ready(RemainingDays),
}

impl CountdownState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn remaining_days(&self) -> Option<RemainingDays> {
        match self {
            Self::Ready(days) => Some(*days),
            _ => None,
        }
    }
}
