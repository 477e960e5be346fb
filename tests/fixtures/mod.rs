// Test fixtures - reusable test data
// Provides consistent dates and date-file setups across test files

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Sample dates for testing
pub mod dates {
    use chrono::NaiveDate;

    /// Returns Jan 1, 2030
    pub fn new_year_2030() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
    }

    /// Returns Dec 1, 2029
    pub fn dec_1_2029() -> NaiveDate {
        NaiveDate::from_ymd_opt(2029, 12, 1).unwrap()
    }

    /// Returns Feb 29, 2028 (leap year)
    pub fn leap_day_2028() -> NaiveDate {
        NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
    }

    /// Returns May 8, 2027, thirty days before the fallback target
    pub fn may_8_2027() -> NaiveDate {
        NaiveDate::from_ymd_opt(2027, 5, 8).unwrap()
    }
}

/// A temporary local-data directory, optionally holding a `time.txt`.
pub struct DateFileDir {
    pub dir: TempDir,
}

impl DateFileDir {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_contents(contents: &str) -> Self {
        let fixture = Self::empty();
        std::fs::write(fixture.date_file(), contents).unwrap();
        fixture
    }

    pub fn date_file(&self) -> PathBuf {
        self.dir.path().join("time.txt")
    }
}
