//! One refresh cycle: read the override, parse or fall back, compute, publish.

use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use tokio::sync::Mutex;

use super::calculator::days_remaining;
use super::store::{CountdownReceiver, CountdownStore};
use crate::models::countdown::{CountdownState, RemainingDays, TargetDate};
use crate::services::date_source::DateSource;

/// Drives the countdown state. The only writer of its [`CountdownStore`].
pub struct CountdownSource {
    date_source: Arc<dyn DateSource>,
    store: CountdownStore,
    /// Held for the duration of a cycle so cycles never interleave.
    cycle: Mutex<()>,
}

impl CountdownSource {
    pub fn new(date_source: Arc<dyn DateSource>) -> Self {
        Self {
            date_source,
            store: CountdownStore::new(),
            cycle: Mutex::new(()),
        }
    }

    pub fn subscribe(&self) -> CountdownReceiver {
        self.store.subscribe()
    }

    pub fn state(&self) -> CountdownState {
        self.store.current()
    }

    /// Run a refresh cycle for the current local day.
    pub async fn refresh(&self) -> RemainingDays {
        self.refresh_at(Local::now().date_naive()).await
    }

    /// Run a refresh cycle as if `today` were the current local day.
    pub async fn refresh_at(&self, today: NaiveDate) -> RemainingDays {
        let _cycle = self.cycle.lock().await;
        self.store.publish(CountdownState::Loading);

        let target = self.resolve_target(today.year()).await;
        let days = days_remaining(target.midnight(), today.and_time(NaiveTime::MIN));

        log::info!("Countdown refreshed: {} day(s) until {}", days, target);
        self.store.publish(CountdownState::Ready(days));
        days
    }

    /// Target date from the date source, or June 7th of `current_year` when
    /// the source is missing, unreadable or malformed.
    pub async fn resolve_target(&self, current_year: i32) -> TargetDate {
        match self.date_source.read_target_text().await {
            Ok(text) => match text.parse::<TargetDate>() {
                Ok(target) => return target,
                Err(err) => {
                    log::warn!("Invalid date in date source ({err}), using default");
                }
            },
            Err(err) if err.is_not_found() => {
                log::info!("{err}, using default date");
            }
            Err(err) => {
                log::error!("Error reading date source: {err}");
            }
        }

        TargetDate::fallback(current_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::date_source::{DateSourceError, MockDateSource};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn source_returning(
        result: impl Fn() -> Result<String, DateSourceError> + Send + 'static,
    ) -> CountdownSource {
        let mut mock = MockDateSource::new();
        mock.expect_read_target_text().returning(move || result());
        CountdownSource::new(Arc::new(mock))
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn uses_parsed_date_from_source() {
        let source = source_returning(|| Ok("2030/01/01".to_string()));

        let days = source.refresh_at(date(2029, 12, 25)).await;

        assert_eq!(days, RemainingDays::new(7));
        assert_eq!(source.state(), CountdownState::Ready(RemainingDays::new(7)));
    }

    #[tokio::test]
    async fn missing_source_falls_back_to_june_seventh() {
        let source = source_returning(|| {
            Err(DateSourceError::NotFound(PathBuf::from("time.txt")))
        });

        let days = source.refresh_at(date(2027, 6, 1)).await;

        assert_eq!(days, RemainingDays::new(6));
    }

    #[tokio::test]
    async fn malformed_text_falls_back_without_error_state() {
        let source = source_returning(|| Ok("not-a-date".to_string()));

        let days = source.refresh_at(date(2027, 6, 1)).await;

        assert_eq!(days, RemainingDays::new(6));
        assert_eq!(source.state(), CountdownState::Ready(RemainingDays::new(6)));
    }

    #[tokio::test]
    async fn read_failure_falls_back_without_error_state() {
        let source = source_returning(|| {
            Err(DateSourceError::Io {
                path: PathBuf::from("time.txt"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });

        let days = source.refresh_at(date(2027, 6, 1)).await;

        assert_eq!(source.state(), CountdownState::Ready(days));
        assert_eq!(days, RemainingDays::new(6));
    }

    #[tokio::test]
    async fn year_zero_padded_date_is_in_the_past() {
        let source = source_returning(|| Ok("0024/06/07".to_string()));

        let days = source.refresh_at(date(2027, 6, 1)).await;

        assert_eq!(days, RemainingDays::ZERO);
        assert_eq!(source.state(), CountdownState::Ready(RemainingDays::ZERO));
    }

    #[tokio::test]
    async fn fallback_after_june_seventh_is_zero() {
        let source = source_returning(|| {
            Err(DateSourceError::NotFound(PathBuf::from("time.txt")))
        });

        assert_eq!(source.refresh_at(date(2027, 10, 18)).await, RemainingDays::ZERO);
    }

    #[tokio::test]
    async fn subscribers_observe_each_cycle() {
        let source = source_returning(|| Ok("2030/01/01".to_string()));
        let mut receiver = source.subscribe();
        assert_eq!(*receiver.borrow_and_update(), CountdownState::Loading);

        source.refresh_at(date(2029, 12, 31)).await;
        assert_eq!(
            *receiver.borrow_and_update(),
            CountdownState::Ready(RemainingDays::new(1))
        );

        source.refresh_at(date(2030, 1, 1)).await;
        assert_eq!(*receiver.borrow_and_update(), CountdownState::Ready(RemainingDays::ZERO));
    }
}
