//! Daily refresh scheduling.
//!
//! The first refresh is anchored to 00:01 local time tomorrow; after that the
//! action repeats on a fixed 24 hour period. The period is not re-anchored,
//! so the local trigger time drifts by an hour across a DST transition.

use std::future::Future;
use std::time::Duration;

use chrono::Local;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::utils::date::{delay_until_next_refresh, REFRESH_PERIOD};

#[derive(Debug, Default)]
enum ScheduleState {
    #[default]
    Idle,
    Scheduled(JoinHandle<()>),
}

/// Owns the single background task that re-runs the refresh action.
#[derive(Debug, Default)]
pub struct RefreshScheduler {
    state: ScheduleState,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` for the next local 00:01 and every 24 hours after.
    pub fn start_daily<F, Fut>(&mut self, runtime: &Handle, action: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let first_delay = delay_until_next_refresh(&Local::now());
        self.start(runtime, first_delay, REFRESH_PERIOD, action);
    }

    /// Run `action` once after `first_delay`, then every `period`.
    ///
    /// Each run completes before the next one is considered. Any schedule
    /// that is already active is cancelled first.
    pub fn start<F, Fut>(&mut self, runtime: &Handle, first_delay: Duration, period: Duration, mut action: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.stop();

        log::debug!(
            "Arming countdown refresh in {}s, then every {}s",
            first_delay.as_secs(),
            period.as_secs()
        );

        let task = runtime.spawn(async move {
            time::sleep(first_delay).await;
            action().await;

            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                action().await;
            }
        });

        self.state = ScheduleState::Scheduled(task);
    }

    pub fn is_scheduled(&self) -> bool {
        match &self.state {
            ScheduleState::Idle => false,
            ScheduleState::Scheduled(task) => !task.is_finished(),
        }
    }

    /// Cancel whichever refresh is pending. Safe to call repeatedly and
    /// before anything was scheduled.
    pub fn stop(&mut self) {
        if let ScheduleState::Scheduled(task) = std::mem::take(&mut self.state) {
            task.abort();
            log::info!("Countdown refresh schedule stopped");
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
