use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Handle, Runtime};

use crate::models::countdown::CountdownState;
use crate::services::countdown::{CountdownReceiver, CountdownSource, RefreshScheduler};
use crate::services::date_source::DateSource;

const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// Countdown runtime, source and schedule shared by the app modules.
///
/// Every refresh cycle runs on a single runtime worker thread; the UI thread
/// only reads the published state through `receiver`.
pub struct AppContext {
    runtime: Option<Runtime>,
    handle: Handle,
    source: Arc<CountdownSource>,
    receiver: CountdownReceiver,
    scheduler: RefreshScheduler,
}

impl AppContext {
    pub fn new(date_source: Arc<dyn DateSource>) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("days-left-countdown")
            .enable_all()
            .build()
            .context("failed to start countdown runtime")?;
        let handle = runtime.handle().clone();

        let source = Arc::new(CountdownSource::new(date_source));
        let receiver = source.subscribe();

        Ok(Self {
            runtime: Some(runtime),
            handle,
            source,
            receiver,
            scheduler: RefreshScheduler::new(),
        })
    }

    /// Run the first refresh cycle now and arm the daily schedule.
    pub fn start_countdown(&mut self) {
        let source = self.source.clone();
        self.handle.spawn(async move {
            source.refresh().await;
        });

        let source = self.source.clone();
        self.scheduler.start_daily(&self.handle, move || {
            let source = source.clone();
            async move {
                source.refresh().await;
            }
        });
    }

    pub fn countdown_state(&self) -> CountdownState {
        self.receiver.borrow().clone()
    }

    /// The published state, if it changed since the last call. Any change
    /// means a refresh cycle ran.
    pub fn take_state_change(&mut self) -> Option<CountdownState> {
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    /// Stop the schedule and tear the runtime down. Idempotent.
    pub fn shutdown(&mut self) {
        self.scheduler.stop();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
            log::info!("Countdown runtime shut down");
        }
    }
}

impl Drop for AppContext {
    fn drop(&mut self) {
        self.shutdown();
    }
}
