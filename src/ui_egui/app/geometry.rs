use chrono::{Local, NaiveDate};

use super::OverlayApp;
use crate::models::settings::OverlaySettings;
use crate::utils::monitors::{corner_position, MonitorRect, WindowSetupError};

/// Frames to wait for the backend to report the monitor size before giving up.
const MONITOR_INFO_FRAME_BUDGET: u32 = 30;

/// Progress of the one-off window placement done on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum WindowSetup {
    #[default]
    Pending,
    Waiting { frames: u32 },
    Done,
    Failed,
}

impl WindowSetup {
    /// Advance one frame given the monitor size egui currently reports.
    /// Returns the position to move to once it is known.
    fn step(
        &mut self,
        monitor_size: Option<(f32, f32)>,
        settings: &OverlaySettings,
    ) -> Result<Option<(f32, f32)>, WindowSetupError> {
        let frames = match *self {
            Self::Done | Self::Failed => return Ok(None),
            Self::Pending => 0,
            Self::Waiting { frames } => frames,
        };

        let Some((width, height)) = monitor_size else {
            if frames + 1 >= MONITOR_INFO_FRAME_BUDGET {
                *self = Self::Failed;
                return Err(WindowSetupError::MonitorUnavailable);
            }
            *self = Self::Waiting { frames: frames + 1 };
            return Ok(None);
        };

        match corner_position(
            Some(MonitorRect::from_size(width, height)),
            settings.width,
            settings.height,
            settings.corner,
            settings.margin,
        ) {
            Ok(position) => {
                *self = Self::Done;
                Ok(Some(position))
            }
            Err(err) => {
                *self = Self::Failed;
                Err(err)
            }
        }
    }
}

/// A window setup failure, remembered with the local day it happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SetupError {
    message: String,
    raised_on: NaiveDate,
}

impl SetupError {
    pub(super) fn new(message: impl Into<String>, raised_on: NaiveDate) -> Self {
        Self {
            message: message.into(),
            raised_on,
        }
    }

    pub(super) fn message(&self) -> &str {
        &self.message
    }

    /// A refresh cycle observed on a later day than the failure is the daily
    /// refresh, which resets the error display.
    fn cleared_by_cycle_on(&self, today: NaiveDate) -> bool {
        today > self.raised_on
    }
}

/// Drop `error` if a refresh cycle was observed on a later day than it was
/// raised. Returns true when it was cleared.
fn clear_setup_error_after_refresh(
    error: &mut Option<SetupError>,
    cycle_observed: bool,
    today: NaiveDate,
) -> bool {
    let stale = cycle_observed
        && error
            .as_ref()
            .is_some_and(|error| error.cleared_by_cycle_on(today));
    if stale {
        *error = None;
    }
    stale
}

impl OverlayApp {
    /// Reset a window setup error once the daily refresh has run.
    pub(super) fn clear_setup_error_on_refresh(&mut self) {
        let cycle_observed = self.context.take_state_change().is_some();
        if clear_setup_error_after_refresh(
            &mut self.setup_error,
            cycle_observed,
            Local::now().date_naive(),
        ) {
            log::info!("Daily refresh ran; clearing window setup error");
        }
    }

    /// Pin the window to its corner and make it ignore pointer input.
    /// Runs every frame until placement either succeeds or fails.
    pub(super) fn apply_window_setup(&mut self, ctx: &egui::Context) {
        let monitor_size = ctx.input(|i| i.viewport().monitor_size).map(|size| (size.x, size.y));

        match self.window_setup.step(monitor_size, &self.settings) {
            Ok(Some((x, y))) => {
                log::debug!("Moving overlay to {:?} corner at ({x}, {y})", self.settings.corner);
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(x, y)));
                ctx.send_viewport_cmd(egui::ViewportCommand::MousePassthrough(true));
            }
            Ok(None) => {}
            Err(err) => {
                log::error!("Error setting up window: {err}");
                self.setup_error = Some(SetupError::new(
                    super::WINDOW_SETUP_FAILED,
                    Local::now().date_naive(),
                ));
            }
        }
    }
}
