use std::sync::Arc;

use anyhow::Result;

use super::context::AppContext;
use super::geometry::WindowSetup;
use super::{OverlayApp, POLL_INTERVAL};
use crate::models::settings::OverlaySettings;
use crate::services::date_source::DateSource;

impl OverlayApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: OverlaySettings,
        date_source: Arc<dyn DateSource>,
    ) -> Result<Self> {
        let mut context = AppContext::new(date_source)?;
        context.start_countdown();

        let (tray_icon, tray_quit_menu_id) = match Self::create_tray_icon() {
            Some((tray, quit_id)) => (Some(tray), Some(quit_id)),
            None => (None, None),
        };

        log::info!(
            "Overlay ready: corner={:?}, size={}x{}",
            settings.corner,
            settings.width,
            settings.height
        );

        Ok(Self {
            context,
            settings,
            setup_error: None,
            window_setup: WindowSetup::default(),
            tray_icon,
            tray_quit_menu_id,
            exit_requested: false,
        })
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_tray_events(ctx);
        if self.exit_requested {
            return;
        }

        self.clear_setup_error_on_refresh();
        self.apply_window_setup(ctx);
        self.render_overlay(ctx);

        ctx.request_repaint_after(POLL_INTERVAL);
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Shutting down overlay");
        self.context.shutdown();
    }
}
