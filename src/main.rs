// Days Left overlay
// Main entry point

use std::sync::Arc;

use anyhow::anyhow;
use days_left::services::date_source::AppDataDateSource;
use days_left::services::settings::SettingsService;
use days_left::ui_egui::{overlay_viewport, OverlayApp};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Days Left overlay");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.get_or_default();

    let date_source = AppDataDateSource::from_project_dirs();
    log::info!("Target date file: {}", date_source.path().display());

    let options = eframe::NativeOptions {
        viewport: overlay_viewport(&settings),
        ..Default::default()
    };

    eframe::run_native(
        "Days Left",
        options,
        Box::new(
            move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                let app = OverlayApp::new(cc, settings, Arc::new(date_source))?;
                Ok(Box::new(app))
            },
        ),
    )
    .map_err(|e| anyhow!("Overlay exited with an error: {e}"))
}
