#[path = "app/context.rs"]
mod context;
mod geometry;
mod lifecycle;
mod tray;

use self::context::AppContext;
use crate::models::countdown::CountdownState;
use crate::models::settings::OverlaySettings;
use egui::{Color32, RichText};
use std::time::Duration;
use tray_icon::menu::MenuId;
use tray_icon::TrayIcon;

/// Message shown when the overlay could not be placed or made click-through.
pub const WINDOW_SETUP_FAILED: &str = "Window setup failed.";
const LOADING_TEXT: &str = "Calculating...";

/// How often the overlay polls for new state and tray events. Input never
/// reaches the window, so nothing else would wake the event loop.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 150);
const ERROR_COLOR: Color32 = Color32::from_rgb(248, 113, 113);
const LABEL_COLOR: Color32 = Color32::from_rgb(209, 213, 219);

pub struct OverlayApp {
    context: AppContext,
    settings: OverlaySettings,
    /// Set when positioning or click-through setup failed; shown instead of
    /// the countdown until the next daily refresh
    setup_error: Option<geometry::SetupError>,
    window_setup: geometry::WindowSetup,
    tray_icon: Option<TrayIcon>,
    tray_quit_menu_id: Option<MenuId>,
    exit_requested: bool,
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl OverlayApp {
    fn render_overlay(&self, ctx: &egui::Context) {
        let frame = egui::Frame::none()
            .fill(PANEL_FILL)
            .rounding(12.0)
            .inner_margin(12.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some(error) = &self.setup_error {
                    ui.label(RichText::new(error.message()).color(ERROR_COLOR));
                    return;
                }

                match self.context.countdown_state() {
                    CountdownState::Ready(days) => {
                        ui.label(
                            RichText::new(days.to_string())
                                .size(self.settings.days_font_size)
                                .strong()
                                .color(Color32::WHITE),
                        );
                        ui.label(RichText::new(&self.settings.label).color(LABEL_COLOR));
                    }
                    CountdownState::Error(message) => {
                        ui.label(RichText::new(message).color(ERROR_COLOR));
                    }
                    CountdownState::Loading => {
                        ui.label(RichText::new(LOADING_TEXT).color(LABEL_COLOR));
                    }
                }
            });
        });
    }
}

/// Native viewport for the overlay: borderless, transparent, click-through
/// and kept out of the taskbar.
pub fn overlay_viewport(settings: &OverlaySettings) -> egui::ViewportBuilder {
    let level = if settings.always_on_top {
        egui::WindowLevel::AlwaysOnTop
    } else {
        egui::WindowLevel::Normal
    };

    egui::ViewportBuilder::default()
        .with_title("Days Left")
        .with_inner_size([settings.width, settings.height])
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(false)
        .with_taskbar(false)
        .with_mouse_passthrough(true)
        .with_window_level(level)
}
