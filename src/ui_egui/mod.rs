mod app;

pub use app::{overlay_viewport, OverlayApp, WINDOW_SETUP_FAILED};
