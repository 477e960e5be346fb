mod service;

pub use service::{resolve_settings_path, SettingsService, SETTINGS_FILE_NAME};
