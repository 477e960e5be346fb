use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::models::settings::OverlaySettings;
use crate::utils::project_dirs;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Loads and stores [`OverlaySettings`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_project_dirs() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields the defaults.
    pub fn get(&self) -> Result<OverlaySettings> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "No settings file at {}, using defaults",
                    self.path.display()
                );
                return Ok(OverlaySettings::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read settings from {}", self.path.display())
                })
            }
        };

        let settings: OverlaySettings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings from {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Like [`get`](Self::get), but logs failures and falls back to defaults.
    pub fn get_or_default(&self) -> OverlaySettings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                OverlaySettings::default()
            }
        }
    }

    /// Validate and write the settings file, creating its directory.
    pub fn update(&self, settings: &OverlaySettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

pub fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.config_dir().join(SETTINGS_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE_NAME)
    }
}
