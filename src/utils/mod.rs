pub mod date;
pub mod monitors;

use directories::ProjectDirs;

/// Platform directories for config (`settings.toml`) and local data (`time.txt`).
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "DaysLeft", "DaysLeft")
}
