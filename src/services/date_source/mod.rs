//! Read capability for the persisted target-date override.
//!
//! The override lives in a single plain-text file, `time.txt`, inside the
//! application's local data directory. Its absence is the normal first-run
//! condition.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::utils::project_dirs;

#[cfg(test)]
use mockall::automock;

/// File name of the persisted target date.
pub const DATE_FILE_NAME: &str = "time.txt";

#[derive(Debug, Error)]
pub enum DateSourceError {
    #[error("date source {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read date source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DateSourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Anything able to hand back the raw target-date text.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DateSource: Send + Sync {
    async fn read_target_text(&self) -> Result<String, DateSourceError>;
}

/// Reads the target date from a file on disk, by default
/// `<local data dir>/time.txt`.
#[derive(Debug, Clone)]
pub struct AppDataDateSource {
    path: PathBuf,
}

impl AppDataDateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source rooted in the platform local data directory. Falls back to the
    /// working directory when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        Self::new(resolve_date_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DateSource for AppDataDateSource {
    async fn read_target_text(&self) -> Result<String, DateSourceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(DateSourceError::NotFound(self.path.clone()))
            }
            Err(source) => Err(DateSourceError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

pub fn resolve_date_file_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_local_dir().join(DATE_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; looking for {DATE_FILE_NAME} in current dir");
        PathBuf::from(DATE_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn reads_file_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DATE_FILE_NAME);
        std::fs::write(&path, "2030/01/01\n").unwrap();

        let source = AppDataDateSource::new(&path);
        assert_eq!(source.read_target_text().await.unwrap(), "2030/01/01\n");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = AppDataDateSource::new(dir.path().join(DATE_FILE_NAME));

        let err = source.read_target_text().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn directory_in_place_of_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = AppDataDateSource::new(dir.path());

        let err = source.read_target_text().await.unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn default_path_ends_with_date_file() {
        let source = AppDataDateSource::from_project_dirs();
        assert!(source.path().ends_with(DATE_FILE_NAME));
    }
}
