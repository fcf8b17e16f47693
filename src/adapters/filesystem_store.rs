use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::{DirectoryStore, PathState};

/// `std::fs`-backed directory store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemStore;

impl FilesystemStore {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryStore for FilesystemStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        match fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            // Lost a race with another process creating the same directory.
            Err(_) if path.is_dir() => Ok(()),
            Err(_) if path.exists() => Err(AppError::NotADirectory(path.to_path_buf())),
            Err(source) => Err(AppError::CreateDir { path: path.to_path_buf(), source }),
        }
    }

    fn inspect(&self, path: &Path) -> PathState {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathState::Directory,
            Ok(_) => PathState::NotADirectory,
            Err(e) if e.kind() == ErrorKind::NotFound => PathState::Missing,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot inspect");
                PathState::Unreadable
            }
        }
    }
}
