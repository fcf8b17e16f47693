//! Directory provisioning port.
//!
//! Commands depend on this trait rather than `std::fs` so provisioning logic
//! can run against an in-memory store in tests.

use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

/// What currently occupies a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathState {
    Missing,
    Directory,
    NotADirectory,
    /// Something may exist but could not be examined (permissions, symlink loops).
    Unreadable,
}

/// Port for creating and inspecting directories.
pub trait DirectoryStore {
    /// Create `path` and any missing parents.
    ///
    /// Succeeds when the directory already exists, including when another
    /// process created it concurrently. Fails with `AppError::NotADirectory`
    /// when something other than a directory occupies `path`, leaving it intact.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Report what occupies `path` without modifying anything.
    fn inspect(&self, path: &Path) -> PathState;
}
