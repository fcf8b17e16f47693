//! Workspace root arithmetic.
//!
//! The root is found by walking up a fixed number of levels from an anchor
//! inside the installation; slot paths are joined onto it verbatim.

use std::path::{Path, PathBuf};

use super::AppError;

/// Levels to ascend from the installation anchor: the anchor itself, then its folder.
pub const ROOT_ASCENT: usize = 2;

/// Walk `levels` parents up from `anchor`.
pub fn ascend(anchor: &Path, levels: usize) -> Result<PathBuf, AppError> {
    let mut current = anchor;
    for _ in 0..levels {
        current = current
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| AppError::RootUnresolvable { anchor: anchor.to_path_buf(), levels })?;
    }
    Ok(current.to_path_buf())
}

/// Join a slot segment onto the root.
pub fn derive(root: &Path, relative_name: &str) -> PathBuf {
    root.join(relative_name)
}
