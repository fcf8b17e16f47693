//! Locate the workspace root from the running installation.

use std::path::PathBuf;

use crate::domain::{AppError, ROOT_ASCENT, ascend};

/// Resolve the workspace root from the location of the running executable.
///
/// The executable path is canonicalized and then walked up `ROOT_ASCENT`
/// levels, so a binary at `<root>/bin/workdirs` yields `<root>`. The result
/// does not depend on the current working directory.
pub fn resolve_root() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe()
        .map_err(|e| AppError::Installation(format!("current executable unknown: {e}")))?;
    let anchor = exe.canonicalize().map_err(|e| {
        AppError::Installation(format!("cannot canonicalize '{}': {e}", exe.display()))
    })?;

    let root = ascend(&anchor, ROOT_ASCENT)?;
    tracing::debug!(anchor = %anchor.display(), root = %root.display(), "resolved workspace root");
    Ok(root)
}
