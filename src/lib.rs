//! workdirs: provision the csv, dataframe, notebook, and heatmap directories of an
//! analysis workspace.
//!
//! Call [`init`] (or [`init_at`]) once at startup and pass the returned
//! [`WorkspaceLayout`] to whatever reads or writes files in the workspace.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::{Path, PathBuf};

use adapters::FilesystemStore;
use app::AppContext;
use app::commands::{check, init, paths};

pub use adapters::resolve_root;
pub use app::commands::check::{CheckOutcome, SlotStatus};
pub use app::commands::init::{InitOutcome, SlotReport};
pub use app::commands::paths::PathsFormat;
pub use domain::{AppError, Slot, WorkspaceLayout, derive};
pub use ports::PathState;

// =============================================================================
// Layout API
// =============================================================================

/// Layout rooted at the installation's workspace root.
pub fn layout() -> Result<WorkspaceLayout, AppError> {
    Ok(layout_at(resolve_root()?))
}

/// Layout rooted at `root`. Pure; nothing on disk is read or written.
pub fn layout_at(root: impl Into<PathBuf>) -> WorkspaceLayout {
    WorkspaceLayout::from_root(root)
}

/// Path of one slot, looked up by key, directory name, or display name.
pub fn slot_path<'a>(layout: &'a WorkspaceLayout, name: &str) -> Result<&'a Path, AppError> {
    paths::slot_path(layout, name)
}

/// Render a layout as text, JSON, or TOML.
pub fn render_paths(layout: &WorkspaceLayout, format: PathsFormat) -> Result<String, AppError> {
    paths::render(layout, format)
}

// =============================================================================
// Init Command API
// =============================================================================

/// Resolve the workspace root and ensure every slot directory exists.
pub fn init() -> Result<InitOutcome, AppError> {
    init_at(resolve_root()?)
}

/// Ensure every slot directory exists under `root`.
///
/// Safe to repeat: existing directories are left untouched.
pub fn init_at(root: impl Into<PathBuf>) -> Result<InitOutcome, AppError> {
    let ctx = AppContext::new(FilesystemStore::new(), layout_at(root));
    init::execute(&ctx)
}

// =============================================================================
// Check Command API
// =============================================================================

/// Inspect the slot directories under the installation's workspace root.
pub fn check() -> Result<CheckOutcome, AppError> {
    Ok(check_at(resolve_root()?))
}

/// Inspect the slot directories under `root` without creating anything.
pub fn check_at(root: impl Into<PathBuf>) -> CheckOutcome {
    let ctx = AppContext::new(FilesystemStore::new(), layout_at(root));
    check::execute(&ctx)
}
