//! Shared testing utilities for workdirs CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every slot directory name, in provisioning order.
#[allow(dead_code)]
pub const SLOT_DIRS: [&str; 6] = [
    "csv",
    "dataframes_parquet_files",
    "notebooks",
    "hourly_heatmaps",
    "hourly_heatmaps_images",
    "hourly_greyscale_heatmaps_images",
];

/// Testing harness providing an isolated workspace root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    workspace: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).expect("Failed to create test workspace directory");

        Self { root, workspace }
    }

    /// Workspace root passed to the CLI via `--root`.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Build a command for invoking the compiled `workdirs` binary against the workspace.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("workdirs").expect("Failed to locate workdirs binary");
        cmd.current_dir(self.root.path()).arg("--root").arg(&self.workspace);
        cmd
    }

    /// Path of one slot directory.
    pub fn slot(&self, dir_name: &str) -> PathBuf {
        self.workspace.join(dir_name)
    }

    /// Assert that every slot directory exists.
    pub fn assert_all_slots_exist(&self) {
        for dir in SLOT_DIRS {
            assert!(self.slot(dir).is_dir(), "{dir} should be a directory");
        }
    }

    /// Sorted entries directly under the workspace root.
    pub fn workspace_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.workspace)
            .expect("Failed to read workspace")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
