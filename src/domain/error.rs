use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for workdirs operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The running installation could not be located on disk.
    #[error("Cannot locate installation: {0}")]
    Installation(String),

    /// The installation anchor is too shallow to ascend to a workspace root.
    #[error(
        "Cannot resolve workspace root: '{}' has fewer than {levels} parent directories",
        .anchor.display()
    )]
    RootUnresolvable { anchor: PathBuf, levels: usize },

    /// A non-directory occupies a slot path.
    #[error("'{}' exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Directory creation failed for a reason other than a collision.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Slot name did not match any known slot.
    #[error(
        "Unknown slot '{0}': must be one of csv, dataframes, notebooks, hourly_heatmaps, hourly_heatmaps_images, hourly_greyscale_heatmaps_images"
    )]
    UnknownSlot(String),

    /// Layout could not be rendered in the requested format.
    #[error("Failed to render paths: {0}")]
    Render(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Render(err.to_string())
    }
}
