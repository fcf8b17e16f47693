use std::path::Path;
use std::str::FromStr;

use crate::domain::{AppError, Slot, WorkspaceLayout};

/// Output format for the `paths` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathsFormat {
    #[default]
    Text,
    Json,
    Toml,
}

impl FromStr for PathsFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(PathsFormat::Text),
            "json" => Ok(PathsFormat::Json),
            "toml" => Ok(PathsFormat::Toml),
            other => Err(AppError::Render(format!(
                "unsupported format '{other}': must be one of text, json, toml"
            ))),
        }
    }
}

/// Render the layout for stdout. Never touches the filesystem.
pub fn render(layout: &WorkspaceLayout, format: PathsFormat) -> Result<String, AppError> {
    match format {
        PathsFormat::Text => {
            let mut out = format!("root = {}\n", layout.root().display());
            for (slot, path) in layout.entries() {
                out.push_str(&format!("{} = {}\n", slot.key(), path.display()));
            }
            Ok(out)
        }
        PathsFormat::Json => {
            let mut out = serde_json::to_string_pretty(layout)?;
            out.push('\n');
            Ok(out)
        }
        PathsFormat::Toml => Ok(toml::to_string(layout)?),
    }
}

/// Path of the slot named `name`, accepting any spelling `Slot::from_key` knows.
pub fn slot_path<'a>(layout: &'a WorkspaceLayout, name: &str) -> Result<&'a Path, AppError> {
    Ok(layout.path(Slot::from_key(name)?))
}
