use std::fmt;

use serde::Serialize;

use super::AppError;

/// The named directories every analysis workspace carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Raw CSV inputs and exports.
    Csv,
    /// Parquet-format dataframes.
    Dataframes,
    /// Notebook artifacts.
    Notebooks,
    /// Hourly heatmap data.
    HourlyHeatmaps,
    /// Rendered full-colour hourly heatmaps.
    HourlyHeatmapsImages,
    /// Rendered greyscale hourly heatmaps.
    HourlyGreyscaleHeatmapsImages,
}

impl Slot {
    /// All slots in provisioning order.
    pub const ALL: [Slot; 6] = [
        Slot::Csv,
        Slot::Dataframes,
        Slot::Notebooks,
        Slot::HourlyHeatmaps,
        Slot::HourlyHeatmapsImages,
        Slot::HourlyGreyscaleHeatmapsImages,
    ];

    /// Directory name relative to the workspace root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Slot::Csv => "csv",
            Slot::Dataframes => "dataframes_parquet_files",
            Slot::Notebooks => "notebooks",
            Slot::HourlyHeatmaps => "hourly_heatmaps",
            Slot::HourlyHeatmapsImages => "hourly_heatmaps_images",
            Slot::HourlyGreyscaleHeatmapsImages => "hourly_greyscale_heatmaps_images",
        }
    }

    /// Short machine key used in exports.
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Csv => "csv",
            Slot::Dataframes => "dataframes",
            Slot::Notebooks => "notebooks",
            Slot::HourlyHeatmaps => "hourly_heatmaps",
            Slot::HourlyHeatmapsImages => "hourly_heatmaps_images",
            Slot::HourlyGreyscaleHeatmapsImages => "hourly_greyscale_heatmaps_images",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Slot::Csv => "csv data",
            Slot::Dataframes => "dataframe store",
            Slot::Notebooks => "notebooks",
            Slot::HourlyHeatmaps => "hourly heatmaps",
            Slot::HourlyHeatmapsImages => "hourly heatmap images",
            Slot::HourlyGreyscaleHeatmapsImages => "hourly greyscale heatmap images",
        }
    }

    /// Parse a slot from its key, directory name, or display name.
    pub fn from_key(name: &str) -> Result<Slot, AppError> {
        let wanted = name.trim().to_lowercase();
        Slot::ALL
            .into_iter()
            .find(|slot| {
                wanted == slot.key() || wanted == slot.dir_name() || wanted == slot.display_name()
            })
            .ok_or_else(|| AppError::UnknownSlot(name.to_string()))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
