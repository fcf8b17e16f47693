use std::path::{Path, PathBuf};

use serde::Serialize;

use super::Slot;
use super::root::derive;

/// Resolved absolute paths for every slot of one workspace.
///
/// Built once at startup and handed to whoever needs a directory; it never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    pub csv: PathBuf,
    pub dataframes: PathBuf,
    pub notebooks: PathBuf,
    pub hourly_heatmaps: PathBuf,
    pub hourly_heatmaps_images: PathBuf,
    pub hourly_greyscale_heatmaps_images: PathBuf,
}

impl WorkspaceLayout {
    /// Derive every slot path from `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            csv: derive(&root, Slot::Csv.dir_name()),
            dataframes: derive(&root, Slot::Dataframes.dir_name()),
            notebooks: derive(&root, Slot::Notebooks.dir_name()),
            hourly_heatmaps: derive(&root, Slot::HourlyHeatmaps.dir_name()),
            hourly_heatmaps_images: derive(&root, Slot::HourlyHeatmapsImages.dir_name()),
            hourly_greyscale_heatmaps_images: derive(
                &root,
                Slot::HourlyGreyscaleHeatmapsImages.dir_name(),
            ),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for a single slot.
    pub fn path(&self, slot: Slot) -> &Path {
        match slot {
            Slot::Csv => &self.csv,
            Slot::Dataframes => &self.dataframes,
            Slot::Notebooks => &self.notebooks,
            Slot::HourlyHeatmaps => &self.hourly_heatmaps,
            Slot::HourlyHeatmapsImages => &self.hourly_heatmaps_images,
            Slot::HourlyGreyscaleHeatmapsImages => &self.hourly_greyscale_heatmaps_images,
        }
    }

    /// `(slot, path)` pairs in provisioning order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, &Path)> {
        Slot::ALL.into_iter().map(|slot| (slot, self.path(slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slot_is_direct_child_of_root() {
        let layout = WorkspaceLayout::from_root("/workspace");
        for (slot, path) in layout.entries() {
            assert_eq!(path.parent(), Some(Path::new("/workspace")));
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(slot.dir_name()));
        }
    }

    #[test]
    fn entries_follow_slot_order() {
        let layout = WorkspaceLayout::from_root("/workspace");
        let slots: Vec<Slot> = layout.entries().map(|(slot, _)| slot).collect();
        assert_eq!(slots, Slot::ALL.to_vec());
    }

    #[test]
    fn fields_match_expected_paths() {
        let layout = WorkspaceLayout::from_root("/workspace");
        assert_eq!(layout.root(), Path::new("/workspace"));
        assert_eq!(layout.csv, PathBuf::from("/workspace/csv"));
        assert_eq!(layout.dataframes, PathBuf::from("/workspace/dataframes_parquet_files"));
        assert_eq!(
            layout.hourly_greyscale_heatmaps_images,
            PathBuf::from("/workspace/hourly_greyscale_heatmaps_images")
        );
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(WorkspaceLayout::from_root("/a/b"), WorkspaceLayout::from_root("/a/b"));
    }
}
