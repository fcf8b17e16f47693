use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{AppError, Slot, WorkspaceLayout};
use crate::ports::{DirectoryStore, PathState};

/// Result of provisioning one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotReport {
    pub slot: Slot,
    pub path: PathBuf,
    /// `false` when the directory was already present.
    ///
    /// Taken from an inspection before creation, so two processes racing on
    /// the same root may both report `true` for one directory.
    pub created: bool,
}

/// Result of provisioning a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct InitOutcome {
    pub layout: WorkspaceLayout,
    pub slots: Vec<SlotReport>,
}

impl InitOutcome {
    /// Number of directories this run created.
    pub fn created_count(&self) -> usize {
        self.slots.iter().filter(|r| r.created).count()
    }
}

/// Execute the init command.
///
/// Ensures every slot directory exists, touching no other path. Stops at the
/// first failure.
pub fn execute<S: DirectoryStore>(ctx: &AppContext<S>) -> Result<InitOutcome, AppError> {
    let layout = ctx.layout();
    let mut slots = Vec::with_capacity(Slot::ALL.len());

    for (slot, path) in layout.entries() {
        let created = ctx.store().inspect(path) == PathState::Missing;
        ctx.store().ensure_dir(path)?;

        if created {
            tracing::debug!(slot = slot.key(), path = %path.display(), "created");
        } else {
            tracing::debug!(slot = slot.key(), path = %path.display(), "present");
        }
        slots.push(SlotReport { slot, path: path.to_path_buf(), created });
    }

    let outcome = InitOutcome { layout: layout.clone(), slots };
    tracing::info!(
        root = %layout.root().display(),
        created = outcome.created_count(),
        "workspace directories ready"
    );
    Ok(outcome)
}
