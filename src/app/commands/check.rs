use std::path::PathBuf;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::Slot;
use crate::ports::{DirectoryStore, PathState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub slot: Slot,
    pub path: PathBuf,
    pub state: PathState,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub slots: Vec<SlotStatus>,
    pub exit_code: i32,
}

impl CheckOutcome {
    /// Slots that are not usable directories.
    pub fn problems(&self) -> impl Iterator<Item = &SlotStatus> {
        self.slots.iter().filter(|s| s.state != PathState::Directory)
    }
}

/// Inspect every slot without creating anything.
pub fn execute<S: DirectoryStore>(ctx: &AppContext<S>) -> CheckOutcome {
    let slots: Vec<SlotStatus> = ctx
        .layout()
        .entries()
        .map(|(slot, path)| SlotStatus {
            slot,
            path: path.to_path_buf(),
            state: ctx.store().inspect(path),
        })
        .collect();

    let mut outcome = CheckOutcome { slots, exit_code: 0 };
    let problems = outcome.problems().count();
    if problems > 0 {
        tracing::warn!(problems, "workspace directories incomplete");
        outcome.exit_code = 1;
    }
    outcome
}
