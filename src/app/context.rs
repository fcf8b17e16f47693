use crate::domain::WorkspaceLayout;
use crate::ports::DirectoryStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DirectoryStore> {
    store: S,
    layout: WorkspaceLayout,
}

impl<S: DirectoryStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S, layout: WorkspaceLayout) -> Self {
        Self { store, layout }
    }

    /// Get a reference to the directory store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the resolved layout.
    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }
}
