use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{DirectoryStore, PathState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Dir,
    File,
}

/// In-memory directory store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirectoryStore {
    entries: Arc<Mutex<HashMap<PathBuf, Entry>>>,
}

impl MemoryDirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a regular file at `path`.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.entries.lock().unwrap().insert(path.into(), Entry::File);
        self
    }

    /// Number of directories currently recorded.
    pub fn dir_count(&self) -> usize {
        self.entries.lock().unwrap().values().filter(|e| **e == Entry::Dir).count()
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut entries = self.entries.lock().unwrap();

        if entries.get(path) == Some(&Entry::File) {
            return Err(AppError::NotADirectory(path.to_path_buf()));
        }
        let blocker = path.ancestors().skip(1).find(|a| entries.get(*a) == Some(&Entry::File));
        if let Some(blocker) = blocker {
            return Err(AppError::CreateDir {
                path: path.to_path_buf(),
                source: std::io::Error::other(format!("{} is a file", blocker.display())),
            });
        }

        for ancestor in path.ancestors() {
            entries.insert(ancestor.to_path_buf(), Entry::Dir);
        }
        Ok(())
    }

    fn inspect(&self, path: &Path) -> PathState {
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::Dir) => PathState::Directory,
            Some(Entry::File) => PathState::NotADirectory,
            None => PathState::Missing,
        }
    }
}
