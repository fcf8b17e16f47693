mod directory_store;

pub use directory_store::{DirectoryStore, PathState};
