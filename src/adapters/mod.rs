pub mod filesystem_store;
pub mod installation;
#[cfg(test)]
pub mod memory_directory_store;

pub use filesystem_store::FilesystemStore;
pub use installation::resolve_root;
#[cfg(test)]
pub use memory_directory_store::MemoryDirectoryStore;
