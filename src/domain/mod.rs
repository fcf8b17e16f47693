pub mod error;
pub mod layout;
pub mod root;
pub mod slot;

pub use error::AppError;
pub use layout::WorkspaceLayout;
pub use root::{ROOT_ASCENT, ascend, derive};
pub use slot::Slot;
