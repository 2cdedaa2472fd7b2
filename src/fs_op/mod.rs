//! Filesystem helpers: directory preparation, fixture creation and path
//! classification.

pub mod create;
pub mod error;
pub mod stat;

pub use create::{check_name, create_empty_file, ensure_directory};
pub use error::FilesystemError;
