use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while preparing the target directory or creating fixtures.
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// The name cannot be used as a single path component.
    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The target path is occupied by something other than a directory.
    #[error("not a directory: {} is a {found}", path.display())]
    NotADirectory { path: PathBuf, found: &'static str },

    /// Creating the target directory (or one of its ancestors) failed.
    #[error("failed to create directory `{}`: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating or truncating a fixture file failed.
    #[error("failed to create file `{}`: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
