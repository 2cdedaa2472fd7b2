use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::fs_op::error::FilesystemError;
use crate::fs_op::stat::PathType;

/// Check that `name` can be used as a single path component on Unix.
///
/// Rejects empty names, `.` and `..`, and names containing `/` or NUL.
/// Everything else (control characters, combining marks, shell
/// metacharacters) is accepted as-is.
pub fn check_name(name: &str) -> Result<(), FilesystemError> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name refers to a directory entry")
    } else if name.contains('/') {
        Some("name contains the path separator '/'")
    } else if name.contains('\0') {
        Some("name contains a NUL byte")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(FilesystemError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Make sure `path` is a directory, creating it and any missing parents.
///
/// An existing directory (or symlink to one) is left untouched. Anything
/// else at `path`, including a dangling symlink, is a `NotADirectory` error
/// naming what was found.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<(), FilesystemError> {
    let p = path.as_ref();
    match PathType::of(p) {
        PathType::Directory => {
            debug!("directory {} already exists", p.display());
            Ok(())
        }
        PathType::NotFound => {
            std::fs::create_dir_all(p).map_err(|source| FilesystemError::CreateDir {
                path: p.to_path_buf(),
                source,
            })?;
            debug!("created directory {}", p.display());
            Ok(())
        }
        found => Err(FilesystemError::NotADirectory {
            path: p.to_path_buf(),
            found: found.describe(),
        }),
    }
}

/// Create (or truncate) the zero-byte file `directory/name` and return its path.
///
/// Each call is independent: a failure leaves files created by earlier calls
/// in place.
pub fn create_empty_file<P: AsRef<Path>>(directory: P, name: &str) -> Result<PathBuf, FilesystemError> {
    check_name(name)?;
    let path = directory.as_ref().join(name);
    File::create(&path).map_err(|source| FilesystemError::CreateFile {
        path: path.clone(),
        source,
    })?;
    debug!("created {:?}", path);
    Ok(path)
}
