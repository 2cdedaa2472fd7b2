use std::path::Path;

/// What currently sits at a target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing is there.
    NotFound,
    /// A directory, or a symlink resolving to one.
    Directory,
    /// A regular file, or a symlink resolving to one.
    File,
    /// A symlink whose target does not exist.
    DanglingSymlink,
    /// Anything else: FIFO, socket, device.
    Other,
}

impl PathType {
    /// Classify `path`, following symlinks.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        match std::fs::metadata(p) {
            Ok(md) if md.is_dir() => PathType::Directory,
            Ok(md) if md.is_file() => PathType::File,
            Ok(_) => PathType::Other,
            Err(_) if std::fs::symlink_metadata(p).is_ok() => PathType::DanglingSymlink,
            Err(_) => PathType::NotFound,
        }
    }

    /// Short description used in "not a directory" diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            PathType::NotFound => "nothing",
            PathType::Directory => "directory",
            PathType::File => "regular file",
            PathType::DanglingSymlink => "dangling symlink",
            PathType::Other => "special file",
        }
    }
}
