//! Writing generated pages and mirrored directories to disk

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{MirrorError, MirrorResult};

/// Permission bits for created directories (rwxr-xr-x)
pub const DIR_MODE: u32 = 0o755;

/// Permission bits for newly created pages, subject to the process umask
pub const FILE_MODE: u32 = 0o755;

/// Outcome of [`ensure_dir`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existed,
}

/// Make sure `path` exists as a directory.
///
/// Only the last path component is created; a missing parent is an error,
/// as is a non-directory already sitting at `path`.
pub fn ensure_dir(path: &Path) -> MirrorResult<DirStatus> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => return Ok(DirStatus::Existed),
        Ok(_) => {
            let source = io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory");
            return Err(MirrorError::create_dir(path, source));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(MirrorError::create_dir(path, e)),
    }

    match dir_builder().create(path) {
        Ok(()) => Ok(DirStatus::Created),
        // Lost a race with another creator; still a directory, still fine.
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(DirStatus::Existed),
        Err(e) => Err(MirrorError::create_dir(path, e)),
    }
}

/// Write `contents` to `path`, replacing any existing file.
///
/// The immediate parent directory is created when missing.
pub fn write_output(path: &Path, contents: &[u8]) -> MirrorResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut file = file_options()
        .open(path)
        .map_err(|e| MirrorError::write_file(path, e))?;
    file.write_all(contents)
        .and_then(|_| file.flush())
        .map_err(|e| MirrorError::write_file(path, e))
}

fn dir_builder() -> fs::DirBuilder {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

fn file_options() -> fs::OpenOptions {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options
}
