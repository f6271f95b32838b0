//! Error types and handling infrastructure for Markdown to HTML mirroring

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of a fatal error, for callers that need to branch on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ReadDir,
    CreateDir,
    ReadFile,
    WriteFile,
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::ReadDir => "directory read",
            ErrorKind::CreateDir => "directory create",
            ErrorKind::ReadFile => "file read",
            ErrorKind::WriteFile => "file write",
            ErrorKind::Configuration => "configuration",
        };
        f.write_str(name)
    }
}

/// Main error type for mirroring operations. Every variant is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum MirrorError {
    #[error("Error reading directory: '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error creating directory: '{}'", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading from file: '{}'", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing to file: '{}'", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl MirrorError {
    pub fn read_dir(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ReadDir { path: path.as_ref().to_path_buf(), source }
    }

    pub fn create_dir(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::CreateDir { path: path.as_ref().to_path_buf(), source }
    }

    pub fn read_file(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::ReadFile { path: path.as_ref().to_path_buf(), source }
    }

    pub fn write_file(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::WriteFile { path: path.as_ref().to_path_buf(), source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Map a `walkdir` failure onto the directory-read variant
    pub fn from_walk(error: walkdir::Error, fallback: &Path) -> Self {
        let path = error.path().unwrap_or(fallback).to_path_buf();
        let source = error
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop detected"));
        Self::ReadDir { path, source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ReadDir { .. } => ErrorKind::ReadDir,
            Self::CreateDir { .. } => ErrorKind::CreateDir,
            Self::ReadFile { .. } => ErrorKind::ReadFile,
            Self::WriteFile { .. } => ErrorKind::WriteFile,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// The path the failing operation touched, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadDir { path, .. }
            | Self::CreateDir { path, .. }
            | Self::ReadFile { path, .. }
            | Self::WriteFile { path, .. } => Some(path),
            Self::Configuration { .. } => None,
        }
    }

    /// Create a user-friendly one-line error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadDir { source, .. }
            | Self::CreateDir { source, .. }
            | Self::ReadFile { source, .. }
            | Self::WriteFile { source, .. } => format!("{} Error: {}", self, source),
            Self::Configuration { .. } => self.to_string(),
        }
    }
}

/// Result type for mirroring operations
pub type MirrorResult<T> = Result<T, MirrorError>;
