use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for treescribe operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// Root path does not exist
    #[error("{path}: no such file or directory")]
    NotFound { path: PathBuf },

    /// Root path exists but is not a directory
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed mid-walk
    #[error("{path}: permission denied")]
    PermissionDenied { path: PathBuf },

    /// A file selected for content dumping could not be read
    #[error("failed to read {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `WalkDir` error when traversing directories
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error when writing output or resolving the working directory
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
