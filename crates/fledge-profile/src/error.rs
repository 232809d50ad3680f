use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chrome profile not found at: {0}")]
    SourceNotFound(PathBuf),

    #[error("Failed to clone profile to {dest}: {source}")]
    CloneFailed {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove profile at {path}: {source}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
