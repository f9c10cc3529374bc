use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Directory unavailable: {}: {source}", .root.display())]
    IoUnavailable {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed marker: {0}")]
    MalformedMarker(String),

    #[error("Path already contains marker: {}", .0.display())]
    AlreadyMarked(PathBuf),

    #[error("Watch error: {0}")]
    Watch(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NavigationError>;
