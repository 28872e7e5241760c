//! High-level error types

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Record error: {0}")]
    Core(#[from] zhaexport_core::Error),

    #[error("Host error: {0}")]
    Host(#[from] zhaexport_host::Error),

    #[error("Couldn't create '{}' dir: {}", .path.display(), .source)]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Couldn't encode '{}' file: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        source: zhaexport_core::Error,
    },

    #[error("Couldn't save '{}' file: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
