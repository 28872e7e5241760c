//! Error types for zhaexport-core

/// Result type alias for zhaexport-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Record building errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Part of the record could not be encoded as JSON
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
