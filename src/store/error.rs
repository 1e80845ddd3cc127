use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A lookup by id expected a document but found none.
    #[error("Record not found")]
    NotFound,

    /// Object key rejected before touching the filesystem.
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    /// Generic I/O error from the object store backend.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the store layer.
pub type Result<T> = std::result::Result<T, StoreError>;
