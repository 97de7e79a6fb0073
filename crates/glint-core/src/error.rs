//! Error types for the framework.

use thiserror::Error;

/// Framework-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request queue has no free slot
    #[error("Fetch queue full, request for '{0}' not submitted")]
    QueueFull(String),

    /// Script load or call error
    #[error("Script error: {0}")]
    Script(String),

    /// Invalid data error
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
