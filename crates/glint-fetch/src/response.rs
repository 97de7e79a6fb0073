//! Fetch completion results.

use std::path::PathBuf;

use thiserror::Error;

use crate::request::RequestId;

/// Why a fetch failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file does not fit the request's destination buffer.
    #[error("file is larger than the {capacity}-byte buffer")]
    BufferTooSmall { capacity: usize },
}

/// A completed fetch.
///
/// Every request produces exactly one response: the pending request
/// transitions once, to either success (carrying the destination buffer) or
/// failure. The buffer is handed to the consumer here and never reused.
#[derive(Debug)]
pub struct FetchResponse {
    /// Identifier of the originating request.
    pub id: RequestId,
    /// Source path of the originating request.
    pub path: PathBuf,
    /// The loaded bytes, or the failure reason.
    pub result: Result<Vec<u8>, FetchError>,
}

impl FetchResponse {
    /// Returns `true` if the fetch succeeded.
    #[must_use]
    pub const fn fetched(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` if the fetch failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.result.is_err()
    }

    /// The loaded bytes, if the fetch succeeded.
    #[must_use]
    pub fn data(&self) -> Option<&[u8]> {
        self.result.as_deref().ok()
    }
}
