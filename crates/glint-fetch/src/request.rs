//! Fetch request description.

use std::path::PathBuf;

/// Default destination-buffer capacity (enough for the corpus's textures).
pub const DEFAULT_CAPACITY: usize = 256 * 1024;

/// Identifier of a submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(pub(crate) u64);

/// A file-load request.
///
/// `capacity` fixes the destination-buffer size for the request's whole
/// lifetime; a file larger than the buffer fails the request rather than
/// truncating it.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Source path.
    pub path: PathBuf,
    /// Destination buffer capacity in bytes.
    pub capacity: usize,
}

impl FetchRequest {
    /// Create a request with the default buffer capacity.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the destination buffer capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder() {
        let request = FetchRequest::new("a/b.png").with_capacity(64);
        assert_eq!(request.path, PathBuf::from("a/b.png"));
        assert_eq!(request.capacity, 64);

        assert_eq!(FetchRequest::new("c.txt").capacity, DEFAULT_CAPACITY);
    }
}
