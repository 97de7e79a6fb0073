//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the diagnostic stream.
///
/// Honors `RUST_LOG`, defaulting to `info`. Call once at startup, before
/// creating an [`crate::App`].
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
