//! Async load completion handling.

use tracing::{error, info, warn};

use glint_fetch::FetchResponse;

use crate::indicator::ErrorIndicator;
use crate::texture::{TextureData, TexturePublisher, TextureSlot};

/// Lifecycle of one texture load.
///
/// ```text
/// Pending ──fetch ok, decode ok──> Ready
///    │ ├────fetch ok, decode bad──> DecodeFailed
///    └──────fetch failed─────────-> FetchFailed
/// ```
///
/// All three right-hand states are terminal; the transition happens exactly
/// once, on the thread draining fetch completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Request submitted, completion not yet seen.
    #[default]
    Pending,
    /// Pixels decoded and published to the slot.
    Ready,
    /// The fetch itself failed; the failure is visible via the indicator.
    FetchFailed,
    /// Fetched bytes were not a decodable image; the slot is untouched and
    /// the indicator is not raised.
    DecodeFailed,
}

impl LoadState {
    /// Returns `true` once the load can no longer change state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Routes a fetch completion into its texture slot.
///
/// On success the bytes are decoded as an image (RGBA8, 4 bytes per pixel)
/// and published into the pre-allocated slot; the decode buffer is dropped
/// immediately after. On fetch failure the slot is untouched and the error
/// indicator is raised instead.
#[derive(Debug)]
pub struct TextureLoader {
    slot: TextureSlot,
    state: LoadState,
}

impl TextureLoader {
    /// Create a loader for a pre-allocated slot.
    #[must_use]
    pub const fn new(slot: TextureSlot) -> Self {
        Self {
            slot,
            state: LoadState::Pending,
        }
    }

    /// The slot this loader publishes into.
    #[must_use]
    pub const fn slot(&self) -> TextureSlot {
        self.slot
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// Handle the load completion.
    ///
    /// Safe against duplicate invocation: once a terminal state is reached,
    /// further responses are ignored.
    pub fn on_response(
        &mut self,
        response: &FetchResponse,
        publisher: &mut dyn TexturePublisher,
        indicator: &mut ErrorIndicator,
    ) {
        if self.state.is_terminal() {
            return;
        }

        match &response.result {
            Ok(bytes) => {
                self.state = match decode_rgba8(bytes) {
                    Some(data) => {
                        publisher.publish(self.slot, &data);
                        info!(
                            "texture published: {} ({}x{})",
                            response.path.display(),
                            data.width,
                            data.height
                        );
                        LoadState::Ready
                    }
                    None => {
                        warn!("undecodable image data from {}", response.path.display());
                        LoadState::DecodeFailed
                    }
                };
            }
            Err(reason) => {
                error!("fetch failed for {}: {reason}", response.path.display());
                indicator.set_failure();
                self.state = LoadState::FetchFailed;
            }
        }
    }
}

/// Decode image bytes to tightly packed RGBA8, `None` if undecodable.
///
/// An empty buffer counts as undecodable rather than an error.
fn decode_rgba8(bytes: &[u8]) -> Option<TextureData> {
    if bytes.is_empty() {
        return None;
    }
    let decoded = image::load_from_memory(bytes).ok()?.to_rgba8();
    let (width, height) = decoded.dimensions();
    TextureData::from_rgba8(width, height, decoded.into_raw()).ok()
}
