//! Texture slot handle, decoded pixel data, and the publish seam.

use glint_core::constants::RGBA_STRIDE;
use glint_core::{Error, Result};

/// Pre-allocated GPU-visible texture handle.
///
/// The host allocates the slot once at startup; draw calls reference it and
/// only its contents are ever replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(u32);

impl TextureSlot {
    /// Wrap a host-allocated slot id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The host-side slot id.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Decoded RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// Tightly packed rows, 4 bytes per pixel.
    pixels: Vec<u8>,
}

impl TextureData {
    /// Build from decoded pixels, checking the `width * height * 4` length
    /// invariant.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * RGBA_STRIDE;
        if pixels.len() != expected {
            return Err(Error::InvalidData(format!(
                "pixel buffer is {} bytes, expected {expected} for {width}x{height} RGBA",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The packed pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Host-side GPU resource creation seam.
///
/// Implementations turn decoded pixels into whatever the rendering backend
/// draws from; the framework only holds the [`TextureSlot`] handle.
pub trait TexturePublisher {
    /// Replace the contents of a pre-allocated slot.
    fn publish(&mut self, slot: TextureSlot, data: &TextureData);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_invariant_enforced() {
        assert!(TextureData::from_rgba8(2, 2, vec![0u8; 16]).is_ok());
        assert!(TextureData::from_rgba8(2, 2, vec![0u8; 12]).is_err());
        assert!(TextureData::from_rgba8(0, 0, Vec::new()).is_ok());
    }

    #[test]
    fn slot_id_round_trip() {
        let slot = TextureSlot::new(7);
        assert_eq!(slot.id(), 7);
    }
}
