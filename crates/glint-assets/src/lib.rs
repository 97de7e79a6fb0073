//! Texture publishing and async load completion handling.
//!
//! - [`TextureSlot`] / [`TexturePublisher`]: the seam to the host's GPU
//!   resource creation
//! - [`ErrorIndicator`]: clear-color error surface for failed loads
//! - [`TextureLoader`]: routes a fetch completion into a decode-and-publish
//!   or a visible failure

mod indicator;
mod loader;
mod texture;

pub use indicator::ErrorIndicator;
pub use loader::{LoadState, TextureLoader};
pub use texture::{TextureData, TexturePublisher, TextureSlot};
