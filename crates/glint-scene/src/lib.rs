//! Camera and per-frame movement integration for the Glint demo framework.
//!
//! - [`Camera`]: fixed-orientation camera with view/projection matrices
//! - [`Mover`]: integrates the held-movement bitmask into a position

mod camera;
mod mover;

pub use camera::{Camera, CameraUniforms};
pub use mover::Mover;
