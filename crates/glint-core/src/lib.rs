//! Core types and math for the Glint demo framework.
//!
//! This crate provides the foundational pieces shared by the rest of the
//! workspace:
//! - The workspace-wide error type
//! - Camera-basis math for movement integration
//! - Framework-wide constants

pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::CameraBasis;

/// Framework-wide constants
pub mod constants {
    use glam::Vec3;

    /// Bytes per pixel for decoded texture data (RGBA8)
    pub const RGBA_STRIDE: usize = 4;
    /// Default horizontal movement speed in units per second
    pub const DEFAULT_MOVE_SPEED: f32 = 3.0;
    /// Default vertical movement speed in units per second
    pub const DEFAULT_VERTICAL_SPEED: f32 = 2.0;
    /// Default camera eye position
    pub const DEFAULT_CAMERA_EYE: Vec3 = Vec3::new(0.0, 1.5, 4.0);
    /// Default camera look-at target
    pub const DEFAULT_CAMERA_TARGET: Vec3 = Vec3::ZERO;
}
