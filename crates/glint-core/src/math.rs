//! Camera-basis math for movement integration.

use glam::Vec3;

/// Horizontal movement basis derived from a camera orientation.
///
/// Displacements are accumulated along these axes rather than world axes,
/// so "forward" always means "toward what the camera looks at".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    /// Unit vector from eye toward target.
    pub forward: Vec3,
    /// Unit vector to the camera's right.
    pub right: Vec3,
}

impl CameraBasis {
    /// Derive the basis from camera eye/target/up.
    ///
    /// `forward = normalize(target - eye)`, `right = normalize(forward x up)`.
    /// A degenerate configuration (eye == target, or up parallel to forward)
    /// yields zero vectors instead of NaN.
    #[must_use]
    pub fn from_eye_target_up(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize_or_zero();
        let right = forward.cross(up).normalize_or_zero();
        Self { forward, right }
    }
}
