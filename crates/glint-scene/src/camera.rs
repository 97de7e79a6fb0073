//! Camera and view management.

use glam::{Mat4, Vec3};
use glint_core::constants::{DEFAULT_CAMERA_EYE, DEFAULT_CAMERA_TARGET};
use glint_core::CameraBasis;

/// Fixed-orientation camera.
///
/// The demos keep the camera still and move a subject through the world, so
/// orientation is defined once by eye/target/up and movement is expressed in
/// the camera's basis.
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: DEFAULT_CAMERA_EYE,
            target: DEFAULT_CAMERA_TARGET,
            up: Vec3::Y,
            fov: 60.0_f32.to_radians(),
            aspect: 4.0 / 3.0,
            near: 0.01,
            far: 10.0,
        }
    }
}

impl Camera {
    /// Create a new camera.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, up: Vec3, fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            eye,
            target,
            up,
            fov,
            aspect,
            near,
            far,
        }
    }

    /// Set the aspect ratio (e.g. after a resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// The horizontal movement basis for this camera's orientation.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        CameraBasis::from_eye_target_up(self.eye, self.target, self.up)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    /// Get the view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get uniform data for a subject translated to `subject_pos`.
    #[must_use]
    pub fn uniforms(&self, subject_pos: Vec3) -> CameraUniforms {
        let model = Mat4::from_translation(subject_pos);
        CameraUniforms {
            mvp: (self.view_projection_matrix() * model).to_cols_array_2d(),
        }
    }
}

/// Uniform buffer data for GPU draw calls.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub mvp: [[f32; 4]; 4],
}
