//! Per-frame movement integration.

use glam::Vec3;
use glint_core::constants::{DEFAULT_MOVE_SPEED, DEFAULT_VERTICAL_SPEED};
use glint_core::CameraBasis;
use glint_input::MoveSet;

/// Integrates the held-movement bitmask into a position, one frame at a time.
///
/// Horizontal motion follows the camera basis; vertical motion is world-Y
/// with its own speed. Position is unbounded: there is no clamping and no
/// collision.
#[derive(Debug, Clone)]
pub struct Mover {
    /// Current position of the moved subject.
    pub position: Vec3,
    /// Horizontal speed in units per second.
    pub move_speed: f32,
    /// Vertical speed in units per second.
    pub vertical_speed: f32,
}

impl Default for Mover {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            move_speed: DEFAULT_MOVE_SPEED,
            vertical_speed: DEFAULT_VERTICAL_SPEED,
        }
    }
}

impl Mover {
    /// Create a mover at the origin with the given speeds.
    #[must_use]
    pub fn new(move_speed: f32, vertical_speed: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            move_speed,
            vertical_speed,
        }
    }

    /// Compute this frame's displacement without applying it.
    ///
    /// Each active bit contributes a scaled basis vector; opposite bits
    /// cancel. `dt == 0` (the first frame) yields a zero displacement.
    #[must_use]
    pub fn displacement(&self, basis: CameraBasis, moves: MoveSet, dt: f32) -> Vec3 {
        let horizontal = self.move_speed * dt;
        let vertical = self.vertical_speed * dt;

        basis.forward * (moves.forward_axis() * horizontal)
            + basis.right * (moves.strafe_axis() * horizontal)
            + Vec3::Y * (moves.vertical_axis() * vertical)
    }

    /// Advance the position by this frame's displacement.
    pub fn integrate(&mut self, basis: CameraBasis, moves: MoveSet, dt: f32) {
        self.position += self.displacement(basis, moves, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn test_basis() -> CameraBasis {
        CameraBasis::from_eye_target_up(Vec3::new(0.0, 1.5, 4.0), Vec3::ZERO, Vec3::Y)
    }

    #[test]
    fn zero_dt_zero_displacement() {
        let mover = Mover::default();
        let all = MoveSet::all();
        assert_eq!(mover.displacement(test_basis(), all, 0.0), Vec3::ZERO);
    }

    #[test]
    fn empty_mask_zero_displacement() {
        let mover = Mover::default();
        assert_eq!(
            mover.displacement(test_basis(), MoveSet::empty(), 0.5),
            Vec3::ZERO
        );
    }

    #[test]
    fn opposite_pairs_cancel() {
        let mover = Mover::default();
        let basis = test_basis();

        for pair in [
            MoveSet::FORWARD | MoveSet::BACK,
            MoveSet::LEFT | MoveSet::RIGHT,
            MoveSet::UP | MoveSet::DOWN,
        ] {
            let d = mover.displacement(basis, pair, 0.25);
            assert_abs_diff_eq!(d.x, 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(d.y, 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(d.z, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn forward_scales_with_speed_and_dt() {
        let mover = Mover::new(3.0, 2.0);
        let basis = test_basis();

        let d = mover.displacement(basis, MoveSet::FORWARD, 0.5);
        let expected = basis.forward * 1.5;
        assert_abs_diff_eq!(d.x, expected.x, epsilon = 1e-6);
        assert_abs_diff_eq!(d.y, expected.y, epsilon = 1e-6);
        assert_abs_diff_eq!(d.z, expected.z, epsilon = 1e-6);
    }

    #[test]
    fn vertical_uses_its_own_speed() {
        let mover = Mover::new(3.0, 2.0);
        let d = mover.displacement(test_basis(), MoveSet::UP, 1.0);
        assert_abs_diff_eq!(d.y, 2.0, epsilon = 1e-6);

        let d = mover.displacement(test_basis(), MoveSet::DOWN, 1.0);
        assert_abs_diff_eq!(d.y, -2.0, epsilon = 1e-6);
    }

    #[test]
    fn integrate_accumulates() {
        let mut mover = Mover::new(1.0, 1.0);
        let basis = test_basis();

        mover.integrate(basis, MoveSet::UP, 1.0);
        mover.integrate(basis, MoveSet::UP, 1.0);
        assert_abs_diff_eq!(mover.position.y, 2.0, epsilon = 1e-6);
    }
}
