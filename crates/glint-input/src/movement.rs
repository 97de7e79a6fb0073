//! Movement bitmask and key-binding registry.

use bitflags::bitflags;
use hashbrown::HashMap;
use winit::keyboard::KeyCode;

bitflags! {
    /// Held-movement bitmask.
    ///
    /// One bit per logical movement action. A bit is set iff a key bound to
    /// that action is currently held; opposite bits may be set at the same
    /// time (their contributions cancel in the integrator).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveSet: u8 {
        /// Move toward the camera target.
        const FORWARD = 0b0000_0001;
        /// Move away from the camera target.
        const BACK    = 0b0000_0010;
        /// Strafe left.
        const LEFT    = 0b0000_0100;
        /// Strafe right.
        const RIGHT   = 0b0000_1000;
        /// Ascend.
        const UP      = 0b0001_0000;
        /// Descend.
        const DOWN    = 0b0010_0000;
    }
}

impl MoveSet {
    /// Signed contribution along the forward axis: +1 forward, -1 back, 0 if
    /// neither or both are held.
    #[must_use]
    pub fn forward_axis(self) -> f32 {
        axis(self.contains(Self::FORWARD), self.contains(Self::BACK))
    }

    /// Signed contribution along the right axis: +1 right, -1 left.
    #[must_use]
    pub fn strafe_axis(self) -> f32 {
        axis(self.contains(Self::RIGHT), self.contains(Self::LEFT))
    }

    /// Signed contribution along the vertical axis: +1 up, -1 down.
    #[must_use]
    pub fn vertical_axis(self) -> f32 {
        axis(self.contains(Self::UP), self.contains(Self::DOWN))
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(positive) - f32::from(negative)
}

/// Explicit registry mapping key codes to movement bits.
///
/// Unmapped keys resolve to nothing and leave the bitmask untouched.
#[derive(Debug, Clone)]
pub struct MoveBindings {
    bindings: HashMap<KeyCode, MoveSet>,
}

impl Default for MoveBindings {
    /// The corpus-standard layout: WASD plus Space to ascend and either
    /// Shift to descend.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyW, MoveSet::FORWARD);
        bindings.bind(KeyCode::KeyS, MoveSet::BACK);
        bindings.bind(KeyCode::KeyA, MoveSet::LEFT);
        bindings.bind(KeyCode::KeyD, MoveSet::RIGHT);
        bindings.bind(KeyCode::Space, MoveSet::UP);
        bindings.bind(KeyCode::ShiftLeft, MoveSet::DOWN);
        bindings.bind(KeyCode::ShiftRight, MoveSet::DOWN);
        bindings
    }
}

impl MoveBindings {
    /// Create a registry with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key to a movement bit, replacing any previous binding for it.
    pub fn bind(&mut self, key: KeyCode, movement: MoveSet) {
        self.bindings.insert(key, movement);
    }

    /// Remove the binding for a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Resolve a key to its movement bit, if bound.
    #[must_use]
    pub fn resolve(&self, key: KeyCode) -> Option<MoveSet> {
        self.bindings.get(&key).copied()
    }
}
