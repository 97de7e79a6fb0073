//! Input manager combining keyboard state, bindings, and the movement mask.

use winit::event::WindowEvent;
use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;
use crate::movement::{MoveBindings, MoveSet};

/// Input manager owning the held-movement accumulator.
///
/// # Usage
///
/// ```ignore
/// let mut input = InputManager::new();
///
/// // In the host's event handler
/// input.process_window_event(&event);
///
/// // In the per-frame update
/// let displacement = mover.displacement(basis, input.moves(), dt);
/// ```
#[derive(Debug, Default)]
pub struct InputManager {
    /// Held-key tracking.
    keyboard: KeyboardState,
    /// Key-to-movement registry.
    bindings: MoveBindings,
    /// Currently-held movement bits.
    moves: MoveSet,
}

impl InputManager {
    /// Create an input manager with the default binding layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input manager with a custom binding registry.
    #[must_use]
    pub fn with_bindings(bindings: MoveBindings) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            bindings,
            moves: MoveSet::empty(),
        }
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed (keyboard input).
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some((key, pressed)) = self.keyboard.process_key_event(event) {
                    self.apply_key(key, pressed);
                }
                true
            }
            WindowEvent::Focused(false) => {
                self.clear();
                false
            }
            _ => false,
        }
    }

    /// Apply a key transition directly, bypassing winit event plumbing.
    ///
    /// Unbound keys have no effect. Repeated presses of a held key are
    /// idempotent.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(movement) = self.bindings.resolve(key) {
            self.moves.set(movement, pressed);
        }
    }

    /// The currently-held movement bits.
    #[must_use]
    pub const fn moves(&self) -> MoveSet {
        self.moves
    }

    /// Get a reference to the keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Get a mutable reference to the binding registry for runtime rebinding.
    pub fn bindings_mut(&mut self) -> &mut MoveBindings {
        &mut self.bindings
    }

    /// Release all keys and movement bits (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.keyboard.clear();
        self.moves = MoveSet::empty();
    }
}
