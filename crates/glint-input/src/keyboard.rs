//! Keyboard held-key tracking.

use hashbrown::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Set of currently-held keyboard keys.
///
/// Driven by discrete key-transition events; OS key repeat delivers extra
/// press events for a held key, which are idempotent here.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key event.
    ///
    /// Returns the affected key code and whether it is now pressed, or
    /// `None` for keys without a physical key code.
    pub fn process_key_event(&mut self, event: &KeyEvent) -> Option<(KeyCode, bool)> {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return None;
        };

        let pressed = match event.state {
            ElementState::Pressed => {
                self.held.insert(key_code);
                true
            }
            ElementState::Released => {
                self.held.remove(&key_code);
                false
            }
        };
        Some((key_code, pressed))
    }

    /// Returns `true` if the key is currently held.
    #[must_use]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Release all keys (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}
