//! Keyboard input and movement accumulation for the Glint demo framework.
//!
//! This crate turns discrete key-transition events into a held-movement
//! bitmask that the per-frame integrator consumes:
//!
//! - [`KeyboardState`]: tracks which keys are currently held
//! - [`MoveSet`]: the six-bit movement bitmask
//! - [`MoveBindings`]: explicit key-to-movement registry
//! - [`InputManager`]: facade combining all three
//!
//! # Usage
//!
//! ```ignore
//! use glint_input::InputManager;
//!
//! let mut input = InputManager::new();
//!
//! // In the host's event handler
//! fn on_event(input: &mut InputManager, event: &WindowEvent) -> bool {
//!     input.process_window_event(event)
//! }
//!
//! // In the per-frame update
//! let moves = input.moves();
//! ```

mod input;
mod keyboard;
mod movement;

pub use input::InputManager;
pub use keyboard::KeyboardState;
pub use movement::{MoveBindings, MoveSet};

// Re-export winit types commonly used with input
pub use winit::event::WindowEvent;
pub use winit::keyboard::KeyCode;
