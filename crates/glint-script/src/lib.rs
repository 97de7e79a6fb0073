//! Lua UI scripting bridge for the Glint demo framework.
//!
//! Scripts drive an immediate-mode UI through a fixed set of wrapper
//! functions collected in a global `imgui` table, and may define one
//! recognized entry point, `_render`, that native code invokes once per
//! frame. The UI itself stays on the host side of the [`UiBackend`] seam.
//!
//! - [`ScriptEngine`]: owns the Lua state, native registrations, and the
//!   per-frame `_render` dispatch
//! - [`UiBackend`]: host-implemented immediate-mode UI calls
//! - [`Vec2Schema`] / [`ApplyCond`]: the declared argument shapes wrappers
//!   accept

mod args;
mod engine;
mod ui;

pub use args::{ApplyCond, Vec2Schema, POS_SCHEMA, SIZE_SCHEMA};
pub use engine::ScriptEngine;
pub use ui::{draw_missing_script_panel, CondFilter, TracingUi, UiBackend};
