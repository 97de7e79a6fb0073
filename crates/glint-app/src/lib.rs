//! Application state and per-frame cycle for the Glint demo framework.
//!
//! [`App`] is the single explicit state value replacing the process-wide
//! globals the original demos kept: input, camera, mover, fetch service,
//! texture loader, error indicator, and script engine live in one struct
//! with a well-defined init/teardown pair. The host owns the window, the
//! event loop, and the GPU; it feeds events and `dt` in and reads positions,
//! uniforms, and the clear color out.
//!
//! # Example
//!
//! ```ignore
//! use glint_app::{App, AppConfig};
//! use glint_assets::TextureSlot;
//!
//! glint_app::init_logging();
//!
//! let mut app = App::new(AppConfig::new("demo"), TextureSlot::new(0))?;
//! app.begin_texture_load("assets/grass16x16.png")?;
//!
//! // Per frame, on the main thread:
//! app.handle_event(&event);
//! app.update(dt, &mut publisher, &mut ui);
//! let clear = app.clear_color();
//! ```

mod app;
mod config;
mod logging;

pub use app::App;
pub use config::AppConfig;
pub use logging::init_logging;

// Re-export commonly used types for convenience
pub use glint_assets::{TexturePublisher, TextureSlot};
pub use glint_input::KeyCode;
pub use glint_script::{TracingUi, UiBackend};
