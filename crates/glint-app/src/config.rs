//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use glint_core::constants::{DEFAULT_MOVE_SPEED, DEFAULT_VERTICAL_SPEED};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Horizontal movement speed in units per second.
    pub move_speed: f32,
    /// Vertical movement speed in units per second.
    pub vertical_speed: f32,
    /// Script file loaded at startup (missing file is skipped).
    pub script_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Glint".to_string(),
            width: 800,
            height: 600,
            move_speed: DEFAULT_MOVE_SPEED,
            vertical_speed: DEFAULT_VERTICAL_SPEED,
            script_path: PathBuf::from("script.lua"),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the movement speeds.
    #[must_use]
    pub fn with_speeds(mut self, move_speed: f32, vertical_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.vertical_speed = vertical_speed;
        self
    }

    /// Set the startup script path.
    #[must_use]
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = path.into();
        self
    }

    /// Aspect ratio of the configured window.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
