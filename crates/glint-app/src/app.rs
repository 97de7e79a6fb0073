//! The explicit application-state value and its per-frame cycle.

use std::path::Path;

use glam::Vec3;
use tracing::{error, info};
use winit::event::WindowEvent;
use winit::keyboard::KeyCode;

use glint_assets::{ErrorIndicator, LoadState, TextureLoader, TexturePublisher, TextureSlot};
use glint_fetch::{FetchRequest, FetchService, RequestId};
use glint_input::InputManager;
use glint_scene::{Camera, CameraUniforms, Mover};
use glint_script::{ScriptEngine, UiBackend};

use crate::config::AppConfig;

/// Application state.
///
/// One value holds everything the per-frame cycle touches; the host passes
/// it by reference into event handling and update. All methods run on the
/// main thread, so nothing here needs locking.
pub struct App {
    input: InputManager,
    camera: Camera,
    mover: Mover,
    fetch: FetchService,
    loader: TextureLoader,
    indicator: ErrorIndicator,
    script: ScriptEngine,
    frame_count: u64,
}

impl App {
    /// Initialize the application state.
    ///
    /// `slot` is the host's pre-allocated texture handle. The configured
    /// startup script is loaded if present; a script error is logged and
    /// the app starts anyway.
    pub fn new(config: AppConfig, slot: TextureSlot) -> anyhow::Result<Self> {
        let mut camera = Camera::default();
        camera.set_aspect(config.aspect_ratio());

        let script = ScriptEngine::new()?;
        if let Err(err) = script.load_script(&config.script_path) {
            error!("startup script failed: {err}");
        }

        let app = Self {
            input: InputManager::new(),
            camera,
            mover: Mover::new(config.move_speed, config.vertical_speed),
            fetch: FetchService::spawn()?,
            loader: TextureLoader::new(slot),
            indicator: ErrorIndicator::new(),
            script,
            frame_count: 0,
        };

        info!("{} initialized", config.title);
        Ok(app)
    }

    /// Process a window event.
    ///
    /// Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        self.input.process_window_event(event)
    }

    /// Apply a key transition directly (hosts without winit event plumbing).
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) {
        self.input.apply_key(key, pressed);
    }

    /// Submit an async texture load into the pre-allocated slot.
    ///
    /// The completion is handled during a later [`App::update`] call.
    pub fn begin_texture_load(&mut self, path: impl AsRef<Path>) -> glint_core::Result<RequestId> {
        self.fetch.submit(FetchRequest::new(path.as_ref()))
    }

    /// Run one iteration of the per-frame cycle.
    ///
    /// Polls pending async completions, integrates held movement over `dt`
    /// seconds, and runs the script frame against the given UI backend.
    pub fn update(&mut self, dt: f32, publisher: &mut dyn TexturePublisher, ui: &mut dyn UiBackend) {
        let loader = &mut self.loader;
        let indicator = &mut self.indicator;
        self.fetch.process_completions(|response| {
            loader.on_response(&response, publisher, indicator);
        });

        self.mover
            .integrate(self.camera.basis(), self.input.moves(), dt);

        self.frame_count += 1;
        self.script.set_frame_count(self.frame_count);
        if let Err(err) = self.script.run_frame(ui) {
            error!("script frame failed: {err}");
        }
    }

    /// Current clear color, reflecting any load failure.
    #[must_use]
    pub const fn clear_color(&self) -> [f32; 4] {
        self.indicator.clear_color()
    }

    /// Position of the moved subject.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.mover.position
    }

    /// Uniform data for the host's draw call this frame.
    #[must_use]
    pub fn uniforms(&self) -> CameraUniforms {
        self.camera.uniforms(self.mover.position)
    }

    /// Lifecycle state of the texture load.
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.loader.state()
    }

    /// Frames updated so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of fetch requests still in flight.
    #[must_use]
    pub fn loads_in_flight(&self) -> usize {
        self.fetch.in_flight()
    }

    /// The camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The script engine, e.g. to trigger the script-side `hello_world`.
    #[must_use]
    pub const fn script(&self) -> &ScriptEngine {
        &self.script
    }

    /// Tear the application down.
    ///
    /// Joins the fetch worker; pairs with [`App::new`].
    pub fn shutdown(self) {
        info!("shutting down after {} frames", self.frame_count);
        drop(self);
    }
}
