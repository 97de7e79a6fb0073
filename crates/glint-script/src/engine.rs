//! Lua state ownership and per-frame dispatch.

use std::cell::RefCell;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use mlua::{Lua, Value};
use tracing::{error, info, warn};

use glint_core::{Error, Result};

use crate::args::{ApplyCond, POS_SCHEMA, SIZE_SCHEMA};
use crate::ui::{draw_missing_script_panel, UiBackend};

fn script_err(err: mlua::Error) -> Error {
    Error::Script(err.to_string())
}

/// Owns the Lua state and the native functions exposed to it.
///
/// Two globals are registered at construction: `hello_world`, a native test
/// function scripts may call (or shadow with their own), and `frame_count`,
/// which reads the host's frame counter. The `imgui` wrapper table is
/// rebuilt each frame around the host's [`UiBackend`].
pub struct ScriptEngine {
    lua: Lua,
    frame_count: Arc<AtomicU64>,
}

impl ScriptEngine {
    /// Create the Lua state and register the native globals.
    pub fn new() -> Result<Self> {
        let lua = Lua::new();
        let frame_count = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&frame_count);
        let get_frame_count = lua
            .create_function(move |_, ()| Ok(counter.load(Ordering::Relaxed)))
            .map_err(script_err)?;
        lua.globals()
            .set("frame_count", get_frame_count)
            .map_err(script_err)?;

        let hello = lua
            .create_function(|_, ()| {
                info!("hello from the native side (called from script)");
                Ok(())
            })
            .map_err(script_err)?;
        lua.globals().set("hello_world", hello).map_err(script_err)?;

        Ok(Self { lua, frame_count })
    }

    /// Publish the host's frame counter to `frame_count()`.
    pub fn set_frame_count(&self, frames: u64) {
        self.frame_count.store(frames, Ordering::Relaxed);
    }

    /// Load and execute a script file.
    ///
    /// A missing file is not an error: it is skipped and `Ok(false)` is
    /// returned. A Lua error inside the chunk is surfaced as
    /// [`Error::Script`].
    pub fn load_script(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            info!("script '{}' not found, skipped", path.display());
            return Ok(false);
        }

        let source = std::fs::read_to_string(path)?;
        self.lua
            .load(source)
            .set_name(path.display().to_string())
            .exec()
            .map_err(script_err)?;

        info!("script '{}' loaded", path.display());
        Ok(true)
    }

    /// Execute a chunk of Lua source.
    pub fn exec(&self, chunk: &str) -> Result<()> {
        self.lua.load(chunk).exec().map_err(script_err)
    }

    /// Run the per-frame script entry point.
    ///
    /// Exposes the `imgui` wrapper table scoped to this frame's backend,
    /// then calls the script's `_render` if it is defined as a function;
    /// otherwise the fixed fallback panel is drawn. A runtime error inside
    /// `_render` is logged and swallowed so a bad frame never halts the
    /// application.
    pub fn run_frame(&self, ui: &mut dyn UiBackend) -> Result<()> {
        let ui = RefCell::new(ui);

        self.lua
            .scope(|scope| {
                let u = &ui;
                let imgui = self.lua.create_table()?;

                imgui.set(
                    "BeginWindow",
                    scope.create_function(move |_, title: String| {
                        Ok(u.borrow_mut().begin_window(&title))
                    })?,
                )?;
                imgui.set(
                    "EndWindow",
                    scope.create_function(move |_, ()| {
                        u.borrow_mut().end_window();
                        Ok(())
                    })?,
                )?;
                imgui.set(
                    "Button",
                    scope.create_function(move |_, label: String| {
                        Ok(u.borrow_mut().button(&label))
                    })?,
                )?;
                imgui.set(
                    "Text",
                    scope.create_function(move |_, text: String| {
                        u.borrow_mut().text(&text);
                        Ok(())
                    })?,
                )?;
                imgui.set(
                    "SetNextWindowPos",
                    scope.create_function(
                        move |_, (table, cond): (mlua::Table, Option<String>)| {
                            let pos = POS_SCHEMA.extract(&table)?;
                            u.borrow_mut()
                                .set_next_window_pos(pos, ApplyCond::parse(cond.as_deref()));
                            Ok(())
                        },
                    )?,
                )?;
                imgui.set(
                    "SetNextWindowSize",
                    scope.create_function(
                        move |_, (table, cond): (mlua::Table, Option<String>)| {
                            let size = SIZE_SCHEMA.extract(&table)?;
                            u.borrow_mut()
                                .set_next_window_size(size, ApplyCond::parse(cond.as_deref()));
                            Ok(())
                        },
                    )?,
                )?;

                self.lua.globals().set("imgui", imgui)?;

                match self.lua.globals().get::<Value>("_render")? {
                    Value::Function(render) => {
                        if let Err(err) = render.call::<()>(()) {
                            error!("Lua _render error: {err}");
                        }
                    }
                    _ => {
                        let mut guard = ui.borrow_mut();
                        draw_missing_script_panel(&mut **guard);
                    }
                }
                Ok(())
            })
            .map_err(script_err)
    }

    /// Call the script-side `hello_world` if one is defined.
    ///
    /// Errors and non-function values are logged, never propagated.
    pub fn call_hello(&self) {
        match self.lua.globals().get::<Value>("hello_world") {
            Ok(Value::Function(func)) => {
                if let Err(err) = func.call::<()>(()) {
                    error!("Lua error: {err}");
                }
            }
            Ok(_) => warn!("hello_world is not a function"),
            Err(err) => error!("Lua error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{RecordingUi, UiCall};
    use glam::Vec2;

    #[test]
    fn missing_script_is_skipped() {
        let engine = ScriptEngine::new().unwrap();
        let loaded = engine
            .load_script("/definitely/not/here/script.lua")
            .unwrap();
        assert!(!loaded);
    }

    #[test]
    fn script_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "glint-script-{}-round-trip.lua",
            std::process::id()
        ));
        std::fs::write(&path, "loaded_marker = 99").unwrap();

        let engine = ScriptEngine::new().unwrap();
        assert!(engine.load_script(&path).unwrap());
        let marker: i64 = engine.lua.globals().get("loaded_marker").unwrap();
        assert_eq!(marker, 99);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn bad_chunk_is_a_script_error() {
        let engine = ScriptEngine::new().unwrap();
        assert!(matches!(
            engine.exec("this is not lua"),
            Err(Error::Script(_))
        ));
    }

    #[test]
    fn fallback_panel_without_render() {
        let engine = ScriptEngine::new().unwrap();
        let mut ui = RecordingUi::default();
        engine.run_frame(&mut ui).unwrap();

        assert_eq!(
            ui.calls[..3],
            [
                UiCall::Pos(Vec2::new(10.0, 10.0), ApplyCond::Once),
                UiCall::Size(Vec2::new(400.0, 100.0), ApplyCond::Once),
                UiCall::Begin("Lua UI missing".to_string()),
            ]
        );
    }

    #[test]
    fn render_drives_the_backend() {
        let engine = ScriptEngine::new().unwrap();
        engine
            .exec(
                "function _render()\n\
                   imgui.SetNextWindowPos({x = 10, y = 20})\n\
                   imgui.BeginWindow('demo')\n\
                   imgui.Text('hi')\n\
                   imgui.Button('ok')\n\
                   imgui.EndWindow()\n\
                 end",
            )
            .unwrap();

        let mut ui = RecordingUi::default();
        engine.run_frame(&mut ui).unwrap();

        assert_eq!(
            ui.calls,
            vec![
                UiCall::Pos(Vec2::new(10.0, 20.0), ApplyCond::Always),
                UiCall::Begin("demo".to_string()),
                UiCall::Text("hi".to_string()),
                UiCall::Button("ok".to_string()),
                UiCall::End,
            ]
        );
    }

    #[test]
    fn condition_string_is_forwarded() {
        let engine = ScriptEngine::new().unwrap();
        engine
            .exec(
                "function _render()\n\
                   imgui.SetNextWindowSize({w = 400, h = 100}, 'Once')\n\
                 end",
            )
            .unwrap();

        let mut ui = RecordingUi::default();
        engine.run_frame(&mut ui).unwrap();
        assert_eq!(
            ui.calls,
            vec![UiCall::Size(Vec2::new(400.0, 100.0), ApplyCond::Once)]
        );
    }

    #[test]
    fn render_error_does_not_halt_later_frames() {
        let engine = ScriptEngine::new().unwrap();
        engine
            .exec("frames = 0\nfunction _render()\n  frames = frames + 1\n  error('boom')\nend")
            .unwrap();

        let mut ui = RecordingUi::default();
        engine.run_frame(&mut ui).unwrap();
        engine.run_frame(&mut ui).unwrap();

        let frames: i64 = engine.lua.globals().get("frames").unwrap();
        assert_eq!(frames, 2);
    }

    #[test]
    fn frame_count_native() {
        let engine = ScriptEngine::new().unwrap();
        engine.set_frame_count(42);
        engine
            .exec("function _render() captured = frame_count() end")
            .unwrap();

        let mut ui = RecordingUi::default();
        engine.run_frame(&mut ui).unwrap();

        let captured: u64 = engine.lua.globals().get("captured").unwrap();
        assert_eq!(captured, 42);
    }

    #[test]
    fn native_hello_world_is_callable() {
        let engine = ScriptEngine::new().unwrap();
        engine.exec("hello_world()").unwrap();
    }

    #[test]
    fn call_hello_prefers_script_override() {
        let engine = ScriptEngine::new().unwrap();
        engine
            .exec("called = false\nfunction hello_world() called = true end")
            .unwrap();

        engine.call_hello();

        let called: bool = engine.lua.globals().get("called").unwrap();
        assert!(called);
    }
}
