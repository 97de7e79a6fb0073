//! Headless demo driver.
//!
//! Runs the full per-frame cycle without a window or GPU: synthesized key
//! input moves the subject, an async texture load resolves mid-run, and the
//! script frame drives the tracing UI backend. Pass a path to an image file
//! to exercise the load path:
//!
//! ```text
//! glint-demo assets/grass16x16.png
//! ```

use std::time::{Duration, Instant};

use tracing::info;

use glint_app::{App, AppConfig, TextureSlot, TracingUi};
use glint_assets::{TextureData, TexturePublisher};
use glint_input::KeyCode;

/// Fixed simulation step, one 60 Hz frame.
const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames to simulate.
const FRAME_COUNT: u32 = 120;

/// Publisher that logs what a GPU backend would upload.
struct LogPublisher;

impl TexturePublisher for LogPublisher {
    fn publish(&mut self, slot: TextureSlot, data: &TextureData) {
        info!(
            "upload: slot {} <- {}x{} RGBA ({} bytes)",
            slot.id(),
            data.width,
            data.height,
            data.pixels().len()
        );
    }
}

fn main() -> anyhow::Result<()> {
    glint_app::init_logging();
    info!("glint demo starting...");

    let config = AppConfig::new("Glint Demo").with_size(800, 600);
    let mut app = App::new(config, TextureSlot::new(0))?;

    if let Some(path) = std::env::args().nth(1) {
        app.begin_texture_load(&path)?;
        info!(
            "loading '{path}' in the background ({} in flight)",
            app.loads_in_flight()
        );
    }

    // Without a script.lua next to the binary the fallback panel would draw
    // every frame; give the run a tiny script instead.
    app.script().exec(
        "function _render()\n\
           imgui.SetNextWindowPos({x = 10, y = 10}, 'Once')\n\
           imgui.BeginWindow('demo')\n\
           imgui.Text('frame ' .. frame_count())\n\
           imgui.EndWindow()\n\
         end",
    )?;

    let mut publisher = LogPublisher;
    let mut ui = TracingUi::new();
    let started = Instant::now();

    for frame in 0..FRAME_COUNT {
        // Scripted input: forward for a second, then strafe while ascending.
        match frame {
            10 => app.apply_key(KeyCode::KeyW, true),
            70 => {
                app.apply_key(KeyCode::KeyW, false);
                app.apply_key(KeyCode::KeyD, true);
                app.apply_key(KeyCode::Space, true);
            }
            110 => {
                app.apply_key(KeyCode::KeyD, false);
                app.apply_key(KeyCode::Space, false);
            }
            _ => {}
        }

        app.update(FRAME_DT, &mut publisher, &mut ui);

        // Pace roughly like a real frame loop so the load resolves mid-run.
        std::thread::sleep(Duration::from_millis(1));
    }

    let elapsed = started.elapsed().as_secs_f64();
    info!("simulated {FRAME_COUNT} frames in {elapsed:.2}s");
    info!("final position: {}", app.position());
    info!("texture load state: {:?}", app.load_state());
    info!("clear color: {:?}", app.clear_color());

    app.shutdown();
    Ok(())
}
