//! engine2d: a fixed-timestep 2D game loop
//!
//! One player sprite (WASD to move, Escape or the close button to quit)
//! and a row of static decorations, simulated at a fixed rate and drawn
//! once per displayed frame.

mod config;
mod error;
mod game;
mod input;
mod platform;
mod texture;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use macroquad::window::Conf;

use config::{EngineConfig, WindowConfig, CONFIG_FILE};
use game::{Clock, LoopDriver, World};
use platform::{MacroquadPlatform, MacroquadUploader};
use texture::TextureCache;

fn window_conf() -> Conf {
    // A broken config is reported (and exits) from run_game
    let window = EngineConfig::load_or_default()
        .map(|(config, _)| config.window)
        .unwrap_or_else(|_| WindowConfig::default());
    platform::window_conf(&window)
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Only fails if a logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Best-effort text of a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

/// Process status for the outcome of the window's run: 0 after a normal
/// quit, 1 when the platform gave up (window or GL context creation panics
/// inside macroquad).
fn exit_code(result: &std::thread::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(payload) => {
            log::error!("platform failure: {}", panic_message(&**payload));
            1
        }
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        macroquad::Window::from_config(window_conf(), run_game());
    }));
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

async fn run_game() {
    let config = match EngineConfig::load_or_default() {
        Ok((config, Some(path))) => {
            log::info!("using config {}", path.display());
            config
        }
        Ok((config, None)) => {
            log::info!("no {} found, using defaults", CONFIG_FILE);
            config
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut platform = MacroquadPlatform::new();
    let mut textures = TextureCache::new(MacroquadUploader, &config.render);
    let mut world = World::new();
    let player = game::spawn_scene(&mut world, &mut textures, &config);
    log::debug!("{} texture(s) resident", textures.len());

    let mut driver = LoopDriver::new(&config, player, platform.now());
    let stats = game::run(&mut driver, &mut platform, &mut world, &textures).await;
    log::info!(
        "ran {} step(s) over {} frame(s), at most {} step(s) per frame",
        stats.steps,
        stats.frames,
        stats.max_steps_per_frame
    );

    textures.clear();
    world.destroy_all();
}
