//! Skystrike main entry point.
//!
//! A small scrolling-aircraft arcade game built around two generic pieces
//! of infrastructure:
//! - a hierarchical **scene graph** (arena-backed tree of transformable,
//!   drawable, updatable nodes with targeted command dispatch)
//! - a **state stack** (pushdown automaton of title/loading/menu/game/
//!   pause screens with deferred mutation)
//!
//! Rendering and windowing are abstract collaborators; the shipped backend
//! is headless and records draw calls, so the binary is mostly useful for
//! development with `RUST_LOG=trace` and a frame budget.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 600
//! ```

mod app;
mod assets;
mod category;
mod command;
mod platform;
mod player;
mod render;
mod resources;
mod scene;
mod states;
mod task;
mod world;

use clap::Parser;
use std::path::PathBuf;

use crate::app::App;
use crate::platform::headless::HeadlessWindow;
use crate::resources::gameconfig::GameConfig;

/// Skystrike
#[derive(Parser)]
#[command(version, about = "Scrolling-aircraft arcade game on a headless backend")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Close the window automatically after this many frames.
    #[arg(long, value_name = "N")]
    frames: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let (window_width, window_height) = config.window_size();
    let mut window = HeadlessWindow::new(window_width as f32, window_height as f32)
        .with_target_fps(config.target_fps);
    if let Some(frames) = cli.frames {
        window = window.with_frame_budget(frames);
    }

    let mut app = match App::new(window, &config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    log::info!("Skystrike up, entering main loop");
    app.run();
}
