use std::path::PathBuf;

mod animation;
mod bird;
mod collision;
mod config;
mod game;
mod input_system;
mod obstacle;
mod platform;
mod render;
mod ring;
mod rng;
mod score;
mod text;
mod timing;

use config::GameConfig;
use game::{ActionOutcome, GameState};
use input_system::InputSystem;
use render::{render_frame, SceneTextures};
use timing::FrameClock;

/// Sprite and config directory. Prefers an `assets` folder next to the
/// executable and falls back to the working directory.
fn assets_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("assets"))
}

fn config_candidates(assets: &std::path::Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("flappy").join("config.json"));
    }
    candidates.push(assets.join("config").join("game.json"));
    candidates
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let assets = assets_dir();
    let (config, source) = GameConfig::discover(&config_candidates(&assets));
    match &source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("No config file found, using defaults"),
    }

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let width = config.window.width;
    let height = config.window.height;

    let window = video_subsystem
        .window(&config.window.title, width, height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .target_texture()
        .build()
        .map_err(|e| e.to_string())?;

    // Resizing the window scales the scene instead of revealing more of it
    canvas.set_logical_size(width, height).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let textures = SceneTextures::load(
        &mut canvas,
        &texture_creator,
        &assets,
        width,
        config.pipes.gap,
    )
    .map_err(|e| format!("Failed to load sprites from {}: {}", assets.display(), e))?;

    let target_fps = config.window.target_fps;
    let mut state = GameState::new(config, textures.metrics());
    let input = InputSystem::new();
    let mut clock = FrameClock::new(target_fps);

    tracing::info!(width, height, target_fps, "Window ready");

    'running: loop {
        let dt = state.frame_dt(clock.tick());

        for action in input.poll_events(&mut event_pump) {
            if state.apply_action(action) == ActionOutcome::Quit {
                break 'running;
            }
        }

        let events = state.step(dt);
        if events.obstacles_recycled > 0 {
            tracing::trace!(count = events.obstacles_recycled, "Recycled pipes");
        }

        render_frame(&mut canvas, &textures, &state)?;
        canvas.present();

        clock.wait_for_next_frame();
    }

    tracing::info!(best = state.scoreboard.best, "Exiting");

    Ok(())
}
