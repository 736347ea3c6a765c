/// Scene textures and the per-frame draw
///
/// Drawing order, back to front:
///
/// 1. Sky clear and background strip
/// 2. Pipe pairs
/// 3. Debug colliders (pipes and bird)
/// 4. Bird, rotated around its origin
/// 5. Ground tiles
/// 6. Checkpoint line, score and hint text
///
/// The background strip and the pipe pair are composed once into render
/// targets at load time, so each frame is one copy per pipe pair instead of two.
use crate::collision::{Bounds, Collidable};
use crate::game::{GameState, RunState, SpriteMetrics};
use crate::text::draw_text_centered;
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::path::Path;

const BIRD_FRAME_FILES: [&str; 3] = [
    "yellowbird-downflap.png",
    "yellowbird-midflap.png",
    "yellowbird-upflap.png",
];

/// Loads a texture with the file name in the error message
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))
}

fn texture_size(texture: &Texture) -> (u32, u32) {
    let query = texture.query();
    (query.width, query.height)
}

/// Creates a transparent render target and lets `draw` fill it.
fn compose<'a, F>(
    canvas: &mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    draw: F,
) -> Result<Texture<'a>, String>
where
    F: FnOnce(&mut Canvas<Window>) -> Result<(), String>,
{
    let mut target = texture_creator
        .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
        .map_err(|e| e.to_string())?;
    target.set_blend_mode(BlendMode::Blend);

    let mut result = Ok(());
    canvas
        .with_texture_canvas(&mut target, |target_canvas| {
            target_canvas.set_draw_color(Color::RGBA(0, 0, 0, 0));
            target_canvas.clear();
            result = draw(target_canvas);
        })
        .map_err(|e| e.to_string())?;
    result?;

    Ok(target)
}

fn dest_rect(x: f32, y: f32, width: u32, height: u32) -> Rect {
    Rect::new(x.round() as i32, y.round() as i32, width, height)
}

pub struct SceneTextures<'a> {
    background: Texture<'a>,
    pipes: Texture<'a>,
    base: Texture<'a>,
    bird_frames: Vec<Texture<'a>>,
    metrics: SpriteMetrics,
}

impl<'a> SceneTextures<'a> {
    /// Loads every sprite from `assets_dir` and composes the static layers.
    pub fn load(
        canvas: &mut Canvas<Window>,
        texture_creator: &'a TextureCreator<WindowContext>,
        assets_dir: &Path,
        screen_width: u32,
        pipe_gap: f32,
    ) -> Result<Self, String> {
        let bird_frames = BIRD_FRAME_FILES
            .iter()
            .map(|file| load_texture(texture_creator, &assets_dir.join(file)))
            .collect::<Result<Vec<_>, String>>()?;
        let base = load_texture(texture_creator, &assets_dir.join("base.png"))?;

        let day = load_texture(texture_creator, &assets_dir.join("background-day.png"))?;
        let (day_w, day_h) = texture_size(&day);
        let tiles = screen_width.div_ceil(day_w) + 1;
        let background = compose(canvas, texture_creator, day_w * tiles, day_h, |c| {
            for i in 0..tiles {
                c.copy(&day, None, Rect::new((i * day_w) as i32, 0, day_w, day_h))?;
            }
            Ok(())
        })?;

        let pipe = load_texture(texture_creator, &assets_dir.join("pipe-green.png"))?;
        let (pipe_w, pipe_h) = texture_size(&pipe);
        let gap = pipe_gap.round().max(0.0) as u32;
        let pipes = compose(canvas, texture_creator, pipe_w, pipe_h * 2 + gap, |c| {
            // Top pipe is the same sprite turned upside down
            c.copy_ex(&pipe, None, Rect::new(0, 0, pipe_w, pipe_h), 0.0, None, true, true)?;
            c.copy(&pipe, None, Rect::new(0, (pipe_h + gap) as i32, pipe_w, pipe_h))
        })?;

        let (bird_w, bird_h) = texture_size(&bird_frames[0]);
        let (base_w, base_h) = texture_size(&base);
        let metrics = SpriteMetrics {
            bird: (bird_w as f32, bird_h as f32),
            pipe: (pipe_w as f32, pipe_h as f32),
            base: (base_w as f32, base_h as f32),
        };

        tracing::debug!(?metrics, "Loaded scene textures");

        Ok(SceneTextures {
            background,
            pipes,
            base,
            bird_frames,
            metrics,
        })
    }

    pub fn metrics(&self) -> SpriteMetrics {
        self.metrics
    }
}

/// Draws one complete frame (without presenting it).
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    textures: &SceneTextures,
    state: &GameState,
) -> Result<(), String> {
    let screen_width = state.screen_width();
    let screen_height = state.screen_height();

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGB(102, 191, 255));
    canvas.clear();

    let (bg_w, bg_h) = texture_size(&textures.background);
    canvas.copy(
        &textures.background,
        None,
        dest_rect(0.0, screen_height - bg_h as f32, bg_w, bg_h),
    )?;

    let (pair_w, pair_h) = texture_size(&textures.pipes);
    for obstacle in state.obstacles.iter() {
        let (x, y) = obstacle.position;
        canvas.copy(&textures.pipes, None, dest_rect(x, y, pair_w, pair_h))?;
    }

    if state.draw_colliders {
        canvas.set_draw_color(Color::RGBA(230, 41, 55, 150));
        let bird_bounds = state.bird.bounds();
        let rects: Vec<Rect> = state
            .obstacles
            .colliders()
            .chain(std::iter::once(&bird_bounds))
            .map(Bounds::to_rect)
            .collect();
        canvas.fill_rects(&rects)?;
    }

    render_bird(canvas, textures, state)?;

    let (base_w, base_h) = texture_size(&textures.base);
    for x in state.platforms.tiles() {
        canvas.copy(&textures.base, None, dest_rect(x, state.platforms.y, base_w, base_h))?;
    }

    if state.draw_colliders {
        let x = state.scoreboard.checkpoint.round() as i32;
        canvas.set_draw_color(Color::RGB(0, 228, 48));
        canvas.draw_line(Point::new(x, 0), Point::new(x, screen_height as i32))?;
    }

    render_hud(canvas, state, screen_width, screen_height)
}

fn render_bird(
    canvas: &mut Canvas<Window>,
    textures: &SceneTextures,
    state: &GameState,
) -> Result<(), String> {
    let bird = &state.bird;
    let Some(frame) = textures.bird_frames.get(bird.frame_index()) else {
        return Ok(());
    };

    let (w, h) = texture_size(frame);
    let (left, top) = bird.top_left();
    let pivot = Point::new(bird.origin.0.round() as i32, bird.origin.1.round() as i32);

    canvas.copy_ex(
        frame,
        None,
        dest_rect(left, top, w, h),
        bird.rotation.current as f64,
        pivot,
        false,
        false,
    )
}

fn render_hud(
    canvas: &mut Canvas<Window>,
    state: &GameState,
    screen_width: f32,
    screen_height: f32,
) -> Result<(), String> {
    let center_x = (screen_width * 0.5) as i32;
    let white = Color::RGB(255, 255, 255);

    draw_text_centered(
        canvas,
        &state.scoreboard.score.to_string(),
        center_x,
        (screen_height * 0.1) as i32,
        white,
        6,
    )?;

    match state.run_state {
        RunState::Idle => {
            draw_text_centered(canvas, "PRESS W TO FLAP", center_x, (screen_height * 0.65) as i32, white, 2)?;
        }
        RunState::GameOver => {
            draw_text_centered(
                canvas,
                "GAME OVER",
                center_x,
                (screen_height * 0.3) as i32,
                Color::RGB(255, 200, 60),
                4,
            )?;
            draw_text_centered(
                canvas,
                &format!("BEST: {}", state.scoreboard.best),
                center_x,
                (screen_height * 0.3) as i32 + 45,
                white,
                2,
            )?;
            draw_text_centered(canvas, "R TO RESTART", center_x, (screen_height * 0.3) as i32 + 75, white, 2)?;
        }
        RunState::Running => {}
    }

    Ok(())
}
