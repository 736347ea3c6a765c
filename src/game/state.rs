// GameState aggregate
//
// Everything that changes while playing lives in one struct that the loop in
// main.rs owns and hands to the update functions by reference.

use crate::bird::Bird;
use crate::config::GameConfig;
use crate::obstacle::{ObstacleTrain, PipeLayout};
use crate::platform::PlatformStrip;
use crate::score::Scoreboard;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{RunState, SpriteMetrics};

pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    pub obstacles: ObstacleTrain,
    pub platforms: PlatformStrip,
    pub scoreboard: Scoreboard,
    pub run_state: RunState,
    /// Current scroll speed, forced to zero on game over
    pub speed: f32,
    pub use_fixed_dt: bool,
    pub draw_colliders: bool,
    pub(super) rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig, metrics: SpriteMetrics) -> Self {
        Self::with_rng(config, metrics, StdRng::from_entropy())
    }

    /// Same as `new` with a caller-provided RNG, for reproducible pipe heights.
    pub fn with_rng(config: GameConfig, metrics: SpriteMetrics, rng: StdRng) -> Self {
        let screen_width = config.window.width as f32;
        let screen_height = config.window.height as f32;

        let layout = PipeLayout::new(metrics.pipe.0, metrics.pipe.1, screen_height, &config.pipes);
        let obstacles = ObstacleTrain::new(layout, config.pipes.spawn_offset, screen_width);
        let platforms = PlatformStrip::new(screen_width, screen_height, metrics.base.0, metrics.base.1);
        let bird = Bird::new(
            (screen_width * 0.5, screen_height * 0.5),
            metrics.bird.0,
            metrics.bird.1,
            config.bird,
        );

        GameState {
            bird,
            obstacles,
            platforms,
            scoreboard: Scoreboard::new(layout.period),
            run_state: RunState::Idle,
            speed: config.physics.scroll_speed,
            use_fixed_dt: config.debug.use_fixed_dt,
            draw_colliders: config.debug.draw_colliders,
            rng,
            config,
        }
    }

    pub fn screen_width(&self) -> f32 {
        self.config.window.width as f32
    }

    pub fn screen_height(&self) -> f32 {
        self.config.window.height as f32
    }

    /// Gravity and jump force apply. Stays true after a crash so the bird
    /// can drop to the ground.
    pub fn is_running(&self) -> bool {
        matches!(self.run_state, RunState::Running | RunState::GameOver)
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    /// Back to the idle screen. Debug toggles and the session best survive.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.platforms.reset();
        self.bird.reset();
        self.scoreboard.reset();
        self.run_state = RunState::Idle;
        self.speed = self.config.physics.scroll_speed;
    }
}
