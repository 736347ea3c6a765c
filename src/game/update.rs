// Input handling and the per-frame simulation step
//
// Frame order (driven from main.rs):
//   1. frame_dt        - pick fixed or measured timestep
//   2. apply_action    - for every input action this frame
//   3. step            - rotation, physics, collisions, score, recycling,
//                        animation, scrolling
//   4. render

use crate::collision::{first_collision, Collidable};
use crate::input_system::GameAction;

use super::{ActionOutcome, Collision, FrameEvents, GameState, RunState};

impl GameState {
    /// Timestep for this frame: the fixed step when toggled on, otherwise the
    /// measured frame time capped at `max_frame_dt`.
    pub fn frame_dt(&self, real_dt: f32) -> f32 {
        if self.use_fixed_dt {
            self.config.physics.fixed_dt
        } else {
            real_dt.clamp(0.0, self.config.physics.max_frame_dt)
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        match action {
            GameAction::ToggleFixedTimestep => {
                self.use_fixed_dt = !self.use_fixed_dt;
                tracing::info!(fixed = self.use_fixed_dt, "Timestep mode changed");
            }
            GameAction::Reset => {
                tracing::info!(score = self.scoreboard.score, "Run reset");
                self.reset();
            }
            GameAction::ToggleColliders => {
                self.draw_colliders = !self.draw_colliders;
                tracing::debug!(visible = self.draw_colliders, "Collider overlay toggled");
            }
            GameAction::Jump => self.jump(),
            GameAction::Quit => return ActionOutcome::Quit,
        }

        ActionOutcome::Continue
    }

    fn jump(&mut self) {
        if self.is_game_over() {
            return;
        }

        if self.run_state == RunState::Idle {
            self.run_state = RunState::Running;
            tracing::info!("Run started");
        }

        if self.obstacles.is_empty() {
            let screen_width = self.screen_width();
            self.obstacles.spawn_initial(screen_width, &mut self.rng);
            self.scoreboard.arm(self.obstacles.spawn_offset());
            tracing::debug!(count = self.obstacles.len(), "Spawned pipes");
        }

        self.bird.flap(self.config.physics.flap_force);
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> FrameEvents {
        let mut events = FrameEvents::default();
        let physics = self.config.physics;

        self.bird.update_rotation(dt);

        if self.is_running() {
            self.bird.apply_gravity(physics.gravity, dt);
            self.bird.apply_force(physics.force_decay, dt);
        }

        events.collision = self.check_collisions();

        if self.scoreboard.update(self.bird.position.0, self.is_running()) {
            events.scored = true;
            tracing::debug!(score = self.scoreboard.score, "Scored");
        }

        events.obstacles_recycled = self.obstacles.recycle(&mut self.rng);
        self.platforms.recycle();

        if !self.is_game_over() {
            self.bird.animation.advance(dt);
        }

        let dx = -self.speed * dt;
        self.scoreboard.scroll(dx);
        self.obstacles.scroll(dx);
        self.platforms.scroll(dx);

        events
    }

    /// Tests the bird against every pipe and the ground.
    ///
    /// The ground wins when both are hit so the bird always ends up resting
    /// on it.
    fn check_collisions(&mut self) -> Option<Collision> {
        let mut hit = None;

        if first_collision(&self.bird, self.obstacles.colliders()).is_some() {
            hit = Some(Collision::Pipe);
        }

        if self.bird.bounds().intersects(self.platforms.collider()) {
            self.bird.position.1 = self.platforms.y;
            hit = Some(Collision::Ground);
        }

        if let Some(kind) = hit {
            self.end_run(kind);
        }

        hit
    }

    fn end_run(&mut self, kind: Collision) {
        if !self.is_game_over() {
            tracing::info!(
                score = self.scoreboard.score,
                best = self.scoreboard.best,
                cause = ?kind,
                "Game over"
            );
        }

        self.run_state = RunState::GameOver;
        self.speed = 0.0;
    }
}
