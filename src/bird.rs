//! The player-controlled bird
//!
//! The bird has no stored velocity. Gravity moves it down by a constant amount
//! per second and a jump sets a `force` that pushes it up while bleeding off
//! linearly, which gives the familiar "hop then drop" arc.
//!
//! Rotation is a separate sub-machine: a flap tilts the bird up quickly, and a
//! fall timer armed by the same flap later tips it into a dive.

use crate::animation::FrameAnimation;
use crate::collision::{Bounds, Collidable};
use crate::config::BirdConfig;

/// Number of sprite frames in the flap animation (down, mid, up).
pub const BIRD_FRAMES: usize = 3;

/// Linear rotation tween in degrees.
///
/// Only one tween is active at a time; starting a new one replaces the old one
/// from wherever the rotation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationTween {
    pub current: f32,
    pub target: f32,
    /// Seconds left until `current` reaches `target`
    pub remaining: f32,
    /// Degrees per second
    pub speed: f32,
}

impl RotationTween {
    pub fn start(&mut self, target: f32, duration: f32) {
        self.target = target;

        if duration <= 0.0 {
            self.current = target;
            self.remaining = 0.0;
            self.speed = 0.0;
            return;
        }

        self.remaining = duration;
        self.speed = (self.target - self.current) / duration;
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.is_active() {
            return;
        }

        self.remaining -= dt;
        self.current += self.speed * dt;

        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.current = self.target;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    /// Pivot point in game coordinates (sprite center)
    pub position: (f32, f32),
    /// Offset from the sprite's top-left corner to the pivot
    pub origin: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub rotation: RotationTween,
    /// Seconds until the dive tween starts, zero when disarmed
    pub fall_timer: f32,
    /// Remaining upward force from the last jump
    pub force: f32,
    pub animation: FrameAnimation,
    motion: BirdConfig,
    spawn: (f32, f32),
}

impl Bird {
    pub fn new(spawn: (f32, f32), width: f32, height: f32, motion: BirdConfig) -> Self {
        Bird {
            position: spawn,
            origin: (width * 0.5, height * 0.5),
            width,
            height,
            rotation: RotationTween::default(),
            fall_timer: 0.0,
            force: 0.0,
            animation: FrameAnimation::new(BIRD_FRAMES, motion.animation_speed),
            motion,
            spawn,
        }
    }

    /// Jump: sets the upward force, tilts up and (re)arms the dive delay.
    ///
    /// A flap during the delay restarts both the tilt and the delay.
    pub fn flap(&mut self, force: f32) {
        self.force = force;
        self.rotation
            .start(self.motion.flap_rotation, self.motion.flap_rotation_duration);
        self.fall_timer = self.motion.fall_delay;
    }

    pub fn update_rotation(&mut self, dt: f32) {
        self.rotation.advance(dt);

        if self.fall_timer > 0.0 {
            self.fall_timer -= dt;

            if self.fall_timer <= 0.0 {
                self.fall_timer = 0.0;
                self.rotation
                    .start(self.motion.dive_rotation, self.motion.dive_rotation_duration);
            }
        }
    }

    pub fn apply_gravity(&mut self, gravity: f32, dt: f32) {
        self.position.1 += gravity * dt;
    }

    /// Pushes the bird up by the remaining force and decays it.
    ///
    /// Does nothing once the force has run out.
    pub fn apply_force(&mut self, decay: f32, dt: f32) {
        if self.force <= 0.0 {
            return;
        }

        self.position.1 -= self.force * dt;
        self.force -= decay * dt;
    }

    pub fn frame_index(&self) -> usize {
        self.animation.frame_index()
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.position.0 - self.origin.0, self.position.1 - self.origin.1)
    }

    pub fn reset(&mut self) {
        self.position = self.spawn;
        self.rotation = RotationTween::default();
        self.fall_timer = 0.0;
        self.force = 0.0;
        self.animation.reset();
    }
}

impl Collidable for Bird {
    fn bounds(&self) -> Bounds {
        let (x, y) = self.top_left();
        Bounds::new(x, y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new((400.0, 250.0), 34.0, 24.0, BirdConfig::default())
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_bounds_anchor_at_origin() {
        let bird = bird();
        assert_eq!(bird.bounds(), Bounds::new(383.0, 238.0, 34.0, 24.0));
    }

    #[test]
    fn test_flap_tilts_up_then_clamps() {
        let mut bird = bird();
        bird.flap(600.0);

        assert_eq!(bird.force, 600.0);
        assert!(approx(bird.rotation.speed, -200.0));
        assert!(approx(bird.fall_timer, 0.5));

        bird.update_rotation(0.05);
        assert!(approx(bird.rotation.current, -10.0));

        bird.update_rotation(0.06);
        assert_eq!(bird.rotation.current, -20.0);
        assert!(!bird.rotation.is_active());
    }

    #[test]
    fn test_fall_timer_starts_dive() {
        let mut bird = bird();
        bird.flap(600.0);

        for _ in 0..55 {
            bird.update_rotation(0.01);
        }

        // The dive tween was armed from -20 towards 90 over half a second
        assert_eq!(bird.fall_timer, 0.0);
        assert_eq!(bird.rotation.target, 90.0);
        assert!(approx(bird.rotation.speed, 220.0));

        for _ in 0..60 {
            bird.update_rotation(0.01);
        }
        assert_eq!(bird.rotation.current, 90.0);
    }

    #[test]
    fn test_second_flap_restarts_fall_timer() {
        let mut bird = bird();
        bird.flap(600.0);
        for _ in 0..40 {
            bird.update_rotation(0.01);
        }

        bird.flap(600.0);
        assert!(approx(bird.fall_timer, 0.5));
        assert_eq!(bird.rotation.target, -20.0);

        for _ in 0..40 {
            bird.update_rotation(0.01);
        }
        // Still short of the restarted delay, so no dive yet
        assert_eq!(bird.rotation.target, -20.0);
    }

    #[test]
    fn test_force_decays_and_stops() {
        let mut bird = bird();
        bird.flap(600.0);

        bird.apply_force(700.0, 0.1);
        assert!(approx(bird.position.1, 190.0));
        assert!(approx(bird.force, 530.0));

        bird.force = -1.0;
        let y = bird.position.1;
        bird.apply_force(700.0, 0.1);
        assert_eq!(bird.position.1, y);
    }

    #[test]
    fn test_gravity_moves_down() {
        let mut bird = bird();
        bird.apply_gravity(400.0, 0.5);
        assert_eq!(bird.position.1, 450.0);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut bird = bird();
        bird.flap(600.0);
        bird.apply_gravity(400.0, 0.5);
        bird.update_rotation(0.2);
        bird.animation.advance(1.0);

        bird.reset();

        assert_eq!(bird.position, (400.0, 250.0));
        assert_eq!(bird.rotation, RotationTween::default());
        assert_eq!(bird.fall_timer, 0.0);
        assert_eq!(bird.force, 0.0);
        assert_eq!(bird.frame_index(), 0);
    }
}
