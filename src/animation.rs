/// Time-driven sprite frame cycling.
///
/// The accumulator grows by `speed * dt` and the visible frame is its integer
/// part wrapped to the frame count, so the animation speed is independent of
/// the frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation {
    pub total_frames: usize,
    pub accumulator: f32,
    /// Frames per second
    pub speed: f32,
}

impl FrameAnimation {
    pub fn new(total_frames: usize, speed: f32) -> Self {
        FrameAnimation {
            total_frames,
            accumulator: 0.0,
            speed,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.accumulator += self.speed * dt;
    }

    pub fn frame_index(&self) -> usize {
        if self.total_frames == 0 {
            return 0;
        }
        (self.accumulator.max(0.0).floor() as usize) % self.total_frames
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_wraps() {
        let mut animation = FrameAnimation::new(3, 5.0);
        assert_eq!(animation.frame_index(), 0);

        animation.advance(0.25); // 1.25
        assert_eq!(animation.frame_index(), 1);

        animation.advance(0.5); // 3.75
        assert_eq!(animation.frame_index(), 0);

        animation.advance(0.2); // 4.75
        assert_eq!(animation.frame_index(), 1);
    }

    #[test]
    fn test_zero_frames_is_safe() {
        let mut animation = FrameAnimation::new(0, 5.0);
        animation.advance(1.0);
        assert_eq!(animation.frame_index(), 0);
    }

    #[test]
    fn test_reset() {
        let mut animation = FrameAnimation::new(3, 5.0);
        animation.advance(1.0);
        animation.reset();
        assert_eq!(animation.accumulator, 0.0);
    }
}
