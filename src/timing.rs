use std::time::{Duration, Instant};

/// Measures real frame time and paces the loop to a target rate.
pub struct FrameClock {
    last: Instant,
    frame_budget: Duration,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        FrameClock {
            last: Instant::now(),
            frame_budget: Duration::from_secs(1) / target_fps.max(1),
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32()
    }

    /// Sleeps for whatever is left of this frame's budget.
    pub fn wait_for_next_frame(&self) {
        let spent = self.last.elapsed();
        if let Some(remaining) = self.frame_budget.checked_sub(spent) {
            std::thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(FrameClock::new(50).frame_budget, Duration::from_millis(20));
        // Zero fps must not divide by zero
        assert_eq!(FrameClock::new(0).frame_budget, Duration::from_secs(1));
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = FrameClock::new(60);
        std::thread::sleep(Duration::from_millis(5));

        let dt = clock.tick();

        assert!(dt >= 0.005, "dt was {}", dt);
        assert!(clock.tick() < dt);
    }
}
