/// Checkpoint-based scoring.
///
/// The checkpoint is an x coordinate that scrolls with the pipes. Each time the
/// bird reaches it the score goes up by one and the checkpoint jumps ahead by one
/// obstacle period, to the next pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub score: u32,
    /// Best score of this session (not saved between launches)
    pub best: u32,
    pub checkpoint: f32,
    period: f32,
}

impl Scoreboard {
    pub fn new(period: f32) -> Self {
        Scoreboard {
            score: 0,
            best: 0,
            checkpoint: 0.0,
            period,
        }
    }

    /// Places the first checkpoint, normally on the first pipe pair.
    pub fn arm(&mut self, checkpoint: f32) {
        self.checkpoint = checkpoint;
    }

    /// Scores at most once per call. Returns whether the score changed.
    pub fn update(&mut self, bird_x: f32, running: bool) -> bool {
        if !running || self.checkpoint > bird_x {
            return false;
        }

        self.score += 1;
        self.best = self.best.max(self.score);
        self.checkpoint += self.period;
        true
    }

    pub fn scroll(&mut self, dx: f32) {
        self.checkpoint += dx;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.checkpoint = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crossing_scores_once() {
        let mut board = Scoreboard::new(152.0);
        board.arm(1000.0);

        let bird_x = 400.0;
        let mut crossings = 0;
        // Sweep the checkpoint past the bird in small steps
        for _ in 0..700 {
            board.scroll(-1.0);
            if board.update(bird_x, true) {
                crossings += 1;
            }
        }

        // 700 steps take the checkpoint from 1000 to 300, past the bird once
        assert_eq!(crossings, 1);
        assert_eq!(board.score, 1);
        assert_eq!(board.checkpoint, 300.0 + 152.0);
    }

    #[test]
    fn test_no_score_while_not_running() {
        let mut board = Scoreboard::new(152.0);
        board.arm(0.0);

        assert!(!board.update(400.0, false));
        assert_eq!(board.score, 0);
    }

    #[test]
    fn test_best_survives_reset() {
        let mut board = Scoreboard::new(152.0);
        board.arm(0.0);
        board.update(400.0, true);
        board.update(400.0, true);

        board.reset();

        assert_eq!(board.score, 0);
        assert_eq!(board.best, 2);
        assert_eq!(board.checkpoint, 0.0);
    }
}
