//! Scrolling pipe pairs
//!
//! Each `Obstacle` carries its draw position and both collision boxes, so the
//! position and the colliders can never drift apart. The train is stored in a
//! `RingBuffer` ordered by x: when the leftmost pair has scrolled completely
//! off-screen it is moved behind the rightmost pair with a fresh random height.

use crate::collision::Bounds;
use crate::config::PipeConfig;
use crate::ring::RingBuffer;
use crate::rng::random_in_range;
use rand::Rng;

/// Geometry shared by every pipe pair, derived once from the pipe sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeLayout {
    pub pipe_width: f32,
    /// Height of a single pipe sprite (and of each collider)
    pub pipe_height: f32,
    pub gap: f32,
    /// Height of the composed pair: two pipes plus the gap
    pub pair_height: f32,
    /// Lowest allowed y for the pair's top edge (highest on screen)
    pub min_height: f32,
    /// Places the gap at the vertical middle of the screen
    pub max_height: f32,
    /// Horizontal distance from one pair's left edge to the next
    pub period: f32,
}

impl PipeLayout {
    pub fn new(pipe_width: f32, pipe_height: f32, screen_height: f32, pipes: &PipeConfig) -> Self {
        let pair_height = pipe_height * 2.0 + pipes.gap;
        let max_height = screen_height * 0.5 - pair_height * 0.5;

        PipeLayout {
            pipe_width,
            pipe_height,
            gap: pipes.gap,
            pair_height,
            min_height: max_height - pipes.height_band,
            max_height,
            period: pipe_width + pipes.distance,
        }
    }

    pub fn sample_height<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        random_in_range(rng, self.min_height, self.max_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Top-left corner of the composed pipe pair
    pub position: (f32, f32),
    pub top: Bounds,
    pub bottom: Bounds,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, layout: &PipeLayout) -> Self {
        let mut obstacle = Obstacle {
            position: (x, y),
            top: Bounds::default(),
            bottom: Bounds::default(),
        };
        obstacle.place(x, y, layout);
        obstacle
    }

    /// Moves the pair and rebuilds both colliders around the new position.
    pub fn place(&mut self, x: f32, y: f32, layout: &PipeLayout) {
        self.position = (x, y);
        self.top = Bounds::new(x, y, layout.pipe_width, layout.pipe_height);
        self.bottom = Bounds::new(
            x,
            y + layout.pipe_height + layout.gap,
            layout.pipe_width,
            layout.pipe_height,
        );
    }

    pub fn scroll(&mut self, dx: f32) {
        self.position.0 += dx;
        self.top.x += dx;
        self.bottom.x += dx;
    }

    pub fn right(&self) -> f32 {
        self.top.right()
    }
}

pub struct ObstacleTrain {
    obstacles: RingBuffer<Obstacle>,
    layout: PipeLayout,
    spawn_offset: f32,
}

impl ObstacleTrain {
    pub fn new(layout: PipeLayout, spawn_offset: f32, screen_width: f32) -> Self {
        ObstacleTrain {
            obstacles: RingBuffer::with_capacity(Self::initial_count(screen_width, &layout)),
            layout,
            spawn_offset,
        }
    }

    /// Enough pairs to cover the screen width, plus one waiting off-screen.
    pub fn initial_count(screen_width: f32, layout: &PipeLayout) -> usize {
        (screen_width / layout.period).ceil() as usize + 1
    }

    pub fn spawn_offset(&self) -> f32 {
        self.spawn_offset
    }

    /// Replaces the train with a fresh set starting at the spawn offset.
    pub fn spawn_initial<R: Rng + ?Sized>(&mut self, screen_width: f32, rng: &mut R) {
        self.obstacles.clear();

        let count = Self::initial_count(screen_width, &self.layout);
        for i in 0..count {
            let x = self.spawn_offset + i as f32 * self.layout.period;
            let y = self.layout.sample_height(rng);
            self.obstacles.push_back(Obstacle::new(x, y, &self.layout));
        }
    }

    pub fn scroll(&mut self, dx: f32) {
        for obstacle in self.obstacles.iter_mut() {
            obstacle.scroll(dx);
        }
    }

    /// Moves every pair that left the screen behind the last one.
    ///
    /// Returns how many pairs were recycled. Bounded by the train length so a
    /// train that is entirely off-screen cannot spin forever.
    pub fn recycle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let layout = self.layout;
        let mut recycled = 0;

        while recycled < self.obstacles.len() {
            match self.obstacles.front() {
                Some(front) if front.right() < 0.0 => {}
                _ => break,
            }

            let y = layout.sample_height(rng);
            self.obstacles.recycle_front(|slot, back| {
                slot.place(back.position.0 + layout.period, y, &layout);
            });
            recycled += 1;
        }

        recycled
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Top then bottom collider of every pair, oldest pair first.
    pub fn colliders(&self) -> impl Iterator<Item = &Bounds> {
        self.obstacles
            .iter()
            .flat_map(|obstacle| [&obstacle.top, &obstacle.bottom])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SCREEN_WIDTH: f32 = 800.0;
    const SCREEN_HEIGHT: f32 = 500.0;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn layout() -> PipeLayout {
        PipeLayout::new(52.0, 320.0, SCREEN_HEIGHT, &PipeConfig::default())
    }

    fn spawned_train(rng: &mut ChaCha8Rng) -> ObstacleTrain {
        let mut train = ObstacleTrain::new(layout(), 1000.0, SCREEN_WIDTH);
        train.spawn_initial(SCREEN_WIDTH, rng);
        train
    }

    #[test]
    fn test_layout_band() {
        let layout = layout();

        assert_eq!(layout.pair_height, 715.0);
        assert_eq!(layout.max_height, -107.5);
        assert_eq!(layout.min_height, -257.5);
        assert_eq!(layout.period, 152.0);
    }

    #[test]
    fn test_colliders_follow_position() {
        let obstacle = Obstacle::new(100.0, -150.0, &layout());

        assert_eq!(obstacle.top, Bounds::new(100.0, -150.0, 52.0, 320.0));
        assert_eq!(obstacle.bottom, Bounds::new(100.0, 245.0, 52.0, 320.0));
    }

    #[test]
    fn test_spawn_initial_count_and_spacing() {
        let mut rng = create_test_rng();
        let train = spawned_train(&mut rng);

        assert_eq!(train.len(), 7);
        assert_eq!(train.colliders().count(), train.len() * 2);

        let xs: Vec<f32> = train.iter().map(|o| o.position.0).collect();
        assert_eq!(xs[0], 1000.0);
        for pair in xs.windows(2) {
            assert_eq!(pair[1] - pair[0], 152.0);
        }
    }

    #[test]
    fn test_recycle_preserves_spacing_and_pairing() {
        let mut rng = create_test_rng();
        let mut train = spawned_train(&mut rng);
        let mut recycle_events = 0;

        // Scroll in whole pixels so spacing stays exact
        for _ in 0..5_000 {
            let back_x = train.iter().last().map(|o| o.position.0).unwrap();

            train.scroll(-1.0);
            let recycled = train.recycle(&mut rng);

            if recycled > 0 {
                recycle_events += 1;
                let new_back = train.iter().last().unwrap();
                assert_eq!(new_back.position.0, back_x - 1.0 + 152.0);
            }

            assert_eq!(train.colliders().count(), train.len() * 2);
            for obstacle in train.iter() {
                assert_eq!(obstacle.top.x, obstacle.position.0);
                assert_eq!(obstacle.bottom.x, obstacle.position.0);
                assert_eq!(obstacle.top.y, obstacle.position.1);
            }

            let xs: Vec<f32> = train.iter().map(|o| o.position.0).collect();
            assert!(xs.windows(2).all(|pair| pair[0] < pair[1]), "train out of order: {:?}", xs);
        }

        assert!(recycle_events > 10);
    }

    #[test]
    fn test_recycled_heights_stay_in_band() {
        let mut rng = create_test_rng();
        let mut train = spawned_train(&mut rng);
        let layout = train.layout;

        for _ in 0..2_000 {
            // Push the front pair off-screen and recycle it
            let front_right = train.iter().next().map(|o| o.right()).unwrap();
            train.scroll(-(front_right + 1.0));
            assert_eq!(train.recycle(&mut rng), 1);

            let y = train.iter().last().unwrap().position.1;
            assert!(y >= layout.min_height && y <= layout.max_height, "height {} outside band", y);
        }
    }

    #[test]
    fn test_recycle_ignores_visible_front() {
        let mut rng = create_test_rng();
        let mut train = spawned_train(&mut rng);

        // Right edge exactly at the screen edge is still on-screen
        train.scroll(-1052.0);
        assert_eq!(train.recycle(&mut rng), 0);

        train.scroll(-0.5);
        assert_eq!(train.recycle(&mut rng), 1);
    }

    #[test]
    fn test_recycle_is_bounded_when_everything_is_off_screen() {
        let mut rng = create_test_rng();
        let mut train = spawned_train(&mut rng);

        train.scroll(-100_000.0);
        assert_eq!(train.recycle(&mut rng), train.len());
    }

    #[test]
    fn test_clear() {
        let mut rng = create_test_rng();
        let mut train = spawned_train(&mut rng);

        train.clear();
        assert!(train.is_empty());
        assert_eq!(train.colliders().count(), 0);
        assert_eq!(train.recycle(&mut rng), 0);
    }
}
