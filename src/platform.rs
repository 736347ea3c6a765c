//! Scrolling ground strip
//!
//! Same recycling scheme as the pipes but along x only. The tiles are purely
//! visual; the ground collides through one static full-width box.

use crate::collision::Bounds;
use crate::ring::RingBuffer;

pub struct PlatformStrip {
    tiles: RingBuffer<f32>,
    tile_width: f32,
    /// Top edge of the ground in game coordinates
    pub y: f32,
    collider: Bounds,
    screen_width: f32,
}

impl PlatformStrip {
    pub fn new(screen_width: f32, screen_height: f32, tile_width: f32, tile_height: f32) -> Self {
        let y = screen_height - tile_height;
        let mut strip = PlatformStrip {
            tiles: RingBuffer::with_capacity(Self::tile_count(screen_width, tile_width)),
            tile_width,
            y,
            collider: Bounds::new(0.0, y, screen_width, tile_height),
            screen_width,
        };
        strip.reset();
        strip
    }

    fn tile_count(screen_width: f32, tile_width: f32) -> usize {
        (screen_width / tile_width).ceil() as usize + 1
    }

    /// Lays the tiles edge to edge starting at x = 0.
    pub fn reset(&mut self) {
        self.tiles.clear();
        for i in 0..Self::tile_count(self.screen_width, self.tile_width) {
            self.tiles.push_back(i as f32 * self.tile_width);
        }
    }

    pub fn collider(&self) -> &Bounds {
        &self.collider
    }

    pub fn scroll(&mut self, dx: f32) {
        for x in self.tiles.iter_mut() {
            *x += dx;
        }
    }

    pub fn recycle(&mut self) -> usize {
        let width = self.tile_width;
        let mut recycled = 0;

        while recycled < self.tiles.len() {
            match self.tiles.front() {
                Some(&x) if x + width < 0.0 => {}
                _ => break,
            }

            self.tiles.recycle_front(|slot, back| *slot = back + width);
            recycled += 1;
        }

        recycled
    }

    /// Tile x positions, leftmost first.
    pub fn tiles(&self) -> impl Iterator<Item = f32> + '_ {
        self.tiles.iter().copied()
    }
}
