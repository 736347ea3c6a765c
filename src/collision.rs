/// Collision detection for the bird, pipes and ground
///
/// All game-space geometry is `f32`: the bird moves by sub-pixel amounts every
/// frame, so integer `sdl2::rect::Rect`s are only produced at draw time.
///
/// # Architecture
///
/// - `Bounds`: axis-aligned bounding box in game coordinates
/// - `Collidable` trait: anything that can report its `Bounds`
/// - `aabb_intersect` and `first_collision`: pure functions, no state
use sdl2::rect::Rect;

/// Axis-aligned rectangle, `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        aabb_intersect(self, other)
    }

    /// Rounds to the integer rectangle SDL draws with.
    ///
    /// Negative or zero sizes collapse to 1px so debug overlays stay visible.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width.round().max(1.0) as u32,
            self.height.round().max(1.0) as u32,
        )
    }
}

/// Anything that takes part in collision checks.
pub trait Collidable {
    /// Returns the axis-aligned bounding box in game coordinates.
    fn bounds(&self) -> Bounds;
}

impl Collidable for Bounds {
    fn bounds(&self) -> Bounds {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes. Edges
/// that only touch do not count as a hit.
pub fn aabb_intersect(a: &Bounds, b: &Bounds) -> bool {
    let x_overlap = a.x < b.right() && a.right() > b.x;
    let y_overlap = a.y < b.bottom() && a.bottom() > b.y;

    x_overlap && y_overlap
}

/// Stops at the first overlap. The game only needs to know *whether* the bird
/// hit something, not how many things.
pub fn first_collision<'a, T, I>(entity: &impl Collidable, others: I) -> Option<&'a T>
where
    T: Collidable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let entity_bounds = entity.bounds();
    others
        .into_iter()
        .find(|other| aabb_intersect(&entity_bounds, &other.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let a = Bounds::new(0.0, 0.0, 32.0, 32.0);
        let b = Bounds::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&a, &b));
        assert!(aabb_intersect(&b, &a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let a = Bounds::new(0.0, 0.0, 32.0, 32.0);
        let b = Bounds::new(32.0, 0.0, 32.0, 32.0);

        assert!(!aabb_intersect(&a, &b));
    }

    #[test]
    fn test_aabb_intersect_sub_pixel_overlap() {
        let a = Bounds::new(0.0, 0.0, 32.0, 32.0);
        let b = Bounds::new(31.75, 0.0, 32.0, 32.0);

        assert!(aabb_intersect(&a, &b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let small = Bounds::new(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_first_collision() {
        let bird = Bounds::new(10.0, 10.0, 10.0, 10.0);
        let pipes = [Bounds::new(50.0, 0.0, 5.0, 5.0), Bounds::new(12.0, 12.0, 2.0, 2.0)];

        assert_eq!(first_collision(&bird, &pipes), Some(&pipes[1]));
        assert_eq!(first_collision(&bird, &pipes[..1]), None);
    }

    #[test]
    fn test_to_rect_rounds() {
        let rect = Bounds::new(10.4, -2.6, 33.6, 0.2).to_rect();

        assert_eq!((rect.x(), rect.y()), (10, -3));
        assert_eq!((rect.width(), rect.height()), (34, 1));
    }
}
