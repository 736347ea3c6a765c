// Shared enums and helper structs used by the game state and the renderer

/// Run state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Bird hovers at the spawn point, nothing scrolls
    Idle,
    /// Gravity, jumps and scrolling are live
    Running,
    /// Hit something: scrolling is frozen, the bird still falls to the ground
    GameOver,
}

/// What the bird ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Pipe,
    Ground,
}

/// Result of handling one input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

/// Things that happened during a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameEvents {
    pub scored: bool,
    pub collision: Option<Collision>,
    pub obstacles_recycled: usize,
}

/// Pixel sizes of the sprites the game logic depends on
///
/// Filled from the loaded textures at startup, which keeps the game state free
/// of SDL types. The defaults are the sizes of the stock art.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    pub bird: (f32, f32),
    /// A single pipe, not the composed pair
    pub pipe: (f32, f32),
    pub base: (f32, f32),
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        SpriteMetrics {
            bird: (34.0, 24.0),
            pipe: (52.0, 320.0),
            base: (336.0, 112.0),
        }
    }
}
