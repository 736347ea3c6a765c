//! Runtime tuning for the game
//!
//! Every gameplay constant lives here so it can be overridden from a JSON file
//! without rebuilding. Each section is `#[serde(default)]`, which means a file
//! only has to mention the values it changes:
//!
//! ```json
//! { "physics": { "gravity": 520.0 }, "debug": { "draw_colliders": false } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800,
            height: 500,
            title: "FlappyBird".to_string(),
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward displacement per second, applied only while running
    pub gravity: f32,
    /// Upward force set by a jump
    pub flap_force: f32,
    /// How fast the jump force bleeds off, per second
    pub force_decay: f32,
    /// Horizontal scroll speed of pipes, ground and checkpoint
    pub scroll_speed: f32,
    pub fixed_dt: f32,
    /// Upper bound for a measured frame time (window drags, debugger pauses)
    pub max_frame_dt: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravity: 400.0,
            flap_force: 600.0,
            force_decay: 700.0,
            scroll_speed: 100.0,
            fixed_dt: 0.01,
            max_frame_dt: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// Vertical opening between the top and bottom pipe
    pub gap: f32,
    /// Horizontal distance between two consecutive pipe pairs
    pub distance: f32,
    /// X of the first pipe pair when a run starts
    pub spawn_offset: f32,
    /// Height of the band the pair's top edge is sampled from
    pub height_band: f32,
}

impl Default for PipeConfig {
    fn default() -> Self {
        PipeConfig {
            gap: 75.0,
            distance: 100.0,
            spawn_offset: 1000.0,
            height_band: 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BirdConfig {
    /// Rotation (degrees) the bird tilts to on a flap
    pub flap_rotation: f32,
    pub flap_rotation_duration: f32,
    /// Time after a flap before the bird starts tipping into a dive
    pub fall_delay: f32,
    pub dive_rotation: f32,
    pub dive_rotation_duration: f32,
    /// Animation frames per second
    pub animation_speed: f32,
}

impl Default for BirdConfig {
    fn default() -> Self {
        BirdConfig {
            flap_rotation: -20.0,
            flap_rotation_duration: 0.1,
            fall_delay: 0.5,
            dive_rotation: 90.0,
            dive_rotation_duration: 0.5,
            animation_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub draw_colliders: bool,
    pub use_fixed_dt: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        DebugConfig {
            draw_colliders: true,
            use_fixed_dt: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub pipes: PipeConfig,
    pub bird: BirdConfig,
    pub debug: DebugConfig,
}

/// Errors that can occur while loading a config file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    /// The file parsed but holds values the game cannot run with
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the first usable config among `candidates`, with the path it came from.
    ///
    /// Missing files are skipped quietly. Files that exist but fail to load are
    /// reported and skipped. Falls back to the defaults when nothing loads.
    pub fn discover(candidates: &[PathBuf]) -> (Self, Option<PathBuf>) {
        for path in candidates {
            if !path.exists() {
                continue;
            }

            match GameConfig::load_from_file(path) {
                Ok(config) => return (config, Some(path.clone())),
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
            }
        }

        (GameConfig::default(), None)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window size must be non-zero");
        }
        if self.window.target_fps == 0 {
            return invalid("target_fps must be non-zero");
        }
        if self.physics.fixed_dt <= 0.0 || self.physics.max_frame_dt <= 0.0 {
            return invalid("timesteps must be positive");
        }
        if self.pipes.gap < 0.0 || self.pipes.height_band < 0.0 {
            return invalid("pipe gap and height band cannot be negative");
        }
        if self.pipes.distance < 0.0 {
            return invalid("pipe distance cannot be negative");
        }
        if self.bird.flap_rotation_duration <= 0.0 || self.bird.dive_rotation_duration <= 0.0 {
            return invalid("rotation durations must be positive");
        }
        if self.bird.fall_delay <= 0.0 {
            return invalid("fall_delay must be positive");
        }

        Ok(())
    }
}
