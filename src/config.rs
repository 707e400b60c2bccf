// config.rs - Startup configuration: compiled defaults, optional JSON file, CLI overrides
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

pub const DEFAULT_RESOLUTION: [u32; 2] = [1920, 1080];
pub const DEFAULT_LOOK_SPEED: f32 = 0.003;
pub const DEFAULT_MAX_VELOCITY: f32 = 2.0;
pub const DEFAULT_SPEED_ACCELERATION: f32 = 1.5;
pub const DEFAULT_SPEED_DECELERATION: f32 = 0.6;
pub const DEFAULT_START_POSITION: [f32; 3] = [0.0, 0.0, 12.0];
pub const DEFAULT_MAX_FPS: u32 = 60;

/// Every tunable of the demo. Fields missing from a config file keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Window size in physical pixels
    pub resolution: [u32; 2],
    /// Borderless fullscreen on the current monitor
    pub full_screen: bool,
    /// Radians of rotation per pixel of mouse movement
    pub look_speed: f32,
    /// Upper bound on velocity length, units/s
    pub max_velocity: f32,
    /// Units/s² applied while a movement key is held
    pub speed_acceleration: f32,
    /// Per-tick multiplicative damping when no movement key is held
    pub speed_deceleration: f32,
    /// Initial world-space camera position
    pub start_position: [f32; 3],
    /// Target tick rate
    pub max_fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            full_screen: false,
            look_speed: DEFAULT_LOOK_SPEED,
            max_velocity: DEFAULT_MAX_VELOCITY,
            speed_acceleration: DEFAULT_SPEED_ACCELERATION,
            speed_deceleration: DEFAULT_SPEED_DECELERATION,
            start_position: DEFAULT_START_POSITION,
            max_fps: DEFAULT_MAX_FPS,
        }
    }
}

impl Config {
    /// Parse a JSON config document
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid config JSON")
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Apply command-line overrides on top of this config
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.fullscreen {
            self.full_screen = true;
        }
        if let Some(width) = cli.width {
            self.resolution[0] = width;
        }
        if let Some(height) = cli.height {
            self.resolution[1] = height;
        }
        if let Some(max_fps) = cli.max_fps {
            self.max_fps = max_fps;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.resolution[0] == 0 || self.resolution[1] == 0 {
            bail!(
                "resolution must be non-zero, got {}x{}",
                self.resolution[0],
                self.resolution[1]
            );
        }
        if self.max_fps == 0 {
            bail!("max_fps must be positive");
        }
        if !(0.0..1.0).contains(&self.speed_deceleration) {
            bail!(
                "speed_deceleration must be in [0, 1), got {}",
                self.speed_deceleration
            );
        }
        for (name, value) in [
            ("look_speed", self.look_speed),
            ("max_velocity", self.max_velocity),
            ("speed_acceleration", self.speed_acceleration),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number, got {}", name, value);
            }
        }
        if self.start_position.iter().any(|c| !c.is_finite()) {
            bail!("start_position must be finite, got {:?}", self.start_position);
        }
        Ok(())
    }

    /// Duration of one tick at the target rate, in seconds
    pub fn target_frame_time(&self) -> f32 {
        1.0 / self.max_fps as f32
    }
}
