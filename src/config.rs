//! Simulation configuration
//!
//! World bounds and tuning are fixed for the lifetime of a `GameState`.
//! Loaded from JSON at startup (missing fields fall back to defaults) and
//! validated once before the engine accepts them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised when validating or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("pipe gap {gap} exceeds world height {world_height}")]
    GapTooTall { gap: f32, world_height: f32 },
    #[error("pipe width {width} exceeds pipe spacing {spacing}")]
    PipeWiderThanSpacing { width: f32, spacing: f32 },
    #[error("pipe count must be at least 1")]
    NoPipes,
    #[error("spawn band [{min}, {max}] is empty")]
    EmptySpawnBand { min: f32, max: f32 },
    #[error("spawn band [{min}, {max}] lets a {gap} gap leave a world of height {world_height}")]
    SpawnBandOutOfWorld {
        min: f32,
        max: f32,
        gap: f32,
        world_height: f32,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static configuration for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Width of the world in world units.
    pub world_width: f32,
    /// Height of the world in world units (y grows downward).
    pub world_height: f32,
    /// Velocity added each tick (units/tick²).
    pub gravity: f32,
    /// Velocity set by a flap (negative = upward).
    pub jump_impulse: f32,
    /// Pipe movement per tick toward the left edge.
    pub scroll_speed: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub pipe_width: f32,
    /// Vertical size of the passable opening.
    pub pipe_gap: f32,
    /// Horizontal distance between consecutive pipes.
    pub pipe_spacing: f32,
    /// Pipes alive at any time.
    pub pipe_count: usize,
    /// Ticks per second the driver should run at.
    pub tick_rate: f32,
    /// Lowest allowed gap center; `SPAWN_MARGIN` below the top when unset.
    pub spawn_min: Option<f32>,
    /// Highest allowed gap center; `SPAWN_MARGIN` above the bottom when unset.
    pub spawn_max: Option<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::for_world(WORLD_WIDTH, WORLD_HEIGHT)
    }
}

impl SimConfig {
    /// Default tuning for a world of the given size
    pub fn for_world(world_width: f32, world_height: f32) -> Self {
        Self {
            world_width,
            world_height,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_count: PIPE_COUNT,
            tick_rate: TICK_RATE_HZ,
            spawn_min: None,
            spawn_max: None,
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Gap-center band, derived from the world height unless set explicitly
    pub fn spawn_band(&self) -> (f32, f32) {
        (
            self.spawn_min.unwrap_or(SPAWN_MARGIN),
            self.spawn_max.unwrap_or(self.world_height - SPAWN_MARGIN),
        )
    }

    /// Fixed timestep in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Reject configurations that would produce an unplayable world
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("scroll_speed", self.scroll_speed),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("tick_rate", self.tick_rate),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        let (spawn_min, spawn_max) = self.spawn_band();
        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("spawn_min", spawn_min),
            ("spawn_max", spawn_max),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        if self.pipe_gap > self.world_height {
            return Err(ConfigError::GapTooTall {
                gap: self.pipe_gap,
                world_height: self.world_height,
            });
        }
        if self.pipe_width > self.pipe_spacing {
            return Err(ConfigError::PipeWiderThanSpacing {
                width: self.pipe_width,
                spacing: self.pipe_spacing,
            });
        }
        if self.pipe_count == 0 {
            return Err(ConfigError::NoPipes);
        }
        if spawn_min > spawn_max {
            return Err(ConfigError::EmptySpawnBand {
                min: spawn_min,
                max: spawn_max,
            });
        }

        let half_gap = self.pipe_gap / 2.0;
        if spawn_min - half_gap < 0.0 || spawn_max + half_gap > self.world_height {
            return Err(ConfigError::SpawnBandOutOfWorld {
                min: spawn_min,
                max: spawn_max,
                gap: self.pipe_gap,
                world_height: self.world_height,
            });
        }

        Ok(())
    }
}
