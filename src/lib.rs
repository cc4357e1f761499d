//! Pipe Flap - A single-screen flap-through-the-pipes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipes, collisions, scoring)
//! - `config`: World dimensions and tuning, validated at startup
//! - `driver`: Fixed-rate tick scheduler for hosts
//! - `autopilot`: Demo-mode input source

pub mod autopilot;
pub mod config;
pub mod driver;
pub mod sim;

pub use config::{ConfigError, SimConfig};
pub use driver::FixedStepDriver;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Undrained game events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Physics, in units per tick
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const SCROLL_SPEED: f32 = 3.0;

    /// Bird defaults
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 70.0;
    pub const PIPE_GAP: f32 = 200.0;
    pub const PIPE_SPACING: f32 = 300.0;
    pub const PIPE_COUNT: usize = 3;
    /// Gap centers spawn at least this far from the top and bottom
    pub const SPAWN_MARGIN: f32 = 150.0;
}
