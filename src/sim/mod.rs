//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pipes oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CrashCause, detect_crash};
pub use entity::{Bird, Pipe, Rect};
pub use snapshot::{PipeView, Snapshot};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
