//! Per-frame state snapshot for renderers
//!
//! Owned copy of everything a frame needs. Nothing in here feeds back into
//! the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Rect;

/// One pipe as seen by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub id: u32,
    pub x: f32,
    pub gap_center: f32,
    pub upper: Rect,
    pub lower: Rect,
    pub scored: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub bird_pos: Vec2,
    pub bird_bounds: Rect,
    pub bird_vel_y: f32,
    /// Oldest (leftmost) first
    pub pipes: Vec<PipeView>,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
    pub is_playing: bool,
    pub time_ticks: u64,
}

impl Snapshot {
    /// Debug/host dump
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Next pipe the bird still has to clear
    pub fn next_pipe(&self) -> Option<&PipeView> {
        let bird_left = self.bird_bounds.left();
        self.pipes.iter().find(|p| p.upper.right() > bird_left)
    }
}
