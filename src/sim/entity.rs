//! Bird and pipe entities
//!
//! Plain data plus geometric queries. Only the tick mutates these.
//! World space: origin top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Center position; x is fixed after creation
    pub pos: Vec2,
    /// Vertical velocity in units/tick (positive = downward)
    pub vel_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bird {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            width,
            height,
        }
    }

    /// Collision box centered on the bird
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.width, self.height)
    }
}

/// A pipe pair with a passable gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    pub id: u32,
    /// Left edge
    pub x: f32,
    /// Vertical midpoint of the gap
    pub gap_center: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Set once the bird has passed this pipe's center
    pub scored: bool,
}

impl Pipe {
    pub fn new(id: u32, x: f32, gap_center: f32, gap_height: f32, width: f32) -> Self {
        Self {
            id,
            x,
            gap_center,
            gap_height,
            width,
            scored: false,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center - self.gap_height / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center + self.gap_height / 2.0
    }

    /// Blocking rectangle from the world top down to the gap
    pub fn upper_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top())
    }

    /// Blocking rectangle from the gap down to the world bottom
    pub fn lower_rect(&self, world_height: f32) -> Rect {
        let top = self.gap_bottom();
        Rect::new(self.x, top, self.width, world_height - top)
    }
}
