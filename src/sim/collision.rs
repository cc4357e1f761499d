//! Collision detection
//!
//! The bird's box is tested against the world's vertical extent and against
//! both blocking rectangles of every live pipe.

use serde::{Deserialize, Serialize};

use super::entity::{Bird, Pipe, Rect};

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Flew entirely above the world
    Ceiling,
    /// Fell entirely below the world
    Ground,
    /// Hit the pipe with this id
    Pipe { id: u32 },
}

/// Box fully outside `[0, world_height]` vertically
pub fn out_of_world(bounds: &Rect, world_height: f32) -> Option<CrashCause> {
    if bounds.bottom() < 0.0 {
        Some(CrashCause::Ceiling)
    } else if bounds.top() > world_height {
        Some(CrashCause::Ground)
    } else {
        None
    }
}

/// First pipe whose upper or lower rectangle overlaps `bounds`
pub fn pipe_hit<'a, I>(bounds: &Rect, pipes: I, world_height: f32) -> Option<CrashCause>
where
    I: IntoIterator<Item = &'a Pipe>,
{
    let mut hit = None;
    // No early exit: three pipes, and every one is inspected each tick
    for pipe in pipes {
        let touching = bounds.intersects(&pipe.upper_rect())
            || bounds.intersects(&pipe.lower_rect(world_height));
        if touching && hit.is_none() {
            hit = Some(CrashCause::Pipe { id: pipe.id });
        }
    }
    hit
}

/// Full crash check for the current tick
pub fn detect_crash<'a, I>(bird: &Bird, pipes: I, world_height: f32) -> Option<CrashCause>
where
    I: IntoIterator<Item = &'a Pipe>,
{
    let bounds = bird.bounds();
    // Both checks always run; a world-bounds crash is reported first
    let escaped = out_of_world(&bounds, world_height);
    let hit = pipe_hit(&bounds, pipes, world_height);
    escaped.or(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const H: f32 = 800.0;
    const NO_PIPES: [Pipe; 0] = [];

    fn bird_at(y: f32) -> Bird {
        Bird::new(Vec2::new(100.0, y), 34.0, 24.0)
    }

    #[test]
    fn test_world_bounds() {
        assert_eq!(detect_crash(&bird_at(400.0), &NO_PIPES, H), None);
        // Partially above the top is still in play
        assert_eq!(detect_crash(&bird_at(-5.0), &NO_PIPES, H), None);
        assert_eq!(detect_crash(&bird_at(-13.0), &NO_PIPES, H), Some(CrashCause::Ceiling));
        assert_eq!(detect_crash(&bird_at(813.0), &NO_PIPES, H), Some(CrashCause::Ground));
    }

    #[test]
    fn test_pipe_hits() {
        // Gap spans 300..500
        let pipe = Pipe::new(7, 90.0, 400.0, 200.0, 70.0);
        assert_eq!(detect_crash(&bird_at(400.0), [&pipe], H), None);
        assert_eq!(
            detect_crash(&bird_at(295.0), [&pipe], H),
            Some(CrashCause::Pipe { id: 7 })
        );
        assert_eq!(
            detect_crash(&bird_at(505.0), [&pipe], H),
            Some(CrashCause::Pipe { id: 7 })
        );

        // Same heights but horizontally clear of the pipe
        let far = Pipe::new(8, 300.0, 400.0, 200.0, 70.0);
        assert_eq!(detect_crash(&bird_at(295.0), [&far], H), None);
    }

    #[test]
    fn test_bounds_crash_wins_over_pipe_hit() {
        // Box below the world while still level with a pipe's lower rectangle
        let pipe = Pipe::new(3, 90.0, 400.0, 200.0, 70.0);
        assert_eq!(
            pipe_hit(&bird_at(813.0).bounds(), [&pipe], 900.0),
            Some(CrashCause::Pipe { id: 3 })
        );
        assert_eq!(detect_crash(&bird_at(813.0), [&pipe], H), Some(CrashCause::Ground));
    }

    #[test]
    fn test_reports_first_hit_pipe() {
        let a = Pipe::new(1, 90.0, 100.0, 200.0, 70.0);
        let b = Pipe::new(2, 95.0, 700.0, 200.0, 70.0);
        assert_eq!(
            detect_crash(&bird_at(400.0), [&a, &b], H),
            Some(CrashCause::Pipe { id: 1 })
        );
    }
}
