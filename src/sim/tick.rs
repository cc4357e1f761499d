//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::detect_crash;
use super::state::{GameEvent, GameState};

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    let (gravity, scroll_speed, spacing, world_height) = {
        let c = state.config();
        (c.gravity, c.scroll_speed, c.pipe_spacing, c.world_height)
    };

    // Semi-implicit Euler: velocity first, then position
    state.bird.vel_y += gravity;
    state.bird.pos.y += state.bird.vel_y;

    for pipe in state.pipes.iter_mut() {
        pipe.x -= scroll_speed;
    }

    recycle_pipes(state, spacing);

    if let Some(cause) = detect_crash(&state.bird, &state.pipes, world_height) {
        state.end_game(cause);
        return;
    }

    // Each pipe scores exactly once, when its center passes the bird
    let bird_x = state.bird.pos.x;
    let mut passed = Vec::new();
    for pipe in state.pipes.iter_mut() {
        if !pipe.scored && pipe.center_x() < bird_x {
            pipe.scored = true;
            passed.push(pipe.id);
        }
    }
    for id in passed {
        state.add_point(id);
    }
}

/// Replace the front pipe once it is fully past the left edge
fn recycle_pipes(state: &mut GameState, spacing: f32) {
    let off_screen = state.pipes.front().is_some_and(|p| p.right() < 0.0);
    if !off_screen {
        return;
    }

    let Some(removed) = state.pipes.pop_front() else {
        return;
    };
    // A lone pipe is followed by its own replacement
    let last_x = state.pipes.back().map_or(removed.x, |p| p.x);
    let pipe = state.spawn_pipe(last_x + spacing);
    log::debug!(
        "Recycled pipe {} -> {} at x {:.1} (gap {:.1})",
        removed.id,
        pipe.id,
        pipe.x,
        pipe.gap_center
    );
    state.push_event(GameEvent::PipeRecycled {
        removed: removed.id,
        spawned: pipe.id,
    });
    state.pipes.push_back(pipe);
}
