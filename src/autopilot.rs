//! Idle/demo mode
//!
//! Plays the game from the snapshot alone, the same way a host would: it
//! only ever asks for a flap.

use crate::sim::Snapshot;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How far below the gap center the bird may sink before flapping
    pub flap_margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { flap_margin: 20.0 }
    }
}

impl Autopilot {
    /// Whether to flap this tick
    pub fn should_flap(&self, snap: &Snapshot) -> bool {
        if snap.game_over {
            return false;
        }
        if !snap.is_playing {
            // First flap starts the session
            return true;
        }

        let target_y = match snap.next_pipe() {
            Some(pipe) => pipe.gap_center,
            None => snap.bird_pos.y,
        };

        // Only flap while falling so each impulse gets its full rise
        snap.bird_vel_y > 0.0 && snap.bird_pos.y > target_y + self.flap_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::{GameState, tick};

    #[test]
    fn test_starts_idle_game_and_ignores_game_over() {
        let mut state = GameState::new(SimConfig::default(), 5).unwrap();
        let pilot = Autopilot::default();
        assert!(pilot.should_flap(&state.snapshot()));

        state.start();
        state.bird.vel_y = 1000.0;
        tick(&mut state);
        assert!(!pilot.should_flap(&state.snapshot()));
    }

    #[test]
    fn test_clears_pipes() {
        // Narrow spawn band keeps consecutive gaps close together
        let config = SimConfig {
            spawn_min: Some(390.0),
            spawn_max: Some(410.0),
            ..SimConfig::default()
        };
        let mut state = GameState::new(config, 2024).unwrap();
        let pilot = Autopilot::default();

        for _ in 0..1500 {
            if pilot.should_flap(&state.snapshot()) {
                state.flap();
            }
            tick(&mut state);
        }

        assert!(!state.is_game_over(), "crashed at score {}", state.score());
        assert!(state.score() >= 5);
    }
}
