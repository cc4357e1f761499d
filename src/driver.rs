//! Fixed-rate tick scheduler
//!
//! Hosts feed wall-clock frame deltas in; the driver runs as many fixed
//! ticks as have accumulated. It only ticks while the state is playing and
//! drops its backlog the moment play stops.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};
use crate::sim::{GameState, tick};

#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    /// Seconds per tick
    dt: f32,
    accumulator: f32,
    max_substeps: u32,
    /// Ticks run since creation
    total_ticks: u64,
}

impl FixedStepDriver {
    pub fn new(tick_rate: f32) -> Self {
        debug_assert!(
            tick_rate.is_finite() && tick_rate > 0.0,
            "tick rate must be positive, got {tick_rate}"
        );
        Self {
            dt: 1.0 / tick_rate,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
            total_ticks: 0,
        }
    }

    /// Driver running at the state's configured tick rate
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.config().tick_rate)
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Fraction of a tick left in the accumulator (for render interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// Run accumulated ticks. Returns how many ran.
    pub fn advance(&mut self, state: &mut GameState, frame_dt: f32) -> u32 {
        self.advance_with(state, frame_dt, |_| {})
    }

    /// Like `advance`, calling `before_tick` ahead of every tick so one-shot
    /// inputs can be applied per step
    pub fn advance_with<F>(
        &mut self,
        state: &mut GameState,
        frame_dt: f32,
        mut before_tick: F,
    ) -> u32
    where
        F: FnMut(&mut GameState),
    {
        if !state.is_playing() {
            self.accumulator = 0.0;
            return 0;
        }

        // Non-finite deltas (NaN from a bad clock) count as no time passing
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            before_tick(state);
            tick(state);
            self.accumulator -= self.dt;
            substeps += 1;
            self.total_ticks += 1;

            if !state.is_playing() {
                self.accumulator = 0.0;
                break;
            }
        }

        if self.accumulator >= self.dt {
            let dropped = (self.accumulator / self.dt) as u32;
            log::warn!(
                "Frame overran {} substeps, dropping {} ticks",
                self.max_substeps,
                dropped
            );
            self.accumulator %= self.dt;
        }

        substeps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    fn playing_state() -> GameState {
        let mut state = GameState::new(SimConfig::default(), 7).unwrap();
        state.start();
        state
    }

    #[test]
    fn test_idle_state_never_ticks() {
        let mut state = GameState::new(SimConfig::default(), 7).unwrap();
        let mut driver = FixedStepDriver::for_state(&state);
        assert_eq!(driver.advance(&mut state, 0.05), 0);
        assert_eq!(state.time_ticks(), 0);
        assert_eq!(driver.alpha(), 0.0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut state = playing_state();
        let mut driver = FixedStepDriver::new(60.0);

        // 0.04s = 2.4 ticks
        assert_eq!(driver.advance(&mut state, 0.04), 2);
        assert!((driver.alpha() - 0.4).abs() < 1e-3);
        // Carried remainder plus 0.012s makes a third tick
        assert_eq!(driver.advance(&mut state, 0.012), 1);
        assert_eq!(state.time_ticks(), 3);
        assert_eq!(driver.total_ticks(), 3);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut state = playing_state();
        let mut driver = FixedStepDriver::new(60.0).with_max_substeps(2);

        assert_eq!(driver.advance(&mut state, 0.1), 2);
        assert!(driver.alpha() < 1.0);
    }

    #[test]
    fn test_long_frames_clamped() {
        // A 5s frame runs exactly what a 0.1s frame does (6 ticks, or 5 after f32 rounding)
        let mut reference_state = playing_state();
        let mut reference = FixedStepDriver::new(60.0);
        let expected = reference.advance(&mut reference_state, 0.1);
        assert!((5..=6).contains(&expected));

        let mut state = playing_state();
        let mut driver = FixedStepDriver::new(60.0);
        assert_eq!(driver.advance(&mut state, 5.0), expected);
        assert_eq!(driver.total_ticks(), u64::from(expected));
        assert_eq!(state.time_ticks(), u64::from(expected));
    }

    #[test]
    fn test_non_finite_frame_ignored() {
        let mut state = playing_state();
        let mut driver = FixedStepDriver::new(60.0);
        assert_eq!(driver.advance(&mut state, f32::NAN), 0);
        assert_eq!(driver.advance(&mut state, f32::INFINITY), 0);
        assert_eq!(driver.alpha(), 0.0);
        // Still usable afterwards
        assert_eq!(driver.advance(&mut state, 0.04), 2);
    }

    #[test]
    #[should_panic(expected = "tick rate must be positive")]
    #[cfg(debug_assertions)]
    fn test_rejects_non_positive_tick_rate() {
        let _ = FixedStepDriver::new(-60.0);
    }

    #[test]
    fn test_stops_on_game_over() {
        let mut state = playing_state();
        state.bird.vel_y = 2000.0;
        let mut driver = FixedStepDriver::new(60.0);

        assert_eq!(driver.advance(&mut state, 0.1), 1);
        assert!(state.is_game_over());
        assert_eq!(driver.alpha(), 0.0);
        assert_eq!(driver.advance(&mut state, 0.1), 0);
    }

    #[test]
    fn test_before_tick_runs_per_step() {
        let mut state = playing_state();
        let mut driver = FixedStepDriver::new(60.0);
        let mut calls = 0;
        let ran = driver.advance_with(&mut state, 0.05, |s| {
            calls += 1;
            s.flap();
        });
        assert_eq!(calls, ran);
        // Flap before the last tick, then one tick of gravity
        assert!((state.bird.vel_y - (-9.4)).abs() < 1e-4);
    }
}
