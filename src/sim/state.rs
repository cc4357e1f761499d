//! Game state and session commands
//!
//! `GameState` exclusively owns everything that changes during play. Hosts
//! mutate it only through `reset`, `start`, `flap` and `tick`, and read it
//! through `snapshot`.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CrashCause;
use super::entity::{Bird, Pipe};
use super::snapshot::{PipeView, Snapshot};
use crate::config::{ConfigError, SimConfig};
use crate::consts::MAX_PENDING_EVENTS;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Freshly reset, waiting for the first flap or start
    Idle,
    /// Active gameplay; the driver should be ticking
    Playing,
    /// Run ended; ticks are ignored until the next flap
    GameOver,
}

/// Things that happened since the host last drained events.
///
/// At most `MAX_PENDING_EVENTS` are kept; older ones are dropped first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    Scored { pipe_id: u32, score: u32 },
    PipeRecycled { removed: u32, spawned: u32 },
    Crashed { cause: CrashCause },
}

/// Complete simulation state for one game instance
#[derive(Debug, Clone)]
pub struct GameState {
    config: SimConfig,
    /// Seed the RNG was created from
    seed: u64,
    rng: Pcg32,
    /// Player character
    pub bird: Bird,
    /// Live pipes, oldest (leftmost) first
    pub pipes: VecDeque<Pipe>,
    score: u32,
    /// Best score across sessions of this instance (not persisted)
    best_score: u32,
    phase: GamePhase,
    /// Ticks applied in the current session
    pub(crate) time_ticks: u64,
    /// Undrained events, oldest first; cleared on reset
    events: VecDeque<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a reset, idle game. Fails if the config is unplayable.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let bird = Self::spawn_bird(&config);
        let mut state = Self {
            pipes: VecDeque::with_capacity(config.pipe_count),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird,
            score: 0,
            best_score: 0,
            phase: GamePhase::Idle,
            time_ticks: 0,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
            next_id: 1,
        };
        state.reset();
        Ok(state)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_bird(config: &SimConfig) -> Bird {
        Bird::new(
            Vec2::new(config.world_width / 4.0, config.world_height / 2.0),
            config.bird_width,
            config.bird_height,
        )
    }

    /// Build a pipe at `x` with a random gap center inside the spawn band
    pub(crate) fn spawn_pipe(&mut self, x: f32) -> Pipe {
        let id = self.next_entity_id();
        let (spawn_min, spawn_max) = self.config.spawn_band();
        let gap_center = self.rng.random_range(spawn_min..=spawn_max);
        Pipe::new(
            id,
            x,
            gap_center,
            self.config.pipe_gap,
            self.config.pipe_width,
        )
    }

    /// Back to the idle starting layout
    pub fn reset(&mut self) {
        self.bird = Self::spawn_bird(&self.config);

        self.pipes.clear();
        for i in 0..self.config.pipe_count {
            let x = self.config.world_width + i as f32 * self.config.pipe_spacing;
            let pipe = self.spawn_pipe(x);
            self.pipes.push_back(pipe);
        }

        self.score = 0;
        self.time_ticks = 0;
        self.events.clear();
        self.phase = GamePhase::Idle;
        log::info!("Reset: {} pipes, seed {}", self.pipes.len(), self.seed);
    }

    /// Begin play. No effect while playing or after a crash.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Playing;
            self.push_event(GameEvent::Started);
            log::info!("Session started");
        }
    }

    /// Upward impulse, or tap-to-restart after a crash
    pub fn flap(&mut self) {
        if self.is_game_over() {
            // Restart ignores the impulse
            self.reset();
            self.start();
            return;
        }

        self.start();
        self.bird.vel_y = self.config.jump_impulse;
        self.push_event(GameEvent::Flapped);
    }

    /// Terminal transition; the driver stops once it sees `is_playing() == false`
    pub(crate) fn end_game(&mut self, cause: CrashCause) {
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        self.push_event(GameEvent::Crashed { cause });
        log::info!(
            "Game over ({:?}) after {} ticks: score {}, best {}",
            cause,
            self.time_ticks,
            self.score,
            self.best_score
        );
    }

    pub(crate) fn add_point(&mut self, pipe_id: u32) {
        self.score += 1;
        self.push_event(GameEvent::Scored {
            pipe_id,
            score: self.score,
        });
        log::debug!("Scored pipe {} -> {}", pipe_id, self.score);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        let world_height = self.config.world_height;
        Snapshot {
            bird_pos: self.bird.pos,
            bird_bounds: self.bird.bounds(),
            bird_vel_y: self.bird.vel_y,
            pipes: self
                .pipes
                .iter()
                .map(|pipe| PipeView {
                    id: pipe.id,
                    x: pipe.x,
                    gap_center: pipe.gap_center,
                    upper: pipe.upper_rect(),
                    lower: pipe.lower_rect(world_height),
                    scored: pipe.scored,
                })
                .collect(),
            score: self.score,
            best_score: self.best_score,
            game_over: self.is_game_over(),
            is_playing: self.is_playing(),
            time_ticks: self.time_ticks,
        }
    }
}
