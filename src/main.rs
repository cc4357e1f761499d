//! Pipe Flap entry point
//!
//! Headless native host: loads config, then lets the autopilot play one
//! session through the fixed-step driver and logs what happened.
//!
//! Usage: `pipe-flap [config.json] [seed]`

use pipe_flap::autopilot::Autopilot;
use pipe_flap::sim::{GameEvent, GameState};
use pipe_flap::{FixedStepDriver, SimConfig};

/// Simulated wall-clock frame (seconds)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after this many simulated seconds
const MAX_SECONDS: f32 = 120.0;

fn load_config(path: Option<&str>) -> Result<SimConfig, String> {
    let Some(path) = path else {
        log::info!("Using default config");
        return Ok(SimConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let config = SimConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))?;
    log::info!("Loaded config from {}", path);
    Ok(config)
}

fn main() {
    env_logger::init();
    log::info!("Pipe Flap (headless) starting...");

    let args: Vec<String> = std::env::args().collect();
    let config = match load_config(args.get(1).map(String::as_str)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let seed = args
        .get(2)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };
    let mut driver = FixedStepDriver::for_state(&state);
    let pilot = Autopilot::default();

    // Tap to start, as a player would
    state.flap();

    let max_frames = (MAX_SECONDS / FRAME_DT) as u32;
    for _ in 0..max_frames {
        driver.advance_with(&mut state, FRAME_DT, |s| {
            if pilot.should_flap(&s.snapshot()) {
                s.flap();
            }
        });

        for event in state.drain_events() {
            match event {
                GameEvent::Scored { score, .. } => log::info!("Score {}", score),
                GameEvent::Crashed { cause } => log::info!("Crashed: {:?}", cause),
                other => log::trace!("{:?}", other),
            }
        }

        if !state.is_playing() {
            break;
        }
    }

    let snap = state.snapshot();
    match snap.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot serialization failed: {}", e),
    }
    println!(
        "Final score: {} ({} ticks, {})",
        snap.score,
        driver.total_ticks(),
        if snap.game_over { "crashed" } else { "survived" }
    );
}
