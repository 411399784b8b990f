//! Badge Pong headless runner
//!
//! Runs the simulation at its configured tick rate with both paddles on
//! autopilot and logs what happens. Pass a JSON config path as the first
//! argument to override the defaults; set `RUST_LOG=debug` to see every event.

use std::time::{Duration, Instant};

use badge_pong::platform::FramePacer;
use badge_pong::sim::{GameEvent, GameState, autopilot_input, tick};
use badge_pong::{ConfigError, GameConfig};

/// Length of the demo run
const DEMO_SECONDS: u64 = 10;

fn main() {
    env_logger::init();
    log::info!("Badge Pong (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)?,
        None => {
            log::info!("No config file given, using badge defaults");
            GameConfig::default()
        }
    };
    log::debug!("Effective config:\n{}", config.to_json()?);

    let mut state = GameState::new(&config)?;
    let mut pacer = FramePacer::new(config.tick_interval());
    let total_ticks = DEMO_SECONDS * u64::from(config.tick_rate);

    let mut hits = 0u64;
    let mut resets = 0u64;
    let mut bounces = 0u64;

    let start = Instant::now();
    while pacer.ticks() < total_ticks {
        let now = start.elapsed().as_secs_f64();
        if !pacer.poll(now) {
            std::thread::sleep(Duration::from_secs_f64(pacer.time_until_next(now)));
            continue;
        }

        if pacer.ticks() % u64::from(config.tick_rate) == 0 {
            log::debug!(
                "tick {}: {} idle loops since the previous tick",
                pacer.ticks(),
                pacer.loops_between_ticks()
            );
        }

        let input = autopilot_input(&state);
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::PaddleHit { .. } => hits += 1,
                GameEvent::BallReset { exited } => {
                    resets += 1;
                    log::info!("Ball left through the {exited} side");
                }
                GameEvent::WallBounce { .. } => bounces += 1,
            }
        }
    }

    let scene = state.scene();
    log::info!(
        "Ran {} ticks in {:.2}s: {} paddle hits, {} wall bounces, {} resets; ball at {}",
        state.time_ticks,
        start.elapsed().as_secs_f64(),
        hits,
        bounces,
        resets,
        scene.ball.pos
    );
    Ok(())
}
