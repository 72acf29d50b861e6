//! Rotor Run entry point
//!
//! Headless demo: a bang-bang autopilot flies a few runs through the
//! simulation and the results land in the log. A graphical host would drive
//! the same [`GameLoop`] surface once per display refresh.

use rotor_run::sim::RunPhase;
use rotor_run::{GameLoop, LiftSignal};

/// Frames a demo run may burn before it is cut off
const MAX_DEMO_TICKS: u64 = 5_000;

fn main() {
    env_logger::init();
    log::info!("Rotor Run (headless demo) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("seed: {seed}");

    let mut game = GameLoop::new(seed);
    let lift = game.lift_signal();

    for run in 1..=3 {
        let mut next = game.start();
        let mut frames = 0u64;
        while let Some(handle) = next {
            autopilot(&game, &lift);
            next = game.frame(handle);
            frames += 1;
            if frames >= MAX_DEMO_TICKS {
                break;
            }
        }

        let snap = game.snapshot();
        log::info!(
            "run {run}: {:?} after {} ticks, score {}, best {}",
            snap.phase,
            snap.time_ticks,
            snap.score,
            snap.best
        );
        if snap.phase != RunPhase::Crashed {
            game.reset();
        }
    }

    if let Some(top) = game.highscores().top_score() {
        log::info!("session top score: {top}");
    }
}

/// Hold lift while the craft sits below the center of the next gap
fn autopilot(game: &GameLoop, lift: &LiftSignal) {
    let state = game.state();
    let tuning = &state.tuning;
    let craft = &state.craft;

    let target = state
        .towers
        .iter()
        .find(|t| t.x + tuning.tower_width >= craft.left())
        .map(|t| t.top_height + tuning.tower_gap / 2.0)
        .unwrap_or(tuning.canvas_height / 2.0);

    if craft.pos.y > target {
        lift.press();
    } else {
        lift.release();
    }
}
