//! Tick scheduling and cancellation
//!
//! The host runs one frame per display refresh through [`GameLoop`]. Every
//! scheduled tick carries a generation stamp; pause, crash and reset bump
//! the generation before touching state, so a stale callback can never
//! mutate a fresh run.

use crate::highscores::HighScores;
use crate::input::LiftSignal;
use crate::sim::{FrameSnapshot, GameState, RunPhase, TickInput, tick};
use crate::tuning::Tuning;

/// Token for one scheduled tick
///
/// Obtained from [`GameLoop::start`]/[`GameLoop::frame`] and redeemed
/// exactly once; a handle outlived by a pause or reset is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

/// Owns the simulation context and serializes all mutation through the tick
/// boundary
#[derive(Debug)]
pub struct GameLoop {
    state: GameState,
    lift: LiftSignal,
    highscores: HighScores,
    generation: u64,
    pending: bool,
}

impl GameLoop {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, mut tuning: Tuning) -> Self {
        tuning.sanitize();
        Self {
            state: GameState::with_tuning(seed, tuning),
            lift: LiftSignal::new(),
            highscores: HighScores::new(),
            generation: 0,
            pending: false,
        }
    }

    /// Handle for the host's input events; clones share one flag
    pub fn lift_signal(&self) -> LiftSignal {
        self.lift.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    /// Read-only state for the presenter
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    /// Run one scheduled tick
    ///
    /// Returns the handle for the next tick, or `None` once the loop has
    /// halted (pause, crash, idle). A stale or already-redeemed handle is
    /// rejected without touching state.
    pub fn frame(&mut self, handle: TickHandle) -> Option<TickHandle> {
        if handle.generation != self.generation || !self.pending {
            log::debug!("stale tick handle ignored (gen {})", handle.generation);
            return None;
        }
        self.pending = false;

        let input = TickInput {
            lift_active: self.lift.is_active(),
            ..TickInput::default()
        };
        let was_running = self.state.phase == RunPhase::Running;
        tick(&mut self.state, &input);

        if was_running && self.state.phase == RunPhase::Crashed {
            self.invalidate();
            self.highscores
                .add_score(self.state.score, self.state.time_ticks);
        }

        self.schedule_if_running()
    }

    /// Begin a fresh run; yields the first tick handle when accepted
    pub fn start(&mut self) -> Option<TickHandle> {
        self.invalidate();
        self.state.start();
        self.schedule_if_running()
    }

    /// Halt the loop, preserving the run for [`resume`](Self::resume)
    pub fn pause(&mut self) {
        self.invalidate();
        self.state.pause();
    }

    /// Continue a paused run; yields the next tick handle when accepted
    pub fn resume(&mut self) -> Option<TickHandle> {
        self.invalidate();
        self.state.resume();
        self.schedule_if_running()
    }

    /// The single user-facing control: start, pause or resume
    pub fn toggle(&mut self) -> Option<TickHandle> {
        self.invalidate();
        self.state.toggle();
        self.schedule_if_running()
    }

    /// Force a return to Idle from any state; outstanding handles die here
    pub fn reset(&mut self) {
        self.invalidate();
        self.state.reset();
    }

    /// Invalidate whatever tick is in flight before any state change
    fn invalidate(&mut self) {
        self.generation += 1;
        self.pending = false;
    }

    fn schedule_if_running(&mut self) -> Option<TickHandle> {
        if self.state.phase == RunPhase::Running {
            self.pending = true;
            Some(TickHandle {
                generation: self.generation,
            })
        } else {
            None
        }
    }
}
