//! Game state and core simulation types
//!
//! All state that must survive pause/resume lives here, and all run
//! lifecycle transitions go through the methods on [`GameState`].

use std::collections::VecDeque;

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RunPhase {
    /// No run in progress, waiting for start
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Run suspended; resumable with no state drift
    Paused,
    /// Run ended by collision; terminal until an explicit reset
    Crashed,
}

/// The player's craft
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    /// Center position; x never changes after construction
    pub pos: Vec2,
    /// Vertical velocity (positive = down, screen coordinates)
    pub vel: f32,
    /// Collision bounding box, centered on `pos`
    pub width: f32,
    pub height: f32,
}

impl Craft {
    /// Craft at rest in the vertical center of the playfield
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.craft_x, tuning.canvas_height / 2.0),
            vel: 0.0,
            width: tuning.craft_width,
            height: tuning.craft_height,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A tower pair: top and bottom segments sharing one x-span, separated by
/// the fixed vertical gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    /// Left edge; scrolls left every tick
    pub x: f32,
    /// Height of the top segment; the bottom segment starts at
    /// `top_height + tower_gap`
    pub top_height: f32,
    /// Set exactly once, the first tick the craft clears this pair
    pub passed: bool,
}

/// RNG state wrapper for serialization
///
/// Each spawn draws from a fresh generator on the next stream, so a seed
/// replays identically without serializing generator internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next draw; advances the stream
    pub fn next_stream(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Gameplay constants
    pub tuning: Tuning,
    /// Current phase
    pub phase: RunPhase,
    /// Player craft
    pub craft: Craft,
    /// Obstacle field; front = oldest = smallest x
    pub towers: VecDeque<Tower>,
    /// Towers cleared this run
    pub score: u32,
    /// Best score this session, updated only at crash
    pub best: u32,
    /// Tick counter for the current run
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            craft: Craft::new(&tuning),
            towers: VecDeque::new(),
            score: 0,
            best: 0,
            time_ticks: 0,
            phase: RunPhase::Idle,
            tuning,
        }
    }

    /// Reinitialize craft, field and score. Phase and best are untouched.
    fn reset_run(&mut self) {
        self.craft = Craft::new(&self.tuning);
        self.towers.clear();
        self.score = 0;
        self.time_ticks = 0;
    }

    /// Begin a fresh run. Valid from `Idle` and `Crashed`; no-op otherwise.
    pub fn start(&mut self) {
        match self.phase {
            RunPhase::Idle | RunPhase::Crashed => {
                self.reset_run();
                self.phase = RunPhase::Running;
                log::info!("run started (seed {})", self.seed);
            }
            _ => {}
        }
    }

    /// Suspend the run. Valid from `Running`; no-op otherwise.
    pub fn pause(&mut self) {
        if self.phase == RunPhase::Running {
            self.phase = RunPhase::Paused;
            log::debug!("paused at tick {}", self.time_ticks);
        }
    }

    /// Continue a suspended run from preserved state. Valid from `Paused`;
    /// no-op otherwise.
    pub fn resume(&mut self) {
        if self.phase == RunPhase::Paused {
            self.phase = RunPhase::Running;
            log::debug!("resumed at tick {}", self.time_ticks);
        }
    }

    /// End the run after a collision. Valid from `Running`; no-op otherwise.
    pub fn crash(&mut self) {
        if self.phase == RunPhase::Running {
            self.phase = RunPhase::Crashed;
            self.best = self.best.max(self.score);
            log::info!(
                "crashed at tick {} with score {} (best {})",
                self.time_ticks,
                self.score,
                self.best
            );
        }
    }

    /// Force a return to `Idle` from any phase. Best score is kept.
    pub fn reset(&mut self) {
        self.reset_run();
        self.phase = RunPhase::Idle;
        log::debug!("reset to idle");
    }

    /// The single user-facing control: start, pause or resume depending on
    /// the current phase. Does nothing after a crash; reset first.
    pub fn toggle(&mut self) {
        match self.phase {
            RunPhase::Idle if self.score == 0 => self.start(),
            RunPhase::Idle => {}
            RunPhase::Running => self.pause(),
            RunPhase::Paused => self.resume(),
            RunPhase::Crashed => {}
        }
    }
}
