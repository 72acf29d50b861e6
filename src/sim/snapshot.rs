//! Read-only frame snapshots
//!
//! Presenters get a copy of everything needed to draw one frame; they never
//! see the live state.

use serde::{Deserialize, Serialize};

use crate::sim::state::{Craft, GameState, RunPhase, Tower};

/// One frame's worth of drawable state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub craft: Craft,
    pub towers: Vec<Tower>,
    pub score: u32,
    pub best: u32,
    pub phase: RunPhase,
    pub time_ticks: u64,
}

impl FrameSnapshot {
    /// Copy the drawable state out of the simulation
    pub fn capture(state: &GameState) -> Self {
        Self {
            craft: state.craft,
            towers: state.towers.iter().copied().collect(),
            score: state.score,
            best: state.best,
            phase: state.phase,
            time_ticks: state.time_ticks,
        }
    }
}
