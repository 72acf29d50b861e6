//! Per-tick simulation step
//!
//! One tick, atomic from the simulation's perspective: control edges first,
//! then physics, field advance and the collision check while running. The
//! score from a field advance lands even when the same tick ends in a crash.

use crate::sim::collision::collides;
use crate::sim::field::advance_field;
use crate::sim::physics::step_craft;
use crate::sim::state::{GameState, RunPhase};

/// Input sampled for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Lift signal, read once at the start of the tick
    pub lift_active: bool,
    /// Combined start/pause/resume control edge
    pub toggle: bool,
    /// Force a return to Idle
    pub reset: bool,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.reset {
        state.reset();
        return;
    }
    if input.toggle {
        state.toggle();
    }

    if state.phase != RunPhase::Running {
        return;
    }

    state.time_ticks += 1;

    step_craft(&mut state.craft, input.lift_active, &state.tuning);

    let craft_x = state.craft.pos.x;
    state.score += advance_field(
        &mut state.towers,
        &mut state.rng_state,
        craft_x,
        &state.tuning,
    );

    if collides(&state.craft, &state.towers, &state.tuning) {
        state.crash();
    }
}
