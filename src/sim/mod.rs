//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per display refresh)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod field;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use field::{advance_field, spawn_tower};
pub use physics::step_craft;
pub use snapshot::FrameSnapshot;
pub use state::{Craft, GameState, RngState, RunPhase, Tower};
pub use tick::{TickInput, tick};
