//! Rotor Run - a side-scrolling helicopter arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle field, collisions, game state)
//! - `driver`: Tick scheduling loop with cancellation handles
//! - `input`: Shared lift signal fed by the host's input events
//! - `tuning`: Data-driven game balance
//! - `highscores`: Session leaderboard

pub mod driver;
pub mod highscores;
pub mod input;
pub mod sim;
pub mod tuning;

pub use driver::{GameLoop, TickHandle};
pub use highscores::HighScores;
pub use input::LiftSignal;
pub use tuning::Tuning;

/// Game configuration constants
///
/// World units are pixels; rates are per simulation tick (one tick per
/// display refresh).
pub mod consts {
    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 480.0;

    /// Craft defaults - x is fixed, only y moves
    pub const CRAFT_X: f32 = 120.0;
    pub const CRAFT_WIDTH: f32 = 60.0;
    pub const CRAFT_HEIGHT: f32 = 28.0;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.4;
    /// Upward impulse applied while the lift signal is active (negative = up)
    pub const LIFT: f32 = -0.9;
    /// Vertical velocity clamp, both directions
    pub const MAX_VELOCITY: f32 = 6.0;
    /// Craft center may not rise above this altitude (soft ceiling, not fatal)
    pub const CEILING_Y: f32 = 20.0;

    /// Tower geometry
    pub const TOWER_GAP: f32 = 150.0;
    pub const TOWER_WIDTH: f32 = 80.0;
    /// World-space distance between consecutive spawns
    pub const TOWER_SPACING: f32 = 280.0;
    /// Minimum height of the top segment (and, implicitly, the bottom one)
    pub const MIN_TOWER_HEIGHT: f32 = 60.0;
    /// Leftward scroll per tick
    pub const SCROLL_SPEED: f32 = 2.2;
    /// Towers are evicted once their right edge is this far past x=0
    pub const EVICTION_MARGIN: f32 = 40.0;

    /// Craft bottom edge at or below `CANVAS_HEIGHT - GROUND_MARGIN` crashes
    pub const GROUND_MARGIN: f32 = 20.0;
}
