//! Data-driven game balance
//!
//! Every gameplay constant as a field, so tests and alternative playfields
//! can override values without touching the sim. Defaults come from
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay constants for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield dimensions
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Craft placement and bounding box
    pub craft_x: f32,
    pub craft_width: f32,
    pub craft_height: f32,

    /// Physics, per tick
    pub gravity: f32,
    pub lift: f32,
    pub max_velocity: f32,
    pub ceiling_y: f32,

    /// Tower geometry and scrolling
    pub tower_gap: f32,
    pub tower_width: f32,
    pub tower_spacing: f32,
    pub min_tower_height: f32,
    pub scroll_speed: f32,
    pub eviction_margin: f32,

    /// Ground collision band height
    pub ground_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            craft_x: consts::CRAFT_X,
            craft_width: consts::CRAFT_WIDTH,
            craft_height: consts::CRAFT_HEIGHT,
            gravity: consts::GRAVITY,
            lift: consts::LIFT,
            max_velocity: consts::MAX_VELOCITY,
            ceiling_y: consts::CEILING_Y,
            tower_gap: consts::TOWER_GAP,
            tower_width: consts::TOWER_WIDTH,
            tower_spacing: consts::TOWER_SPACING,
            min_tower_height: consts::MIN_TOWER_HEIGHT,
            scroll_speed: consts::SCROLL_SPEED,
            eviction_margin: consts::EVICTION_MARGIN,
            ground_margin: consts::GROUND_MARGIN,
        }
    }
}

impl Tuning {
    /// Largest top-segment height the spawn draw may produce
    ///
    /// Collapses to `min_tower_height` when the gap leaves no room, so the
    /// draw range can never invert.
    pub fn max_tower_height(&self) -> f32 {
        (self.canvas_height - self.tower_gap - self.min_tower_height)
            .max(self.min_tower_height)
    }

    /// Clamp a gap too large for the canvas back into the playable band
    pub fn sanitize(&mut self) {
        let playable = self.canvas_height - self.ground_margin;
        let max_gap = (playable - 2.0 * self.min_tower_height).max(0.0);
        if self.tower_gap > max_gap {
            log::warn!(
                "tower gap {} exceeds playable band, clamping to {}",
                self.tower_gap,
                max_gap
            );
            self.tower_gap = max_gap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_json() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }

    #[test]
    fn test_sane_defaults_survive_sanitize() {
        let mut tuning = Tuning::default();
        let before = tuning.clone();
        tuning.sanitize();
        assert_eq!(tuning, before);
    }

    #[test]
    fn test_oversized_gap_is_clamped() {
        let mut tuning = Tuning::default();
        tuning.tower_gap = tuning.canvas_height * 3.0;
        tuning.sanitize();
        let playable = tuning.canvas_height - tuning.ground_margin;
        assert_eq!(tuning.tower_gap, playable - 2.0 * tuning.min_tower_height);
        assert!(tuning.max_tower_height() >= tuning.min_tower_height);
    }

    #[test]
    fn test_max_height_never_inverts() {
        let mut tuning = Tuning::default();
        tuning.tower_gap = tuning.canvas_height;
        assert_eq!(tuning.max_tower_height(), tuning.min_tower_height);
    }
}
