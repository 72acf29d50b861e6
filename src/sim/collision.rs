//! Collision detection
//!
//! Axis-aligned box tests against the ground band and the tower pairs.
//! Comparisons are exact; there is no tolerance.

use std::collections::VecDeque;

use crate::sim::state::{Craft, Tower};
use crate::tuning::Tuning;

/// True when the craft intersects the ground or any tower segment
///
/// The ground check is independent of the field. Tower checks are a pure
/// existence test, short-circuiting on the first overlapping segment.
pub fn collides(craft: &Craft, towers: &VecDeque<Tower>, tuning: &Tuning) -> bool {
    if craft.bottom() >= tuning.canvas_height - tuning.ground_margin {
        return true;
    }

    towers.iter().any(|tower| {
        let in_x_range =
            craft.right() > tower.x && craft.left() < tower.x + tuning.tower_width;
        if !in_x_range {
            return false;
        }
        craft.top() < tower.top_height
            || craft.bottom() > tower.top_height + tuning.tower_gap
    })
}
